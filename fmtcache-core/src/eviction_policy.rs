/// Policy used to pick a victim when a cache with an entry limit is full.
///
/// Only consulted when [`CacheConfig::limit`](crate::CacheConfig) is set, which
/// it is by default. Without a limit, entries leave the cache through
/// weak-reference collection, TTL expiry or explicit removal.
///
/// # Variants
///
/// * `FIFO` - **First In, First Out**
///   - The oldest published formatter is evicted first
///   - Hits do not change the order
///
/// * `LRU` - **Least Recently Used** (default)
///   - The least recently looked-up formatter is evicted first
///   - Every hit moves the key to the "most recent" position
///
/// * `LFU` - **Least Frequently Used**
///   - The formatter with the fewest hits is evicted first
///   - Ties go to the oldest entry
///
/// * `Random` - **Random replacement**
///   - A uniformly random entry is evicted
///   - No bookkeeping on hits
///
/// # Examples
///
/// ```
/// use fmtcache_core::EvictionPolicy;
///
/// assert_eq!(EvictionPolicy::default(), EvictionPolicy::LRU);
///
/// let policy: EvictionPolicy = "lfu".into();
/// assert_eq!(policy, EvictionPolicy::LFU);
/// ```
///
/// # Performance Characteristics
///
/// | Policy | Eviction | Cache Hit |
/// |--------|----------|-----------|
/// | FIFO   | O(1)     | O(1)      |
/// | LRU    | O(1)     | O(n)      |
/// | LFU    | O(n)     | O(1)      |
/// | Random | O(n)     | O(1)      |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EvictionPolicy {
    FIFO,
    LRU,
    LFU,
    Random,
}

impl EvictionPolicy {
    /// Whether hits reorder the eviction queue.
    pub(crate) fn tracks_recency(self) -> bool {
        matches!(self, EvictionPolicy::LRU)
    }
}

impl Default for EvictionPolicy {
    fn default() -> Self {
        EvictionPolicy::LRU
    }
}

/// Converts a string slice to an `EvictionPolicy`.
///
/// The conversion is case-insensitive and defaults to LRU for unrecognized values.
///
/// ```
/// use fmtcache_core::EvictionPolicy;
///
/// assert_eq!(EvictionPolicy::from("FIFO"), EvictionPolicy::FIFO);
/// assert_eq!(EvictionPolicy::from("random"), EvictionPolicy::Random);
/// assert_eq!(EvictionPolicy::from("mru"), EvictionPolicy::LRU);
/// ```
impl From<&str> for EvictionPolicy {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "fifo" => EvictionPolicy::FIFO,
            "lfu" => EvictionPolicy::LFU,
            "random" => EvictionPolicy::Random,
            _ => EvictionPolicy::LRU,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!(EvictionPolicy::from("Lru"), EvictionPolicy::LRU);
        assert_eq!(EvictionPolicy::from("lFu"), EvictionPolicy::LFU);
        assert_eq!(EvictionPolicy::from(""), EvictionPolicy::LRU);
    }

    #[test]
    fn test_only_lru_tracks_recency() {
        assert!(EvictionPolicy::LRU.tracks_recency());
        assert!(!EvictionPolicy::FIFO.tracks_recency());
        assert!(!EvictionPolicy::LFU.tracks_recency());
        assert!(!EvictionPolicy::Random.tracks_recency());
    }
}
