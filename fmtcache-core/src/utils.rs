//! Helpers shared by the eviction paths of [`FormatCache`](crate::FormatCache).
//!
//! The eviction queue is a `VecDeque` of keys guarded by a mutex; the entries
//! themselves live in a `DashMap`. Keys may linger in the queue after their entry
//! was overwritten or removed by another path ("orphans"); every helper here
//! tolerates that.

use crate::CacheEntry;
use dashmap::DashMap;
use std::collections::VecDeque;
use std::hash::Hash;

/// Moves a key to the end of the order queue (marks as most recently used).
///
/// If the key is not in the queue, the queue is left unchanged.
///
/// # Examples
///
/// ```
/// use std::collections::VecDeque;
/// use fmtcache_core::utils::move_key_to_end;
///
/// let mut order = VecDeque::from(vec!["a", "b", "c"]);
/// move_key_to_end(&mut order, &"b");
/// assert_eq!(order, VecDeque::from(vec!["a", "c", "b"]));
///
/// move_key_to_end(&mut order, &"z");
/// assert_eq!(order.len(), 3);
/// ```
pub fn move_key_to_end<K: PartialEq + Clone>(order: &mut VecDeque<K>, key: &K) {
    if let Some(pos) = order.iter().position(|k| k == key) {
        if let Some(k) = order.remove(pos) {
            order.push_back(k);
        }
    }
}

/// Removes every occurrence of `key` from the order queue.
pub fn remove_key_from_order<K: PartialEq>(order: &mut VecDeque<K>, key: &K) {
    order.retain(|k| k != key);
}

/// Finds the candidate key whose entry has the fewest hits.
///
/// Keys without an entry are skipped. Ties are resolved in favour of the first
/// candidate, which for an order queue is the oldest key.
pub fn find_min_frequency_key<'a, K, F, I>(
    entries: &DashMap<K, CacheEntry<F>>,
    candidates: I,
) -> Option<K>
where
    K: Eq + Hash + Clone + 'a,
    I: IntoIterator<Item = &'a K>,
{
    let mut min_freq_key: Option<K> = None;
    let mut min_freq = u64::MAX;

    for key in candidates {
        if let Some(entry) = entries.get(key) {
            let freq = entry.frequency();
            if freq < min_freq {
                min_freq = freq;
                min_freq_key = Some(key.clone());
            }
        }
    }

    min_freq_key
}

/// Pops keys from the front of the queue until one that is still present in
/// `entries` has been removed. Returns the removed key.
pub fn evict_front<K, F>(entries: &DashMap<K, CacheEntry<F>>, order: &mut VecDeque<K>) -> Option<K>
where
    K: Eq + Hash,
{
    while let Some(key) = order.pop_front() {
        if entries.remove(&key).is_some() {
            return Some(key);
        }
    }
    None
}

/// Removes `key` from both the entries map and the order queue.
pub fn remove_key<K, F>(entries: &DashMap<K, CacheEntry<F>>, order: &mut VecDeque<K>, key: &K) -> bool
where
    K: Eq + Hash,
{
    remove_key_from_order(order, key);
    entries.remove(key).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn entries_with(values: &[(&'static str, u64)]) -> (DashMap<&'static str, CacheEntry<i32>>, Vec<Arc<i32>>) {
        let entries = DashMap::new();
        let mut keep = Vec::new();
        for (i, (key, hits)) in values.iter().enumerate() {
            let formatter = Arc::new(i as i32);
            let entry = CacheEntry::strong(&formatter);
            for _ in 0..*hits {
                entry.increment_frequency();
            }
            entries.insert(*key, entry);
            keep.push(formatter);
        }
        (entries, keep)
    }

    #[test]
    fn test_move_key_to_end() {
        let mut order = VecDeque::from(vec![1, 2, 3]);
        move_key_to_end(&mut order, &1);
        assert_eq!(order, VecDeque::from(vec![2, 3, 1]));
    }

    #[test]
    fn test_find_min_frequency_key_skips_orphans() {
        let (entries, _keep) = entries_with(&[("a", 5), ("b", 2), ("c", 8)]);
        let order = VecDeque::from(vec!["ghost", "a", "b", "c"]);
        assert_eq!(find_min_frequency_key(&entries, &order), Some("b"));
    }

    #[test]
    fn test_find_min_frequency_key_prefers_oldest_on_tie() {
        let (entries, _keep) = entries_with(&[("a", 1), ("b", 1)]);
        let order = VecDeque::from(vec!["b", "a"]);
        assert_eq!(find_min_frequency_key(&entries, &order), Some("b"));
    }

    #[test]
    fn test_find_min_frequency_key_empty() {
        let entries: DashMap<&str, CacheEntry<i32>> = DashMap::new();
        assert_eq!(find_min_frequency_key(&entries, &VecDeque::<&str>::new()), None);
    }

    #[test]
    fn test_evict_front_skips_orphans() {
        let (entries, _keep) = entries_with(&[("b", 0), ("c", 0)]);
        let mut order = VecDeque::from(vec!["a", "b", "c"]);
        assert_eq!(evict_front(&entries, &mut order), Some("b"));
        assert_eq!(order, VecDeque::from(vec!["c"]));
        assert!(!entries.contains_key("b"));
    }

    #[test]
    fn test_remove_key() {
        let (entries, _keep) = entries_with(&[("a", 0)]);
        let mut order = VecDeque::from(vec!["a", "a"]);
        assert!(remove_key(&entries, &mut order, &"a"));
        assert!(order.is_empty());
        assert!(!remove_key(&entries, &mut order, &"a"));
    }
}
