use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};
use std::time::Instant;

/// How a cache entry holds on to its formatter.
///
/// * `Weak` - the cache does not keep the formatter alive. Once every caller
///   has dropped its `Arc`, the formatter is freed and the entry stops resolving.
/// * `Strong` - the cache owns a reference; the entry lives until it is evicted,
///   expires or is removed.
pub enum Handle<F> {
    Weak(Weak<F>),
    Strong(Arc<F>),
}

impl<F> Handle<F> {
    fn resolve(&self) -> Option<Arc<F>> {
        match self {
            Handle::Weak(weak) => weak.upgrade(),
            Handle::Strong(strong) => Some(Arc::clone(strong)),
        }
    }

    fn is_live(&self) -> bool {
        match self {
            Handle::Weak(weak) => weak.strong_count() > 0,
            Handle::Strong(_) => true,
        }
    }
}

/// A published formatter together with its bookkeeping.
///
/// # Fields
///
/// * `handle` - weak or strong reference to the formatter
/// * `inserted_at` - when the formatter was published (TTL support)
/// * `frequency` - number of hits served by this entry (LFU policy)
///
/// The frequency counter is atomic so hits can be recorded while holding only a
/// shared reference to the entry.
///
/// # Examples
///
/// ```
/// use fmtcache_core::CacheEntry;
/// use std::sync::Arc;
///
/// let formatter = Arc::new(String::from("yyyy"));
/// let entry = CacheEntry::weak(&formatter);
/// assert!(entry.resolve(None).is_some());
///
/// drop(formatter);
/// assert!(entry.resolve(None).is_none());
/// ```
pub struct CacheEntry<F> {
    pub handle: Handle<F>,
    pub inserted_at: Instant,
    frequency: AtomicU64,
}

impl<F> CacheEntry<F> {
    pub fn new(handle: Handle<F>) -> Self {
        Self {
            handle,
            inserted_at: Instant::now(),
            frequency: AtomicU64::new(0),
        }
    }

    /// Entry that only holds a weak reference to `formatter`.
    pub fn weak(formatter: &Arc<F>) -> Self {
        Self::new(Handle::Weak(Arc::downgrade(formatter)))
    }

    /// Entry that keeps `formatter` alive.
    pub fn strong(formatter: &Arc<F>) -> Self {
        Self::new(Handle::Strong(Arc::clone(formatter)))
    }

    /// Returns true if the entry has expired based on the provided TTL in seconds.
    ///
    /// `None` means no expiration.
    pub fn is_expired(&self, ttl: Option<u64>) -> bool {
        if let Some(ttl_secs) = ttl {
            self.inserted_at.elapsed().as_secs() >= ttl_secs
        } else {
            false
        }
    }

    /// The formatter, if it is still alive and the entry has not expired.
    pub fn resolve(&self, ttl: Option<u64>) -> Option<Arc<F>> {
        if self.is_expired(ttl) {
            return None;
        }
        self.handle.resolve()
    }

    /// Whether the entry can still serve a hit.
    pub fn is_live(&self, ttl: Option<u64>) -> bool {
        !self.is_expired(ttl) && self.handle.is_live()
    }

    pub fn frequency(&self) -> u64 {
        self.frequency.load(Ordering::Relaxed)
    }

    /// Increments the hit counter used by the LFU policy.
    pub fn increment_frequency(&self) {
        // fetch_update never fails here: the closure always returns Some.
        let _ = self
            .frequency
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |f| {
                Some(f.saturating_add(1))
            });
    }
}
