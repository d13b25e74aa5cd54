use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use crate::CacheStats;

/// Global registry of named cache statistics.
///
/// A [`FormatCache`](crate::FormatCache) built with
/// [`CacheConfig::with_name`](crate::CacheConfig::with_name) registers its
/// statistics here, so they can be inspected without a handle to the cache.
/// Registering a name twice replaces the previous entry.
///
/// # Examples
///
/// ```
/// use fmtcache_core::stats_registry;
///
/// if let Some(stats) = stats_registry::get("date-time") {
///     println!("Hit rate: {:.2}%", stats.hit_rate() * 100.0);
/// }
/// ```
static STATS_REGISTRY: Lazy<RwLock<HashMap<String, Arc<CacheStats>>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Register a cache's statistics under a given name.
pub fn register(name: &str, stats: Arc<CacheStats>) {
    let mut registry = STATS_REGISTRY.write();
    registry.insert(name.to_string(), stats);
}

/// Snapshot of the statistics registered under `name`.
pub fn get(name: &str) -> Option<CacheStats> {
    let registry = STATS_REGISTRY.read();
    registry.get(name).map(|stats| (**stats).clone())
}

/// Live handle to the statistics registered under `name`.
pub fn get_ref(name: &str) -> Option<Arc<CacheStats>> {
    let registry = STATS_REGISTRY.read();
    registry.get(name).cloned()
}

/// Names of all registered caches.
pub fn list() -> Vec<String> {
    let registry = STATS_REGISTRY.read();
    registry.keys().cloned().collect()
}

/// Removes the entry for `name`; the statistics themselves are untouched.
pub fn unregister(name: &str) -> bool {
    STATS_REGISTRY.write().remove(name).is_some()
}

/// Clear all registered statistics.
pub fn clear() {
    let mut registry = STATS_REGISTRY.write();
    registry.clear();
}

/// Reset the counters registered under `name`. Returns `false` if unknown.
pub fn reset(name: &str) -> bool {
    let registry = STATS_REGISTRY.read();
    if let Some(stats) = registry.get(name) {
        stats.reset();
        true
    } else {
        false
    }
}
