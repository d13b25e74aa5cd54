use crate::defaults::{EnvironmentDefaults, SystemDefaults};
use crate::utils::{
    evict_front, find_min_frequency_key, move_key_to_end, remove_key, remove_key_from_order,
};
use crate::{
    CacheConfig, CacheEntry, CompositeKey, ConfigError, EvictionPolicy, FormatterFactory,
    LocaleId, Retention, TimeZoneId,
};
use dashmap::DashMap;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::{debug, trace};

#[cfg(feature = "stats")]
use crate::CacheStats;

/// Thread-safe cache of formatter instances keyed by `(pattern, zone, locale)`.
///
/// Construction is delegated to a [`FormatterFactory`]; the cache only decides
/// when a formatter can be reused. Formatters are handed out as `Arc<F>`.
///
/// # Retention
///
/// By default the cache owns its formatters ([`Retention::Strong`]) and keeps
/// at most [`DEFAULT_LIMIT`](crate::DEFAULT_LIMIT) of them, evicting the least
/// recently used. The limit, the [`EvictionPolicy`] and a TTL are set through
/// [`CacheConfig`].
///
/// With [`Retention::Weak`] ([`FormatCache::weak`]) the cache stores `Weak`
/// references only: a formatter stays cached for exactly as long as some caller
/// holds on to it. Once the last `Arc` is dropped, the next lookup for that key
/// calls the factory again. Stale slots are swept every
/// [`CacheConfig::purge_interval`] publications, or on demand with
/// [`purge`](Self::purge).
///
/// # Thread Safety
///
/// - Lookups take a shared lock on one `DashMap` shard and nothing else (plus
///   the order-queue mutex when an LRU limit is configured).
/// - The factory runs with no lock held, so a slow construction never stalls
///   other keys.
/// - Misses on the same key are **not** serialized: each racing caller builds
///   its own formatter and the last one published stays cached. Every caller
///   still gets a fully built formatter for its key.
///
/// # Errors
///
/// Factory errors are returned unchanged and nothing is stored for the key.
/// A panicking factory unwinds through the caller with the map untouched.
///
/// # Examples
///
/// ```
/// use fmtcache_core::defaults::FixedDefaults;
/// use fmtcache_core::{FnFactory, FormatCache, LocaleId, TimeZoneId};
/// use std::sync::Arc;
///
/// let factory = FnFactory::new("yyyy", |p: &str, tz: &TimeZoneId, l: &LocaleId| {
///     Ok::<_, String>(format!("{p} in {tz} for {l}"))
/// });
/// let cache = FormatCache::new(factory).with_defaults(FixedDefaults::new("UTC", "en_US"));
///
/// let first = cache.get_instance_with("HH:mm", None, None).unwrap();
/// let second = cache
///     .get_instance_with("HH:mm", Some(&"UTC".into()), Some(&"en_US".into()))
///     .unwrap();
/// assert!(Arc::ptr_eq(&first, &second));
/// assert_eq!(first.as_str(), "HH:mm in UTC for en_US");
/// ```
pub struct FormatCache<Fac: FormatterFactory> {
    factory: Fac,
    defaults: Arc<dyn EnvironmentDefaults>,
    entries: DashMap<CompositeKey, CacheEntry<Fac::Formatter>>,
    order: Mutex<VecDeque<CompositeKey>>,
    config: CacheConfig,
    publications: AtomicUsize,
    #[cfg(feature = "stats")]
    stats: Arc<CacheStats>,
}

impl<Fac: FormatterFactory> FormatCache<Fac> {
    /// Bounded LRU cache owning up to [`DEFAULT_LIMIT`](crate::DEFAULT_LIMIT)
    /// formatters, reading the host defaults.
    pub fn new(factory: Fac) -> Self {
        Self::build(factory, CacheConfig::default())
    }

    /// Weak-retention cache with no limit, reading the host defaults.
    pub fn weak(factory: Fac) -> Self {
        Self::build(factory, CacheConfig::weak())
    }

    /// Cache with an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when `config` fails [`CacheConfig::validate`].
    pub fn try_with_config(factory: Fac, config: CacheConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(factory, config))
    }

    fn build(factory: Fac, config: CacheConfig) -> Self {
        #[cfg(feature = "stats")]
        let stats = Arc::new(CacheStats::new());
        #[cfg(feature = "stats")]
        if let Some(name) = &config.name {
            crate::stats_registry::register(name, Arc::clone(&stats));
        }

        Self {
            factory,
            defaults: Arc::new(SystemDefaults::new()),
            entries: DashMap::new(),
            order: Mutex::new(VecDeque::new()),
            config,
            publications: AtomicUsize::new(0),
            #[cfg(feature = "stats")]
            stats,
        }
    }

    /// Replaces the provider of default zone and locale.
    pub fn with_defaults(mut self, defaults: impl EnvironmentDefaults + 'static) -> Self {
        self.defaults = Arc::new(defaults);
        self
    }

    /// Shares an existing provider of default zone and locale.
    pub fn with_shared_defaults(mut self, defaults: Arc<dyn EnvironmentDefaults>) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn factory(&self) -> &Fac {
        &self.factory
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    pub fn defaults(&self) -> &dyn EnvironmentDefaults {
        self.defaults.as_ref()
    }

    /// Formatter for the factory's default pattern in the default zone and locale.
    ///
    /// # Errors
    ///
    /// Whatever the factory returns for its own default pattern; that only
    /// happens when the factory is misconfigured.
    pub fn get_instance(&self) -> Result<Arc<Fac::Formatter>, Fac::Error> {
        let time_zone = self.defaults.default_time_zone();
        let locale = self.defaults.default_locale();
        let pattern = self.factory.default_pattern(&locale);
        self.get_factory_instance(&pattern, Some(&time_zone), Some(&locale))
    }

    /// Formatter for `pattern`, building it if needed.
    ///
    /// An omitted zone or locale is replaced by the current default before the
    /// key is built, so omitting a parameter and passing the default explicitly
    /// share one cache entry.
    ///
    /// # Errors
    ///
    /// The factory's error for an invalid pattern, unchanged. Nothing is cached.
    pub fn get_instance_with(
        &self,
        pattern: &str,
        time_zone: Option<&TimeZoneId>,
        locale: Option<&LocaleId>,
    ) -> Result<Arc<Fac::Formatter>, Fac::Error> {
        self.get_factory_instance(pattern, time_zone, locale)
    }

    /// Lookup-or-create primitive behind [`get_instance_with`](Self::get_instance_with).
    ///
    /// 1. Normalize the inputs into a [`CompositeKey`].
    /// 2. Probe the map; a live, unexpired entry is returned as is.
    /// 3. Otherwise call the factory with no lock held, publish the result
    ///    (overwriting any stale entry) and return it.
    pub fn get_factory_instance(
        &self,
        pattern: &str,
        time_zone: Option<&TimeZoneId>,
        locale: Option<&LocaleId>,
    ) -> Result<Arc<Fac::Formatter>, Fac::Error> {
        let (time_zone, locale) = self.resolve_ids(time_zone, locale);
        let key = CompositeKey::new(pattern, Some(time_zone.clone()), Some(locale.clone()));

        if let Some(formatter) = self.cached(&key) {
            return Ok(formatter);
        }

        debug!(key = %key, "constructing formatter");
        let formatter = self
            .factory
            .create_instance(pattern, &time_zone, &locale)
            .map_err(|err| {
                debug!(key = %key, "formatter construction failed");
                err
            })?;
        let formatter = Arc::new(formatter);
        self.publish(key, &formatter);
        Ok(formatter)
    }

    /// Builds the key a lookup with these parameters would use right now.
    pub fn normalize(
        &self,
        pattern: &str,
        time_zone: Option<&TimeZoneId>,
        locale: Option<&LocaleId>,
    ) -> CompositeKey {
        let (time_zone, locale) = self.resolve_ids(time_zone, locale);
        CompositeKey::new(pattern, Some(time_zone), Some(locale))
    }

    /// Substitutes the current defaults for omitted ids.
    fn resolve_ids(
        &self,
        time_zone: Option<&TimeZoneId>,
        locale: Option<&LocaleId>,
    ) -> (TimeZoneId, LocaleId) {
        let time_zone = time_zone
            .cloned()
            .unwrap_or_else(|| self.defaults.default_time_zone());
        let locale = locale
            .cloned()
            .unwrap_or_else(|| self.defaults.default_locale());
        (time_zone, locale)
    }

    fn cached(&self, key: &CompositeKey) -> Option<Arc<Fac::Formatter>> {
        // The shard guard must be gone before the order mutex is taken.
        let resolved = self.entries.get(key).map(|entry| {
            let formatter = entry.resolve(self.config.ttl);
            if formatter.is_some() && self.config.policy == EvictionPolicy::LFU {
                entry.increment_frequency();
            }
            formatter
        });

        match resolved {
            Some(Some(formatter)) => {
                #[cfg(feature = "stats")]
                self.stats.record_hit();
                trace!(key = %key, "formatter cache hit");

                if self.config.limit.is_some() && self.config.policy.tracks_recency() {
                    move_key_to_end(&mut self.order.lock(), key);
                }
                Some(formatter)
            }
            Some(None) => {
                #[cfg(feature = "stats")]
                {
                    self.stats.record_miss();
                    self.stats.record_collected();
                }
                debug!(key = %key, "cached formatter was reclaimed or expired");
                None
            }
            None => {
                #[cfg(feature = "stats")]
                self.stats.record_miss();
                None
            }
        }
    }

    fn publish(&self, key: CompositeKey, formatter: &Arc<Fac::Formatter>) {
        let entry = match self.config.retention {
            Retention::Weak => CacheEntry::weak(formatter),
            Retention::Strong => CacheEntry::strong(formatter),
        };

        match self.config.limit {
            None => {
                self.entries.insert(key, entry);
            }
            Some(limit) => {
                let mut order = self.order.lock();
                remove_key_from_order(&mut order, &key);
                order.push_back(key.clone());
                self.entries.insert(key, entry);
                self.handle_entry_limit_eviction(&mut order, limit);
            }
        }

        trace!(limit = ?self.config.limit, "published formatter");
        self.maybe_purge();
    }

    /// Brings the entry count back under `limit`.
    ///
    /// Reclaimed and expired entries are dropped first; live ones are then
    /// evicted according to the configured policy. The key at the back of the
    /// queue was just published and is never picked by LFU or Random.
    fn handle_entry_limit_eviction(&self, order: &mut VecDeque<CompositeKey>, limit: usize) {
        if self.entries.len() <= limit {
            return;
        }
        self.purge_locked(order);

        while self.entries.len() > limit {
            let older = order.len().saturating_sub(1);
            let evicted = match self.config.policy {
                EvictionPolicy::FIFO | EvictionPolicy::LRU => evict_front(&self.entries, order),
                EvictionPolicy::LFU => {
                    match find_min_frequency_key(&self.entries, order.iter().take(older)) {
                        Some(victim) if remove_key(&self.entries, order, &victim) => Some(victim),
                        _ => None,
                    }
                }
                EvictionPolicy::Random => {
                    let mut victim = None;
                    while victim.is_none() && order.len() > 1 {
                        let pos = fastrand::usize(..order.len() - 1);
                        if let Some(candidate) = order.remove(pos) {
                            if self.entries.remove(&candidate).is_some() {
                                victim = Some(candidate);
                            }
                        }
                    }
                    victim
                }
            };

            match evicted {
                Some(victim) => {
                    #[cfg(feature = "stats")]
                    self.stats.record_eviction();
                    debug!(key = %victim, policy = ?self.config.policy, "evicted formatter");
                }
                None => break,
            }
        }
    }

    fn maybe_purge(&self) {
        if self.config.retention == Retention::Strong && self.config.ttl.is_none() {
            return;
        }
        let published = self.publications.fetch_add(1, Ordering::Relaxed) + 1;
        if published % self.config.purge_interval == 0 {
            self.purge();
        }
    }

    /// Drops every entry whose formatter was reclaimed or whose TTL ran out.
    ///
    /// Returns the number of entries removed.
    pub fn purge(&self) -> usize {
        let removed = if self.config.limit.is_some() {
            let mut order = self.order.lock();
            self.purge_locked(&mut order)
        } else {
            self.purge_entries()
        };
        if removed > 0 {
            debug!(removed, "purged stale formatter entries");
        }
        removed
    }

    fn purge_entries(&self) -> usize {
        let ttl = self.config.ttl;
        let before = self.entries.len();
        self.entries.retain(|_, entry| entry.is_live(ttl));
        before.saturating_sub(self.entries.len())
    }

    fn purge_locked(&self, order: &mut VecDeque<CompositeKey>) -> usize {
        let removed = self.purge_entries();
        order.retain(|key| self.entries.contains_key(key));
        removed
    }

    /// Whether `key` currently resolves to a live formatter.
    pub fn contains_key(&self, key: &CompositeKey) -> bool {
        self.entries
            .get(key)
            .map_or(false, |entry| entry.is_live(self.config.ttl))
    }

    /// Forgets the entry for `key`. Formatters already handed out stay valid.
    pub fn remove(&self, key: &CompositeKey) -> bool {
        let mut order = self.order.lock();
        remove_key(&self.entries, &mut order, key)
    }

    /// Number of slots, including ones whose formatter was already reclaimed.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of slots that would serve a hit right now.
    pub fn live_len(&self) -> usize {
        let ttl = self.config.ttl;
        self.entries
            .iter()
            .filter(|entry| entry.value().is_live(ttl))
            .count()
    }

    /// Removes all entries.
    pub fn clear(&self) {
        let mut order = self.order.lock();
        self.entries.clear();
        order.clear();
    }

    /// Lookup statistics of this cache.
    #[cfg(feature = "stats")]
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }
}

impl<Fac: FormatterFactory> fmt::Debug for FormatCache<Fac> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatCache")
            .field("config", &self.config)
            .field("entries", &self.entries.len())
            .finish_non_exhaustive()
    }
}
