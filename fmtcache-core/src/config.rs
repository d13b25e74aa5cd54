use crate::{ConfigError, EvictionPolicy};

/// Number of publications between two sweeps of stale weak entries.
pub const DEFAULT_PURGE_INTERVAL: usize = 64;

/// Entry limit of the default configuration.
pub const DEFAULT_LIMIT: usize = 256;

/// Whether the cache keeps formatters alive.
///
/// * `Strong` (default) - the cache owns a reference. Memory is bounded with
///   [`CacheConfig::limit`] and/or [`CacheConfig::ttl`].
/// * `Weak` - the cache holds `Weak` references only. A formatter lives exactly
///   as long as some caller holds its `Arc`; once the last one is dropped the
///   next lookup rebuilds it. Only worth it when callers keep their formatters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Retention {
    Weak,
    #[default]
    Strong,
}

/// Configuration of a [`FormatCache`](crate::FormatCache).
///
/// # Fields
///
/// * `retention` - strong (default) or weak references to formatters
/// * `limit` - maximum number of entries (default [`DEFAULT_LIMIT`]), `None` for unlimited
/// * `policy` - victim selection once `limit` is reached (default LRU)
/// * `ttl` - seconds after which an entry is rebuilt, `None` for no expiry
/// * `purge_interval` - publications between sweeps of stale weak entries
/// * `name` - registers the cache statistics under this name (`stats` feature)
///
/// # Examples
///
/// ```
/// use fmtcache_core::{CacheConfig, EvictionPolicy, Retention};
///
/// let config = CacheConfig::weak()
///     .with_limit(128)
///     .with_policy(EvictionPolicy::LFU)
///     .with_ttl(300);
/// assert!(config.validate().is_ok());
///
/// assert!(CacheConfig::default().with_limit(0).validate().is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CacheConfig {
    pub retention: Retention,
    pub limit: Option<usize>,
    pub policy: EvictionPolicy,
    pub ttl: Option<u64>,
    pub purge_interval: usize,
    pub name: Option<String>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            retention: Retention::Strong,
            limit: Some(DEFAULT_LIMIT),
            policy: EvictionPolicy::default(),
            ttl: None,
            purge_interval: DEFAULT_PURGE_INTERVAL,
            name: None,
        }
    }
}

impl CacheConfig {
    /// Bounded cache that owns its formatters: strong retention with an LRU limit.
    pub fn bounded(limit: usize) -> Self {
        Self::default().with_limit(limit)
    }

    /// Weak references only and no entry limit.
    pub fn weak() -> Self {
        Self::default()
            .with_retention(Retention::Weak)
            .without_limit()
    }

    pub fn with_retention(mut self, retention: Retention) -> Self {
        self.retention = retention;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn without_limit(mut self) -> Self {
        self.limit = None;
        self
    }

    pub fn with_policy(mut self, policy: EvictionPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_ttl(mut self, ttl_secs: u64) -> Self {
        self.ttl = Some(ttl_secs);
        self
    }

    pub fn with_purge_interval(mut self, interval: usize) -> Self {
        self.purge_interval = interval;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.limit == Some(0) {
            return Err(ConfigError::ZeroLimit);
        }
        if self.ttl == Some(0) {
            return Err(ConfigError::ZeroTtl);
        }
        if self.purge_interval == 0 {
            return Err(ConfigError::ZeroPurgeInterval);
        }
        Ok(())
    }
}
