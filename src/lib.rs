//! # fmtcache
//!
//! A thread-safe cache of formatter instances for Rust.
//!
//! Building a formatter means compiling its pattern and resolving its time zone
//! and locale, which is far more expensive than using it. `fmtcache` keys every
//! formatter by `(pattern, time zone, locale)` and hands out shared instances.
//!
//! ## Features
//!
//! - **Bounded retention**: by default a cache keeps up to [`DEFAULT_LIMIT`]
//!   formatters and evicts the least recently used one when full
//! - **Lock-free hits**: a repeated lookup never calls the factory and only
//!   touches one map shard
//! - **Default substitution**: an omitted zone or locale is replaced by the
//!   process default before the key is built
//! - **Pluggable families**: any [`FormatterFactory`] can sit behind a
//!   [`FormatCache`]; date/time formatting ships in the box
//! - **Tunable retention**: other limits, FIFO/LRU/LFU/Random eviction, TTL
//!   or weak references only via [`CacheConfig`]
//!
//! ## Quick Start
//!
//! ```rust
//! use fmtcache::{date_time_cache, TimeZoneId};
//!
//! let utc = TimeZoneId::from("UTC");
//! let first = date_time_cache().get_instance_with("yyyy-MM-dd", Some(&utc), None).unwrap();
//! let second = date_time_cache().get_instance_with("yyyy-MM-dd", Some(&utc), None).unwrap();
//! assert!(std::sync::Arc::ptr_eq(&first, &second));
//! ```
//!
//! ## Custom Formatter Families
//!
//! ```rust
//! use fmtcache::{FnFactory, FormatCache, InvalidPatternError, LocaleId, TimeZoneId};
//!
//! let factory = FnFactory::new("#,##0", |pattern: &str, _: &TimeZoneId, locale: &LocaleId| {
//!     if pattern.contains('\'') {
//!         return Err(InvalidPatternError::new(pattern, 0, "quotes are not supported"));
//!     }
//!     Ok(format!("{pattern} for {locale}"))
//! });
//! let numbers = FormatCache::new(factory);
//! let formatter = numbers
//!     .get_instance_with("0.00", None, Some(&LocaleId::from("de_DE")))
//!     .unwrap();
//! assert_eq!(formatter.as_str(), "0.00 for de_DE");
//! ```
//!
//! ## Bounded Retention
//!
//! ```rust
//! use fmtcache::{CacheConfig, DateTimeFormatCache, EvictionPolicy};
//!
//! let cache = DateTimeFormatCache::try_with_config(
//!     CacheConfig::bounded(128).with_policy(EvictionPolicy::LRU).with_ttl(300),
//! )
//! .unwrap();
//! cache.get_instance_with("HH:mm", None, None).unwrap();
//! assert_eq!(cache.cache().len(), 1);
//! ```
use once_cell::sync::Lazy;

pub use fmtcache_core::*;
pub use fmtcache_datetime::{
    pattern_for_style, DateTimeFormatCache, DateTimeFormatter, DateTimeFormatterFactory,
    FormatStyle, StyleRequest,
};

static DATE_TIME_CACHE: Lazy<DateTimeFormatCache> = Lazy::new(DateTimeFormatCache::new);

/// Process-wide bounded date/time cache using the environment defaults.
pub fn date_time_cache() -> &'static DateTimeFormatCache {
    &DATE_TIME_CACHE
}
