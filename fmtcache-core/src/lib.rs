//! # fmtcache core
//!
//! Concurrent cache of expensive-to-build formatter instances.
//!
//! A formatter (a compiled date pattern, a number format, ...) is identified by
//! a pattern, a time zone and a locale. [`FormatCache`] maps that triple to a
//! shared `Arc` of the formatter, building it on first use through a pluggable
//! [`FormatterFactory`].
//!
//! ## Features
//!
//! - **Bounded retention**: by default the cache owns up to
//!   [`DEFAULT_LIMIT`] formatters and evicts the least recently used; FIFO,
//!   LFU and Random eviction and a TTL are configurable
//! - **Weak retention**: opt-in mode that never keeps a formatter alive; it is
//!   rebuilt once every caller has dropped it
//! - **Lock-free hot path**: lookups only touch one `DashMap` shard
//! - **Race tolerant**: concurrent misses for one key each build a formatter;
//!   the last one published wins
//! - **Injected defaults**: omitted zones and locales come from an
//!   [`EnvironmentDefaults`](defaults::EnvironmentDefaults) provider
//! - **Statistics**: hit/miss/collection/eviction counters (`stats` feature)
//!
//! ## Module Organization
//!
//! - [`format_cache`] - the cache itself
//! - [`factory`] - construction strategy trait and closure adapter
//! - [`key`] / [`ids`] - composite key, zone and locale ids
//! - [`defaults`] - default zone/locale providers
//! - [`cache_entry`] / [`eviction_policy`] / [`config`] - entry bookkeeping and tuning
//!
//! ## Example
//!
//! ```
//! use fmtcache_core::defaults::FixedDefaults;
//! use fmtcache_core::{FnFactory, FormatCache, InvalidPatternError, LocaleId, TimeZoneId};
//!
//! let factory = FnFactory::new("yyyy-MM-dd", |pattern: &str, _: &TimeZoneId, _: &LocaleId| {
//!     if pattern.is_empty() {
//!         Err(InvalidPatternError::new(pattern, 0, "empty pattern"))
//!     } else {
//!         Ok(pattern.chars().rev().collect::<String>())
//!     }
//! });
//! let cache = FormatCache::new(factory).with_defaults(FixedDefaults::new("UTC", "en_US"));
//!
//! let formatter = cache.get_instance().unwrap();
//! assert_eq!(formatter.as_str(), "dd-MM-yyyy");
//! assert!(cache.get_instance_with("", None, None).is_err());
//! ```
pub mod cache_entry;
pub mod config;
pub mod defaults;
pub mod error;
pub mod eviction_policy;
pub mod factory;
pub mod format_cache;
pub mod ids;
pub mod key;
pub mod utils;

#[cfg(feature = "stats")]
mod stats;

#[cfg(feature = "stats")]
pub mod stats_registry;

pub use cache_entry::{CacheEntry, Handle};
pub use config::{CacheConfig, Retention, DEFAULT_LIMIT, DEFAULT_PURGE_INTERVAL};
pub use defaults::{EnvironmentDefaults, FixedDefaults, SystemDefaults};
pub use error::{ConfigError, InvalidPatternError};
pub use eviction_policy::EvictionPolicy;
pub use factory::{FnFactory, FormatterFactory};
pub use format_cache::FormatCache;
pub use ids::{LocaleId, TimeZoneId};
pub use key::CompositeKey;

#[cfg(feature = "stats")]
pub use stats::CacheStats;
