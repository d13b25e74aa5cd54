//! # fmtcache datetime
//!
//! Date/time formatter family for [`fmtcache_core`].
//!
//! - [`pattern`] compiles letter patterns (`yyyy-MM-dd HH:mm`) into tokens
//! - [`DateTimeFormatter`] prints any `chrono::DateTime` in a fixed zone and locale
//! - [`style`] maps `FormatStyle`s to per-locale patterns
//! - [`DateTimeFormatCache`] caches formatters by pattern or by style
//!
//! Zones are fixed offsets (`UTC`, `GMT`, `GMT+02:00`, ...). Locale symbols
//! and style patterns exist for English, Spanish, French and German; other
//! languages use English.
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use fmtcache_core::FixedDefaults;
//! use fmtcache_datetime::DateTimeFormatCache;
//!
//! let cache = DateTimeFormatCache::new().with_defaults(FixedDefaults::new("UTC", "fr_FR"));
//! let formatter = cache.get_instance_with("EEEE d MMMM yyyy", None, None).unwrap();
//! let instant = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
//! assert_eq!(formatter.format(&instant), "mercredi 1 mai 2024");
//! ```
pub mod cache;
pub mod factory;
pub mod formatter;
pub mod locale;
pub mod pattern;
pub mod style;
pub mod zone;

pub use cache::DateTimeFormatCache;
pub use factory::DateTimeFormatterFactory;
pub use formatter::DateTimeFormatter;
pub use locale::DateSymbols;
pub use style::{pattern_for_style, FormatStyle, StyleRequest};
pub use zone::ResolvedZone;
