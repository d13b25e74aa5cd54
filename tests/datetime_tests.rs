mod common;

use chrono::{FixedOffset, TimeZone, Utc};
use common::init_tracing;
use fmtcache::{
    pattern_for_style, DateTimeFormatCache, FixedDefaults, FormatStyle, LocaleId, StyleRequest,
    TimeZoneId,
};
use std::sync::Arc;
use std::thread;

fn cache(time_zone: &str, locale: &str) -> DateTimeFormatCache {
    init_tracing();
    DateTimeFormatCache::new().with_defaults(FixedDefaults::new(time_zone, locale))
}

/// One pattern lookup, printed in the requested zone
#[test]
fn test_pattern_lookup_formats_in_zone() {
    let cache = cache("UTC", "en_US");
    let berlin = TimeZoneId::from("GMT+01:00");
    let formatter = cache
        .get_instance_with("yyyy-MM-dd HH:mm:ss Z", Some(&berlin), None)
        .unwrap();

    let instant = Utc.with_ymd_and_hms(2023, 12, 31, 23, 30, 0).unwrap();
    assert_eq!(formatter.format(&instant), "2024-01-01 00:30:00 +0100");
}

/// Input instants in any zone print the same
#[test]
fn test_input_zone_is_irrelevant() {
    let cache = cache("UTC", "en_US");
    let formatter = cache.get_instance_with("HH:mm XXX", None, None).unwrap();

    let utc = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    let offset = FixedOffset::east_opt(5 * 3600).unwrap();
    let local = utc.with_timezone(&offset);

    assert_eq!(formatter.format(&utc), "12:00 Z");
    assert_eq!(formatter.format(&local), "12:00 Z");
}

/// Style lookups follow the locale
#[test]
fn test_styles_per_locale() {
    let cache = cache("UTC", "en_US");
    let instant = Utc.with_ymd_and_hms(2024, 2, 29, 16, 5, 0).unwrap();

    let expected = [
        ("en_US", "Thursday, February 29, 2024"),
        ("es_ES", "jueves 29 de febrero de 2024"),
        ("fr_FR", "jeudi 29 février 2024"),
        ("de_DE", "Donnerstag, 29. Februar 2024"),
    ];
    for (locale, text) in expected {
        let formatter = cache
            .date_instance(FormatStyle::Full, None, Some(&LocaleId::from(locale)))
            .unwrap();
        assert_eq!(formatter.format(&instant), text, "{locale}");
    }

    let short = cache
        .date_time_instance(FormatStyle::Short, FormatStyle::Short, None, None)
        .unwrap();
    assert_eq!(short.format(&instant), "2/29/24 4:05 PM");
}

/// The default instance is the short date-time style of the default locale
#[test]
fn test_default_instance() {
    let cache = cache("GMT-05:00", "fr_FR");
    let formatter = cache.get_instance().unwrap();
    assert_eq!(
        formatter.pattern(),
        pattern_for_style(
            StyleRequest::DateTime(FormatStyle::Short, FormatStyle::Short),
            &LocaleId::from("fr_FR")
        )
    );

    let instant = Utc.with_ymd_and_hms(2024, 1, 15, 3, 0, 0).unwrap();
    assert_eq!(formatter.format(&instant), "14/01/24 22:00");
}

/// Invalid patterns are reported with their position and never cached
#[test]
fn test_invalid_patterns() {
    let cache = cache("UTC", "en_US");

    let cases = [("", 0), ("yyyy-'MM", 5), ("HH:mm:ss b", 9), ("XXXX", 0)];
    for (pattern, position) in cases {
        let err = cache.get_instance_with(pattern, None, None).unwrap_err();
        assert_eq!(err.position(), position, "{pattern:?}");
        assert_eq!(err.pattern(), pattern);
    }
    assert!(cache.cache().is_empty());
}

/// Formatters are shared across threads and keep working after the cache forgets them
#[test]
fn test_formatters_are_shareable() {
    let cache = Arc::new(cache("UTC", "de_DE"));
    let instant = Utc.with_ymd_and_hms(2024, 10, 3, 9, 0, 0).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                let formatter = cache
                    .date_instance(FormatStyle::Long, None, None)
                    .unwrap();
                formatter.format(&instant)
            })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), "3. Oktober 2024");
    }

    let held = cache.get_instance_with("EEE", None, None).unwrap();
    cache.clear();
    assert_eq!(held.format(&instant), "Do");
}
