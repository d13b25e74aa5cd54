//! # Environment Defaults
//!
//! Source of the default time zone and locale substituted for omitted lookup
//! parameters. Defaults are queried on every lookup that omits a parameter and
//! are never cached, so a changed process default is observed by the next call.
//!
//! - [`SystemDefaults`] reads the process-wide overrides set through
//!   [`set_default_time_zone`] / [`set_default_locale`], then the `TZ`,
//!   `LC_ALL`, `LC_TIME` and `LANG` environment variables, then falls back to
//!   `UTC` and `en_US`.
//! - [`FixedDefaults`] always answers with the same ids; meant for tests.
//!
//! # Examples
//!
//! ```
//! use fmtcache_core::defaults::{EnvironmentDefaults, FixedDefaults};
//!
//! let defaults = FixedDefaults::new("Europe/Madrid", "es_ES");
//! assert_eq!(defaults.default_time_zone().as_str(), "Europe/Madrid");
//! assert_eq!(defaults.default_locale().as_str(), "es_ES");
//! ```

use crate::{LocaleId, TimeZoneId};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::env;

/// Time zone used when neither an override nor `TZ` is available.
pub const FALLBACK_TIME_ZONE: &str = "UTC";

/// Locale used when neither an override nor a locale variable is available.
pub const FALLBACK_LOCALE: &str = "en_US";

/// Provider of the defaults substituted for omitted zone/locale parameters.
pub trait EnvironmentDefaults: Send + Sync {
    fn default_time_zone(&self) -> TimeZoneId;

    fn default_locale(&self) -> LocaleId;
}

static TIME_ZONE_OVERRIDE: Lazy<RwLock<Option<TimeZoneId>>> = Lazy::new(|| RwLock::new(None));
static LOCALE_OVERRIDE: Lazy<RwLock<Option<LocaleId>>> = Lazy::new(|| RwLock::new(None));

/// Sets (or with `None`, clears) the process-wide default time zone.
///
/// Takes precedence over the `TZ` environment variable for every
/// [`SystemDefaults`] in the process.
pub fn set_default_time_zone(time_zone: Option<TimeZoneId>) {
    *TIME_ZONE_OVERRIDE.write() = time_zone;
}

/// Sets (or with `None`, clears) the process-wide default locale.
pub fn set_default_locale(locale: Option<LocaleId>) {
    *LOCALE_OVERRIDE.write() = locale;
}

/// Reads the host defaults on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemDefaults;

impl SystemDefaults {
    pub const fn new() -> Self {
        SystemDefaults
    }
}

impl EnvironmentDefaults for SystemDefaults {
    fn default_time_zone(&self) -> TimeZoneId {
        if let Some(tz) = TIME_ZONE_OVERRIDE.read().clone() {
            return tz;
        }
        env::var("TZ")
            .ok()
            .and_then(|raw| time_zone_from_env(&raw))
            .unwrap_or_else(|| TimeZoneId::new(FALLBACK_TIME_ZONE))
    }

    fn default_locale(&self) -> LocaleId {
        if let Some(locale) = LOCALE_OVERRIDE.read().clone() {
            return locale;
        }
        ["LC_ALL", "LC_TIME", "LANG"]
            .iter()
            .filter_map(|name| env::var(name).ok())
            .find_map(|raw| locale_from_env(&raw))
            .unwrap_or_else(|| LocaleId::new(FALLBACK_LOCALE))
    }
}

/// Always answers with the ids it was built with.
#[derive(Debug, Clone)]
pub struct FixedDefaults {
    time_zone: TimeZoneId,
    locale: LocaleId,
}

impl FixedDefaults {
    pub fn new(time_zone: impl Into<TimeZoneId>, locale: impl Into<LocaleId>) -> Self {
        Self {
            time_zone: time_zone.into(),
            locale: locale.into(),
        }
    }
}

impl EnvironmentDefaults for FixedDefaults {
    fn default_time_zone(&self) -> TimeZoneId {
        self.time_zone.clone()
    }

    fn default_locale(&self) -> LocaleId {
        self.locale.clone()
    }
}

/// `TZ=:Europe/Madrid` is the POSIX spelling of a zoneinfo path.
fn time_zone_from_env(raw: &str) -> Option<TimeZoneId> {
    let trimmed = raw.trim().trim_start_matches(':');
    if trimmed.is_empty() {
        None
    } else {
        Some(TimeZoneId::new(trimmed))
    }
}

/// Strips the codeset and modifier: `en_US.UTF-8@euro` becomes `en_US`.
fn locale_from_env(raw: &str) -> Option<LocaleId> {
    let name = raw
        .split(['.', '@'])
        .next()
        .map(str::trim)
        .unwrap_or_default();
    if name.is_empty() {
        None
    } else {
        Some(LocaleId::new(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_fixed_defaults() {
        let defaults = FixedDefaults::new("GMT", "fr_FR");
        assert_eq!(defaults.default_time_zone(), TimeZoneId::from("GMT"));
        assert_eq!(defaults.default_locale(), LocaleId::from("fr_FR"));
    }

    #[test]
    fn test_locale_from_env_strips_codeset() {
        assert_eq!(locale_from_env("en_US.UTF-8"), Some(LocaleId::from("en_US")));
        assert_eq!(locale_from_env("de_DE@euro"), Some(LocaleId::from("de_DE")));
        assert_eq!(locale_from_env("C"), Some(LocaleId::from("C")));
        assert_eq!(locale_from_env(""), None);
        assert_eq!(locale_from_env(".UTF-8"), None);
    }

    #[test]
    fn test_time_zone_from_env() {
        assert_eq!(
            time_zone_from_env(":Europe/Madrid"),
            Some(TimeZoneId::from("Europe/Madrid"))
        );
        assert_eq!(time_zone_from_env("UTC"), Some(TimeZoneId::from("UTC")));
        assert_eq!(time_zone_from_env("  "), None);
    }

    #[test]
    #[serial]
    fn test_overrides_take_precedence_and_are_reread() {
        let defaults = SystemDefaults::new();

        set_default_time_zone(Some(TimeZoneId::from("GMT+03:00")));
        set_default_locale(Some(LocaleId::from("de_DE")));
        assert_eq!(defaults.default_time_zone().as_str(), "GMT+03:00");
        assert_eq!(defaults.default_locale().as_str(), "de_DE");

        set_default_time_zone(Some(TimeZoneId::from("UTC")));
        assert_eq!(defaults.default_time_zone().as_str(), "UTC");

        set_default_time_zone(None);
        set_default_locale(None);
        assert!(!defaults.default_time_zone().as_str().is_empty());
        assert!(!defaults.default_locale().as_str().is_empty());
    }
}
