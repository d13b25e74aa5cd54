use crate::factory::DateTimeFormatterFactory;
use crate::formatter::DateTimeFormatter;
use crate::style::{pattern_for_style, FormatStyle, StyleRequest};
use fmtcache_core::{
    CacheConfig, ConfigError, EnvironmentDefaults, FormatCache, InvalidPatternError, LocaleId,
    TimeZoneId,
};
use std::sync::Arc;

type Lookup = Result<Arc<DateTimeFormatter>, InvalidPatternError>;

/// Cache of [`DateTimeFormatter`]s with pattern and style based lookups.
///
/// # Examples
///
/// ```
/// use fmtcache_core::FixedDefaults;
/// use fmtcache_datetime::{DateTimeFormatCache, FormatStyle};
///
/// let cache = DateTimeFormatCache::new().with_defaults(FixedDefaults::new("UTC", "de_DE"));
/// let medium = cache.date_instance(FormatStyle::Medium, None, None).unwrap();
/// assert_eq!(medium.pattern(), "dd.MM.yyyy");
///
/// let again = cache.get_instance_with("dd.MM.yyyy", None, None).unwrap();
/// assert!(std::sync::Arc::ptr_eq(&medium, &again));
/// ```
#[derive(Debug)]
pub struct DateTimeFormatCache {
    inner: FormatCache<DateTimeFormatterFactory>,
}

impl DateTimeFormatCache {
    /// Bounded LRU cache using the process environment defaults.
    pub fn new() -> Self {
        Self {
            inner: FormatCache::new(DateTimeFormatterFactory),
        }
    }

    /// Cache that only keeps formatters alive while callers hold them.
    pub fn weak() -> Self {
        Self {
            inner: FormatCache::weak(DateTimeFormatterFactory),
        }
    }

    pub fn try_with_config(config: CacheConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            inner: FormatCache::try_with_config(DateTimeFormatterFactory, config)?,
        })
    }

    pub fn with_defaults(self, defaults: impl EnvironmentDefaults + 'static) -> Self {
        Self {
            inner: self.inner.with_defaults(defaults),
        }
    }

    /// Short date and time formatter in the default zone and locale.
    pub fn get_instance(&self) -> Lookup {
        self.inner.get_instance()
    }

    pub fn get_instance_with(
        &self,
        pattern: &str,
        time_zone: Option<&TimeZoneId>,
        locale: Option<&LocaleId>,
    ) -> Lookup {
        self.inner.get_instance_with(pattern, time_zone, locale)
    }

    pub fn date_time_instance(
        &self,
        date_style: FormatStyle,
        time_style: FormatStyle,
        time_zone: Option<&TimeZoneId>,
        locale: Option<&LocaleId>,
    ) -> Lookup {
        self.style_instance(
            StyleRequest::DateTime(date_style, time_style),
            time_zone,
            locale,
        )
    }

    pub fn date_instance(
        &self,
        style: FormatStyle,
        time_zone: Option<&TimeZoneId>,
        locale: Option<&LocaleId>,
    ) -> Lookup {
        self.style_instance(StyleRequest::Date(style), time_zone, locale)
    }

    pub fn time_instance(
        &self,
        style: FormatStyle,
        time_zone: Option<&TimeZoneId>,
        locale: Option<&LocaleId>,
    ) -> Lookup {
        self.style_instance(StyleRequest::Time(style), time_zone, locale)
    }

    // The locale picks the pattern, so it is resolved before the lookup.
    fn style_instance(
        &self,
        request: StyleRequest,
        time_zone: Option<&TimeZoneId>,
        locale: Option<&LocaleId>,
    ) -> Lookup {
        let locale = locale
            .cloned()
            .unwrap_or_else(|| self.inner.defaults().default_locale());
        let pattern = pattern_for_style(request, &locale);
        self.inner
            .get_factory_instance(&pattern, time_zone, Some(&locale))
    }

    /// The underlying generic cache, for maintenance and statistics.
    pub fn cache(&self) -> &FormatCache<DateTimeFormatterFactory> {
        &self.inner
    }

    pub fn clear(&self) {
        self.inner.clear();
    }

    #[cfg(feature = "stats")]
    pub fn stats(&self) -> &fmtcache_core::CacheStats {
        self.inner.stats()
    }
}

impl Default for DateTimeFormatCache {
    fn default() -> Self {
        Self::new()
    }
}
