use crate::formatter::DateTimeFormatter;
use crate::style::{pattern_for_style, FormatStyle, StyleRequest};
use fmtcache_core::{FormatterFactory, InvalidPatternError, LocaleId, TimeZoneId};
use std::borrow::Cow;

/// Builds [`DateTimeFormatter`]s; the default pattern is the locale's
/// short date and short time style.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateTimeFormatterFactory;

impl FormatterFactory for DateTimeFormatterFactory {
    type Formatter = DateTimeFormatter;
    type Error = InvalidPatternError;

    fn create_instance(
        &self,
        pattern: &str,
        time_zone: &TimeZoneId,
        locale: &LocaleId,
    ) -> Result<DateTimeFormatter, InvalidPatternError> {
        DateTimeFormatter::new(pattern, time_zone, locale)
    }

    fn default_pattern(&self, locale: &LocaleId) -> Cow<'_, str> {
        Cow::Owned(pattern_for_style(
            StyleRequest::DateTime(FormatStyle::Short, FormatStyle::Short),
            locale,
        ))
    }
}
