use crate::locale::{symbols_for, DateSymbols};
use crate::pattern::{compile, Field, Token};
use crate::zone::{colon_offset, ResolvedZone};
use chrono::{DateTime, Datelike, FixedOffset, TimeZone, Timelike};
use fmtcache_core::{InvalidPatternError, LocaleId, TimeZoneId};
use std::fmt::Write;

/// Immutable, thread-safe date/time printer for one pattern, zone and locale.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use fmtcache_datetime::DateTimeFormatter;
///
/// let formatter = DateTimeFormatter::new("yyyy-MM-dd HH:mm z", &"GMT+02:00".into(), &"en_US".into())
///     .unwrap();
/// let instant = Utc.with_ymd_and_hms(2024, 3, 9, 22, 15, 0).unwrap();
/// assert_eq!(formatter.format(&instant), "2024-03-10 00:15 GMT+02:00");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateTimeFormatter {
    pattern: String,
    tokens: Vec<Token>,
    zone: ResolvedZone,
    locale: LocaleId,
    symbols: &'static DateSymbols,
}

impl DateTimeFormatter {
    pub fn new(
        pattern: &str,
        time_zone: &TimeZoneId,
        locale: &LocaleId,
    ) -> Result<Self, InvalidPatternError> {
        let tokens = compile(pattern)?;
        Ok(Self {
            pattern: pattern.to_string(),
            tokens,
            zone: ResolvedZone::resolve(time_zone),
            locale: locale.clone(),
            symbols: symbols_for(locale),
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn time_zone(&self) -> &TimeZoneId {
        self.zone.id()
    }

    pub fn zone(&self) -> &ResolvedZone {
        &self.zone
    }

    pub fn locale(&self) -> &LocaleId {
        &self.locale
    }

    /// Prints `instant` in this formatter's zone.
    pub fn format<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> String {
        let local = instant.with_timezone(&self.zone.offset());
        let mut out = String::with_capacity(self.pattern.len() + 8);
        for token in &self.tokens {
            match token {
                Token::Literal(text) => out.push_str(text),
                Token::Field { field, width } => self.write_field(&mut out, &local, *field, *width),
            }
        }
        out
    }

    fn write_field(
        &self,
        out: &mut String,
        local: &DateTime<FixedOffset>,
        field: Field,
        width: usize,
    ) {
        let symbols = self.symbols;
        match field {
            Field::Era => out.push_str(symbols.eras[usize::from(local.year() > 0)]),
            Field::Year => {
                let year = local.year();
                let year_of_era = if year > 0 { year } else { 1 - year };
                if width == 2 {
                    pad(out, year_of_era % 100, 2);
                } else {
                    pad(out, year_of_era, width);
                }
            }
            Field::Month | Field::StandaloneMonth => {
                let index = local.month0() as usize;
                match width {
                    1 | 2 => pad(out, local.month(), width),
                    3 => out.push_str(symbols.short_months[index]),
                    _ => out.push_str(symbols.months[index]),
                }
            }
            Field::DayOfMonth => pad(out, local.day(), width),
            Field::DayOfYear => pad(out, local.ordinal(), width),
            Field::DayName => {
                let index = local.weekday().num_days_from_monday() as usize;
                if width >= 4 {
                    out.push_str(symbols.weekdays[index]);
                } else {
                    out.push_str(symbols.short_weekdays[index]);
                }
            }
            Field::DayNumber => pad(out, local.weekday().number_from_monday(), width),
            Field::AmPm => out.push_str(symbols.am_pm[usize::from(local.hour() >= 12)]),
            Field::HourOfDay => pad(out, local.hour(), width),
            Field::HourOfDay1To24 => pad(out, if local.hour() == 0 { 24 } else { local.hour() }, width),
            Field::HourOfHalfDay => pad(out, local.hour() % 12, width),
            Field::HourOfHalfDay1To12 => {
                let hour = local.hour() % 12;
                pad(out, if hour == 0 { 12 } else { hour }, width);
            }
            Field::Minute => pad(out, local.minute(), width),
            Field::Second => pad(out, local.second(), width),
            // Leap seconds carry nanoseconds past one second.
            Field::Millisecond => pad(out, (local.nanosecond() / 1_000_000).min(999), width),
            Field::ZoneName => {
                if width >= 4 {
                    out.push_str(self.zone.long_name());
                } else {
                    out.push_str(self.zone.short_name());
                }
            }
            Field::RfcOffset => {
                let offset = colon_offset(self.zone.offset_seconds());
                out.push_str(&offset.replace(':', ""));
            }
            Field::IsoOffset => {
                let seconds = self.zone.offset_seconds();
                if seconds == 0 {
                    out.push('Z');
                    return;
                }
                let offset = colon_offset(seconds);
                match width {
                    1 => out.push_str(&offset[..3]),
                    2 => out.push_str(&offset.replace(':', "")),
                    _ => out.push_str(&offset),
                }
            }
            Field::WeekOfYear => pad(out, local.iso_week().week(), width),
        }
    }
}

fn pad<N: std::fmt::Display>(out: &mut String, value: N, width: usize) {
    // Writing into a String cannot fail.
    let _ = write!(out, "{value:0width$}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    fn formatter(pattern: &str, zone: &str, locale: &str) -> DateTimeFormatter {
        DateTimeFormatter::new(pattern, &zone.into(), &locale.into()).unwrap()
    }

    fn instant() -> DateTime<Utc> {
        // Sunday 2024-03-10 07:05:09.042 UTC
        NaiveDate::from_ymd_opt(2024, 3, 10)
            .and_then(|d| d.and_hms_milli_opt(7, 5, 9, 42))
            .unwrap()
            .and_utc()
    }

    #[test]
    fn test_numeric_fields() {
        let f = formatter("yyyy-MM-dd'T'HH:mm:ss.SSS", "UTC", "en_US");
        assert_eq!(f.format(&instant()), "2024-03-10T07:05:09.042");
        assert_eq!(formatter("yy/M/d", "UTC", "en").format(&instant()), "24/3/10");
        assert_eq!(formatter("D w u", "UTC", "en").format(&instant()), "70 10 7");
    }

    #[test]
    fn test_text_fields_follow_locale() {
        let en = formatter("EEEE, MMMM d, yyyy G", "UTC", "en_US");
        assert_eq!(en.format(&instant()), "Sunday, March 10, 2024 AD");

        let es = formatter("EEE d MMM", "UTC", "es_ES");
        assert_eq!(es.format(&instant()), "dom 10 mar");

        let de = formatter("EEEE, d. MMMM", "UTC", "de_DE");
        assert_eq!(de.format(&instant()), "Sonntag, 10. März");
    }

    #[test]
    fn test_hour_variants() {
        let f = formatter("H k K h a", "UTC", "en");
        assert_eq!(f.format(&instant()), "7 7 7 7 AM");

        let midnight = Utc.with_ymd_and_hms(2024, 1, 1, 0, 30, 0).unwrap();
        assert_eq!(f.format(&midnight), "0 24 0 12 AM");

        let evening = Utc.with_ymd_and_hms(2024, 1, 1, 18, 0, 0).unwrap();
        assert_eq!(f.format(&evening), "18 18 6 6 PM");
    }

    #[test]
    fn test_zone_fields() {
        let f = formatter("HH:mm z Z X XX XXX", "GMT-04:30", "en");
        assert_eq!(
            f.format(&instant()),
            "02:35 GMT-04:30 -0430 -04 -0430 -04:30"
        );

        let utc = formatter("z zzzz Z XXX", "UTC", "en");
        assert_eq!(
            utc.format(&instant()),
            "UTC Coordinated Universal Time +0000 Z"
        );
    }

    #[test]
    fn test_unknown_zone_prints_as_gmt() {
        let f = formatter("HH:mm z", "Nowhere/Special", "en");
        assert_eq!(f.format(&instant()), "07:05 GMT");
        assert_eq!(f.time_zone().as_str(), "Nowhere/Special");
    }

    #[test]
    fn test_accessors_and_equality() {
        let a = formatter("HH:mm", "UTC", "fr_FR");
        let b = formatter("HH:mm", "UTC", "fr_FR");
        assert_eq!(a, b);
        assert_eq!(a.pattern(), "HH:mm");
        assert_eq!(a.locale().as_str(), "fr_FR");
        assert_ne!(a, formatter("HH:mm", "GMT", "fr_FR"));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = DateTimeFormatter::new("yyyy 'x", &"UTC".into(), &"en".into()).unwrap_err();
        assert_eq!(err.reason(), "unterminated quote");
    }
}
