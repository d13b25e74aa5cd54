use chrono::{FixedOffset, Offset, Utc};
use fmtcache_core::TimeZoneId;
use tracing::warn;

/// A time zone id resolved to a fixed UTC offset.
///
/// Accepted ids:
///
/// - `UTC`, `GMT`, `UT`, `Z`
/// - `GMT`, `UTC` or `UT` followed by `+hh`, `+hh:mm` or `+hhmm` (or `-`)
/// - a bare `+hh`, `+hh:mm` or `+hhmm` offset
///
/// Any other id resolves to GMT, with a warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedZone {
    id: TimeZoneId,
    offset: FixedOffset,
    short_name: String,
}

impl ResolvedZone {
    pub fn resolve(id: &TimeZoneId) -> Self {
        let raw = id.as_str();
        let (prefix, rest) = split_prefix(raw);

        if rest.is_empty() && !prefix.is_empty() {
            return Self::zero(id, if prefix == "Z" { "UTC" } else { prefix });
        }

        if let Some(seconds) = parse_offset(rest) {
            if seconds == 0 {
                return Self::zero(id, "GMT");
            }
            if let Some(offset) = FixedOffset::east_opt(seconds) {
                return Self {
                    id: id.clone(),
                    offset,
                    short_name: format!("GMT{}", colon_offset(seconds)),
                };
            }
        }

        warn!(time_zone = %id, "unknown time zone id, falling back to GMT");
        Self::zero(id, "GMT")
    }

    fn zero(id: &TimeZoneId, name: &str) -> Self {
        Self {
            id: id.clone(),
            offset: Utc.fix(),
            short_name: name.to_string(),
        }
    }

    /// The id this zone was resolved from.
    pub fn id(&self) -> &TimeZoneId {
        &self.id
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    pub fn offset_seconds(&self) -> i32 {
        self.offset.local_minus_utc()
    }

    /// `UTC`, `GMT` or `GMT+hh:mm`.
    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    pub fn long_name(&self) -> &str {
        match self.short_name.as_str() {
            "UTC" => "Coordinated Universal Time",
            "GMT" => "Greenwich Mean Time",
            other => other,
        }
    }
}

fn split_prefix(raw: &str) -> (&str, &str) {
    for prefix in ["UTC", "GMT", "UT", "Z"] {
        if let Some(rest) = raw.strip_prefix(prefix) {
            return (prefix, rest);
        }
    }
    ("", raw)
}

/// Parses `+hh`, `+hh:mm` or `+hhmm` into seconds east of UTC.
fn parse_offset(text: &str) -> Option<i32> {
    let sign = match text.chars().next()? {
        '+' => 1,
        '-' => -1,
        _ => return None,
    };
    let body = &text[1..];
    if !body.is_ascii() {
        return None;
    }
    let (hours, minutes) = match body.split_once(':') {
        Some((h, m)) => (h, m),
        None if body.len() > 2 => body.split_at(body.len() - 2),
        None => (body, "0"),
    };
    if hours.is_empty()
        || hours.len() > 2
        || minutes.len() > 2
        || !hours.chars().all(|c| c.is_ascii_digit())
        || !minutes.chars().all(|c| c.is_ascii_digit())
    {
        return None;
    }
    let hours: i32 = hours.parse().ok()?;
    let minutes: i32 = minutes.parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    Some(sign * (hours * 3600 + minutes * 60))
}

/// `+02:00` style rendering of an offset in seconds.
pub(crate) fn colon_offset(seconds: i32) -> String {
    let sign = if seconds < 0 { '-' } else { '+' };
    let total_minutes = seconds.abs() / 60;
    format!("{}{:02}:{:02}", sign, total_minutes / 60, total_minutes % 60)
}
