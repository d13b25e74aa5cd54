use dashmap::DashMap;
use fmtcache_core::LocaleId;
use once_cell::sync::Lazy;
use std::fmt;
use tracing::trace;

/// Predefined pattern length, from most to least verbose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatStyle {
    Full,
    Long,
    Medium,
    Short,
}

impl FormatStyle {
    fn index(self) -> usize {
        match self {
            FormatStyle::Full => 0,
            FormatStyle::Long => 1,
            FormatStyle::Medium => 2,
            FormatStyle::Short => 3,
        }
    }
}

impl fmt::Display for FormatStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FormatStyle::Full => "full",
            FormatStyle::Long => "long",
            FormatStyle::Medium => "medium",
            FormatStyle::Short => "short",
        };
        f.write_str(name)
    }
}

/// Which parts of an instant a style-based formatter prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleRequest {
    Date(FormatStyle),
    Time(FormatStyle),
    DateTime(FormatStyle, FormatStyle),
}

struct StylePatterns {
    language: &'static str,
    date: [&'static str; 4],
    time: [&'static str; 4],
}

static ENGLISH: StylePatterns = StylePatterns {
    language: "en",
    date: ["EEEE, MMMM d, yyyy", "MMMM d, yyyy", "MMM d, yyyy", "M/d/yy"],
    time: ["h:mm:ss a z", "h:mm:ss a z", "h:mm:ss a", "h:mm a"],
};

static SPANISH: StylePatterns = StylePatterns {
    language: "es",
    date: [
        "EEEE d' de 'MMMM' de 'yyyy",
        "d' de 'MMMM' de 'yyyy",
        "dd-MMM-yyyy",
        "d/MM/yy",
    ],
    time: ["H:mm:ss z", "H:mm:ss z", "H:mm:ss", "H:mm"],
};

static FRENCH: StylePatterns = StylePatterns {
    language: "fr",
    date: ["EEEE d MMMM yyyy", "d MMMM yyyy", "d MMM yyyy", "dd/MM/yy"],
    time: ["HH:mm:ss z", "HH:mm:ss z", "HH:mm:ss", "HH:mm"],
};

static GERMAN: StylePatterns = StylePatterns {
    language: "de",
    date: ["EEEE, d. MMMM yyyy", "d. MMMM yyyy", "dd.MM.yyyy", "dd.MM.yy"],
    time: ["HH:mm' Uhr 'z", "HH:mm:ss z", "HH:mm:ss", "HH:mm"],
};

fn patterns_for(language: &str) -> &'static StylePatterns {
    match language {
        "es" => &SPANISH,
        "fr" => &FRENCH,
        "de" => &GERMAN,
        _ => &ENGLISH,
    }
}

// Keyed by the table's language, so at most one entry per request and table.
static STYLE_PATTERNS: Lazy<DashMap<(StyleRequest, &'static str), String>> =
    Lazy::new(DashMap::new);

/// Pattern a locale uses for a style request.
///
/// Results are memoized process-wide per request and language. Unknown
/// languages use the English patterns and share its entries.
///
/// # Examples
///
/// ```
/// use fmtcache_datetime::{pattern_for_style, FormatStyle, StyleRequest};
///
/// let short = pattern_for_style(
///     StyleRequest::DateTime(FormatStyle::Short, FormatStyle::Short),
///     &"en_US".into(),
/// );
/// assert_eq!(short, "M/d/yy h:mm a");
/// ```
pub fn pattern_for_style(request: StyleRequest, locale: &LocaleId) -> String {
    let patterns = patterns_for(&locale.language());
    let key = (request, patterns.language);
    if let Some(pattern) = STYLE_PATTERNS.get(&key) {
        return pattern.value().clone();
    }

    let pattern = match request {
        StyleRequest::Date(style) => patterns.date[style.index()].to_string(),
        StyleRequest::Time(style) => patterns.time[style.index()].to_string(),
        StyleRequest::DateTime(date, time) => format!(
            "{} {}",
            patterns.date[date.index()],
            patterns.time[time.index()]
        ),
    };
    trace!(?request, locale = %locale, pattern = %pattern, "resolved style pattern");
    STYLE_PATTERNS.insert(key, pattern.clone());
    pattern
}
