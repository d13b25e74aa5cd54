use crate::{LocaleId, TimeZoneId};
use std::fmt;
use std::sync::Arc;

/// Immutable composite key identifying one cache slot.
///
/// The key is the tuple `(pattern, time zone, locale)`. Equality and hashing are
/// structural over all three fields. An unspecified zone or locale (`None`) is a
/// distinct value: it never equals an explicit id, not even an empty one.
///
/// Lookups through [`FormatCache`](crate::FormatCache) always substitute the
/// environment defaults first, so keys built by the cache carry `Some` for both
/// the zone and the locale.
///
/// # Examples
///
/// ```
/// use fmtcache_core::{CompositeKey, LocaleId, TimeZoneId};
///
/// let a = CompositeKey::new("yyyy", Some(TimeZoneId::from("UTC")), Some(LocaleId::from("en")));
/// let b = CompositeKey::new("yyyy", Some(TimeZoneId::from("UTC")), Some(LocaleId::from("en")));
/// assert_eq!(a, b);
///
/// let unspecified = CompositeKey::new("yyyy", None, Some(LocaleId::from("en")));
/// assert_ne!(a, unspecified);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct CompositeKey {
    pattern: Arc<str>,
    time_zone: Option<TimeZoneId>,
    locale: Option<LocaleId>,
}

impl CompositeKey {
    pub fn new(
        pattern: impl AsRef<str>,
        time_zone: Option<TimeZoneId>,
        locale: Option<LocaleId>,
    ) -> Self {
        Self {
            pattern: Arc::from(pattern.as_ref()),
            time_zone,
            locale,
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn time_zone(&self) -> Option<&TimeZoneId> {
        self.time_zone.as_ref()
    }

    pub fn locale(&self) -> Option<&LocaleId> {
        self.locale.as_ref()
    }
}

impl fmt::Debug for CompositeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CompositeKey")
            .field(&&*self.pattern)
            .field(&self.time_zone.as_ref().map(TimeZoneId::as_str))
            .field(&self.locale.as_ref().map(LocaleId::as_str))
            .finish()
    }
}

impl fmt::Display for CompositeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let zone = self.time_zone.as_ref().map_or("-", TimeZoneId::as_str);
        let locale = self.locale.as_ref().map_or("-", LocaleId::as_str);
        write!(f, "{}|{}|{}", self.pattern, zone, locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of(key: &CompositeKey) -> u64 {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_structural_equality_and_hash() {
        let a = CompositeKey::new("HH:mm", Some("UTC".into()), Some("en_US".into()));
        let b = CompositeKey::new(
            String::from("HH:mm"),
            Some(TimeZoneId::new("UTC")),
            Some(LocaleId::new("en_US")),
        );
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_each_field_participates() {
        let base = CompositeKey::new("HH:mm", Some("UTC".into()), Some("en".into()));
        assert_ne!(
            base,
            CompositeKey::new("HH:mm:ss", Some("UTC".into()), Some("en".into()))
        );
        assert_ne!(
            base,
            CompositeKey::new("HH:mm", Some("GMT".into()), Some("en".into()))
        );
        assert_ne!(
            base,
            CompositeKey::new("HH:mm", Some("UTC".into()), Some("fr".into()))
        );
    }

    #[test]
    fn test_unspecified_is_distinct_from_empty() {
        let none = CompositeKey::new("yyyy", None, None);
        let empty = CompositeKey::new("yyyy", Some("".into()), Some("".into()));
        assert_ne!(none, empty);
        assert_eq!(none, CompositeKey::new("yyyy", None, None));
    }

    #[test]
    fn test_display() {
        let key = CompositeKey::new("yyyy", Some("UTC".into()), None);
        assert_eq!(key.to_string(), "yyyy|UTC|-");
    }
}
