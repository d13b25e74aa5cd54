use crate::{LocaleId, TimeZoneId};
use std::borrow::Cow;
use std::fmt;

/// Strategy that builds formatters of one family (date/time, number, ...).
///
/// The cache is family-agnostic: it hands the normalized `(pattern, zone, locale)`
/// triple to the factory on a miss and publishes whatever comes back. Errors are
/// returned to the caller unchanged and nothing is cached for them.
///
/// Implementations must be safe to call from several threads at once, possibly
/// for the same triple: racing misses are not serialized.
///
/// # Examples
///
/// ```
/// use fmtcache_core::{FormatterFactory, InvalidPatternError, LocaleId, TimeZoneId};
/// use std::borrow::Cow;
///
/// struct UpperCaseFactory;
///
/// impl FormatterFactory for UpperCaseFactory {
///     type Formatter = String;
///     type Error = InvalidPatternError;
///
///     fn create_instance(
///         &self,
///         pattern: &str,
///         _time_zone: &TimeZoneId,
///         _locale: &LocaleId,
///     ) -> Result<String, InvalidPatternError> {
///         if pattern.is_empty() {
///             return Err(InvalidPatternError::new(pattern, 0, "empty pattern"));
///         }
///         Ok(pattern.to_uppercase())
///     }
///
///     fn default_pattern(&self, _locale: &LocaleId) -> Cow<'_, str> {
///         Cow::Borrowed("default")
///     }
/// }
/// ```
pub trait FormatterFactory: Send + Sync {
    /// The formatter produced by this family.
    type Formatter: Send + Sync;

    /// Error returned for patterns the family rejects.
    type Error;

    fn create_instance(
        &self,
        pattern: &str,
        time_zone: &TimeZoneId,
        locale: &LocaleId,
    ) -> Result<Self::Formatter, Self::Error>;

    /// Pattern used by [`FormatCache::get_instance`](crate::FormatCache::get_instance).
    fn default_pattern(&self, locale: &LocaleId) -> Cow<'_, str>;
}

/// Adapts a closure into a [`FormatterFactory`].
///
/// # Examples
///
/// ```
/// use fmtcache_core::{FnFactory, FormatCache, LocaleId, TimeZoneId};
///
/// let factory = FnFactory::new("yyyy", |pattern: &str, tz: &TimeZoneId, _locale: &LocaleId| {
///     Ok::<_, String>(format!("{pattern}@{tz}"))
/// });
/// let cache = FormatCache::new(factory);
/// let formatter = cache.get_instance_with("HH:mm", Some(&TimeZoneId::from("UTC")), None).unwrap();
/// assert_eq!(formatter.as_str(), "HH:mm@UTC");
/// ```
pub struct FnFactory<Func> {
    default_pattern: String,
    create: Func,
}

impl<Func> FnFactory<Func> {
    pub fn new(default_pattern: impl Into<String>, create: Func) -> Self {
        Self {
            default_pattern: default_pattern.into(),
            create,
        }
    }
}

impl<Func, F, E> FormatterFactory for FnFactory<Func>
where
    Func: Fn(&str, &TimeZoneId, &LocaleId) -> Result<F, E> + Send + Sync,
    F: Send + Sync,
{
    type Formatter = F;
    type Error = E;

    fn create_instance(
        &self,
        pattern: &str,
        time_zone: &TimeZoneId,
        locale: &LocaleId,
    ) -> Result<F, E> {
        (self.create)(pattern, time_zone, locale)
    }

    fn default_pattern(&self, _locale: &LocaleId) -> Cow<'_, str> {
        Cow::Borrowed(self.default_pattern.as_str())
    }
}

impl<Func> fmt::Debug for FnFactory<Func> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnFactory")
            .field("default_pattern", &self.default_pattern)
            .finish_non_exhaustive()
    }
}
