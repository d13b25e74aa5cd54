use std::fmt;
use std::sync::Arc;

/// Identifier of a time zone, such as `"UTC"`, `"GMT+02:00"` or `"Europe/Madrid"`.
///
/// The cache treats the identifier as an opaque string: two ids are equal when
/// their text is equal. Interpreting the id is the formatter family's job.
///
/// Cloning is cheap (the text is reference counted).
///
/// # Examples
///
/// ```
/// use fmtcache_core::TimeZoneId;
///
/// let utc = TimeZoneId::from("UTC");
/// assert_eq!(utc.as_str(), "UTC");
/// assert_eq!(utc, TimeZoneId::new("UTC"));
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeZoneId(Arc<str>);

impl TimeZoneId {
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(Arc::from(id.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Identifier of a locale, such as `"en_US"`, `"es-ES"` or `"fr"`.
///
/// Like [`TimeZoneId`], the cache compares locale ids by their text only.
///
/// # Examples
///
/// ```
/// use fmtcache_core::LocaleId;
///
/// let locale = LocaleId::from("en_US".to_string());
/// assert_eq!(locale.to_string(), "en_US");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocaleId(Arc<str>);

impl LocaleId {
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(Arc::from(id.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the lowercase language subtag (`"en"` for `"en_US"` or `"en-GB"`).
    ///
    /// The POSIX locales `"C"` and `"POSIX"` report `"en"`.
    pub fn language(&self) -> String {
        let lang: String = self
            .0
            .chars()
            .take_while(|c| c.is_ascii_alphabetic())
            .collect::<String>()
            .to_ascii_lowercase();
        match lang.as_str() {
            "c" | "posix" => "en".to_string(),
            _ => lang,
        }
    }
}

macro_rules! impl_id_conversions {
    ($ty:ident) => {
        impl From<&str> for $ty {
            fn from(s: &str) -> Self {
                Self::new(s)
            }
        }

        impl From<String> for $ty {
            fn from(s: String) -> Self {
                Self(Arc::from(s))
            }
        }

        impl From<&$ty> for $ty {
            fn from(id: &$ty) -> Self {
                id.clone()
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl fmt::Debug for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({:?})", stringify!($ty), &*self.0)
            }
        }
    };
}

impl_id_conversions!(TimeZoneId);
impl_id_conversions!(LocaleId);
