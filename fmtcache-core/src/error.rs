//! Error types shared by the cache and the formatter families built on it.
//!
//! - [`InvalidPatternError`]: a pattern is not valid for a formatter family.
//!   Factories return it from `create_instance`; the cache passes it through
//!   untouched and never stores anything for the failed key.
//! - [`ConfigError`]: a [`CacheConfig`](crate::CacheConfig) was rejected.

use thiserror::Error;

/// A pattern string is not valid for the formatter family that received it.
///
/// Recoverable by the caller: fix the pattern and try again.
///
/// # Examples
///
/// ```
/// use fmtcache_core::InvalidPatternError;
///
/// let err = InvalidPatternError::new("yyyy-'MM", 5, "unterminated quote");
/// assert_eq!(err.position(), 5);
/// assert_eq!(
///     err.to_string(),
///     "invalid pattern \"yyyy-'MM\" at position 5: unterminated quote"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid pattern {pattern:?} at position {position}: {reason}")]
pub struct InvalidPatternError {
    pattern: String,
    position: usize,
    reason: String,
}

impl InvalidPatternError {
    pub fn new(pattern: impl Into<String>, position: usize, reason: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            position,
            reason: reason.into(),
        }
    }

    /// The rejected pattern.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Byte offset in the pattern where the problem was detected.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Rejected cache configuration.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("entry limit must be greater than zero")]
    ZeroLimit,

    #[error("ttl must be greater than zero seconds")]
    ZeroTtl,

    #[error("purge interval must be greater than zero")]
    ZeroPurgeInterval,
}
