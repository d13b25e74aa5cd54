#![allow(dead_code)]

use fmtcache::{FormatterFactory, InvalidPatternError, LocaleId, TimeZoneId};
use std::borrow::Cow;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing_subscriber::EnvFilter;

/// Installs a test subscriber once; `RUST_LOG` controls the output.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Formatter produced by [`CountingFactory`].
#[derive(Debug, PartialEq, Eq)]
pub struct Compiled {
    pub pattern: String,
    pub time_zone: TimeZoneId,
    pub locale: LocaleId,
}

/// Factory that counts how often it builds a formatter.
///
/// Patterns containing `!` are rejected.
#[derive(Debug, Default)]
pub struct CountingFactory {
    calls: AtomicUsize,
}

impl CountingFactory {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl FormatterFactory for CountingFactory {
    type Formatter = Compiled;
    type Error = InvalidPatternError;

    fn create_instance(
        &self,
        pattern: &str,
        time_zone: &TimeZoneId,
        locale: &LocaleId,
    ) -> Result<Compiled, InvalidPatternError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(position) = pattern.find('!') {
            return Err(InvalidPatternError::new(pattern, position, "'!' is not allowed"));
        }
        Ok(Compiled {
            pattern: pattern.to_string(),
            time_zone: time_zone.clone(),
            locale: locale.clone(),
        })
    }

    fn default_pattern(&self, _locale: &LocaleId) -> Cow<'_, str> {
        Cow::Borrowed("yyyy-MM-dd")
    }
}
