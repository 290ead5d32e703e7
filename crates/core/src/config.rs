//! Core runtime configuration.
//!
//! This module defines configuration that should be resolved once at process startup and then
//! passed into core services. Request handling never reads environment variables; binaries read
//! them at startup and hand the parsed values to [`CoreConfig::new`].

use crate::constants::{DEFAULT_FETCH_TIMEOUT_SECS, DEFAULT_WIKI_BASE_URL};
use crate::{OutlineError, OutlineResult};
use std::time::Duration;

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    wiki_base_url: String,
    fetch_timeout: Duration,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// # Errors
    /// Returns `OutlineError::InvalidInput` if the base URL is blank or the timeout is zero.
    pub fn new(wiki_base_url: String, fetch_timeout: Duration) -> OutlineResult<Self> {
        if wiki_base_url.trim().is_empty() {
            return Err(OutlineError::InvalidInput(
                "wiki_base_url cannot be empty".into(),
            ));
        }
        if fetch_timeout.is_zero() {
            return Err(OutlineError::InvalidInput(
                "fetch_timeout must be greater than zero".into(),
            ));
        }

        Ok(Self {
            wiki_base_url,
            fetch_timeout,
        })
    }

    pub fn wiki_base_url(&self) -> &str {
        &self.wiki_base_url
    }

    pub fn fetch_timeout(&self) -> Duration {
        self.fetch_timeout
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            wiki_base_url: DEFAULT_WIKI_BASE_URL.into(),
            fetch_timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
        }
    }
}

/// Parse the base URL from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns [`DEFAULT_WIKI_BASE_URL`].
pub fn wiki_base_url_from_env_value(value: Option<String>) -> String {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_WIKI_BASE_URL.into())
}

/// Parse the fetch timeout (whole seconds) from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns [`DEFAULT_FETCH_TIMEOUT_SECS`].
pub fn fetch_timeout_from_env_value(value: Option<String>) -> OutlineResult<Duration> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());
    let secs = value
        .map(|v| {
            v.parse::<u64>().map_err(|e| {
                OutlineError::InvalidInput(format!("invalid fetch timeout '{v}': {e}"))
            })
        })
        .transpose()?;

    Ok(Duration::from_secs(
        secs.unwrap_or(DEFAULT_FETCH_TIMEOUT_SECS),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_blank_base_url() {
        let err = CoreConfig::new("  ".into(), Duration::from_secs(1)).unwrap_err();
        assert!(matches!(err, OutlineError::InvalidInput(_)));
    }

    #[test]
    fn new_rejects_zero_timeout() {
        let err = CoreConfig::new(DEFAULT_WIKI_BASE_URL.into(), Duration::ZERO).unwrap_err();
        assert!(matches!(err, OutlineError::InvalidInput(_)));
    }

    #[test]
    fn default_matches_constants() {
        let cfg = CoreConfig::default();
        assert_eq!(cfg.wiki_base_url(), "https://en.wikipedia.org/wiki/");
        assert_eq!(cfg.fetch_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn env_values_fall_back_to_defaults() {
        assert_eq!(wiki_base_url_from_env_value(None), DEFAULT_WIKI_BASE_URL);
        assert_eq!(
            wiki_base_url_from_env_value(Some("   ".into())),
            DEFAULT_WIKI_BASE_URL
        );
        assert_eq!(
            fetch_timeout_from_env_value(Some("".into())).unwrap(),
            Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS)
        );
    }

    #[test]
    fn env_values_are_parsed() {
        assert_eq!(
            wiki_base_url_from_env_value(Some(" http://localhost:8080/wiki/ ".into())),
            "http://localhost:8080/wiki/"
        );
        assert_eq!(
            fetch_timeout_from_env_value(Some("3".into())).unwrap(),
            Duration::from_secs(3)
        );
        assert!(fetch_timeout_from_env_value(Some("soon".into())).is_err());
    }
}
