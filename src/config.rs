//! Server configuration, read once from the environment at startup.

use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::Url;

use crate::constants::{
    DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_ERGAST_BASE_URL, DEFAULT_LOG_LEVEL,
    DEFAULT_OPENF1_BASE_URL, DEFAULT_REQUEST_TIMEOUT_SECS, ENV_CONNECT_TIMEOUT_SECS,
    ENV_ERGAST_BASE_URL, ENV_LOG_DIR, ENV_LOG_LEVEL, ENV_OPENF1_BASE_URL, ENV_REFERENCE_TIME,
    ENV_REQUEST_TIMEOUT_SECS, LOG_DIR_NAME,
};
use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the OpenF1 API, always ending in `/`
    pub openf1_base_url: String,
    /// Base URL of the Ergast-compatible championship API, always ending in `/`
    pub ergast_base_url: String,
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
    pub log_dir:         PathBuf,
    pub log_level:       String,
    /// Fixed "now" used by prompts and standings wording. `None` means wall-clock time.
    pub reference_time:  Option<DateTime<Utc>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            openf1_base_url: DEFAULT_OPENF1_BASE_URL.to_string(),
            ergast_base_url: DEFAULT_ERGAST_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            log_dir:         std::env::temp_dir().join(LOG_DIR_NAME),
            log_level:       DEFAULT_LOG_LEVEL.to_string(),
            reference_time:  None,
        }
    }
}

impl Config {
    /// Load configuration from process environment variables
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if any variable is set to an invalid value.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let openf1_base_url = match var(ENV_OPENF1_BASE_URL) {
            Some(url) => normalize_base_url(ENV_OPENF1_BASE_URL, &url)?,
            None => defaults.openf1_base_url,
        };
        let ergast_base_url = match var(ENV_ERGAST_BASE_URL) {
            Some(url) => normalize_base_url(ENV_ERGAST_BASE_URL, &url)?,
            None => defaults.ergast_base_url,
        };
        let request_timeout = match var(ENV_REQUEST_TIMEOUT_SECS) {
            Some(secs) => parse_timeout(ENV_REQUEST_TIMEOUT_SECS, &secs)?,
            None => defaults.request_timeout,
        };
        let connect_timeout = match var(ENV_CONNECT_TIMEOUT_SECS) {
            Some(secs) => parse_timeout(ENV_CONNECT_TIMEOUT_SECS, &secs)?,
            None => defaults.connect_timeout,
        };
        let reference_time = var(ENV_REFERENCE_TIME)
            .map(|time| {
                DateTime::parse_from_rfc3339(time.trim())
                    .map(|parsed| parsed.with_timezone(&Utc))
                    .map_err(|e| {
                        Error::Configuration(format!(
                            "{ENV_REFERENCE_TIME} must be an RFC 3339 timestamp: {e}"
                        ))
                    })
            })
            .transpose()?;

        Ok(Self {
            openf1_base_url,
            ergast_base_url,
            request_timeout,
            connect_timeout,
            log_dir: var(ENV_LOG_DIR).map_or(defaults.log_dir, PathBuf::from),
            log_level: var(ENV_LOG_LEVEL).unwrap_or(defaults.log_level),
            reference_time,
        })
    }

    /// The configured reference time, or the current UTC time
    pub fn now(&self) -> DateTime<Utc> {
        self.reference_time.unwrap_or_else(Utc::now)
    }
}

fn normalize_base_url(key: &str, raw: &str) -> Result<String> {
    let url = Url::parse(raw.trim())
        .map_err(|e| Error::Configuration(format!("{key} is not a valid URL: {e}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::Configuration(format!(
            "{key} must use http or https, got '{}'",
            url.scheme()
        )));
    }

    let mut normalized = url.to_string();
    if !normalized.ends_with('/') {
        normalized.push('/');
    }
    Ok(normalized)
}

fn parse_timeout(key: &str, raw: &str) -> Result<Duration> {
    match raw.trim().parse::<u64>() {
        Ok(0) => Err(Error::Configuration(format!("{key} must be greater than zero"))),
        Ok(secs) => Ok(Duration::from_secs(secs)),
        Err(e) => Err(Error::Configuration(format!(
            "{key} must be a whole number of seconds: {e}"
        ))),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_without_environment() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.openf1_base_url, "https://api.openf1.org/v1/");
        assert_eq!(config.ergast_base_url, "https://api.jolpi.ca/ergast/f1/");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.connect_timeout, Duration::from_secs(5));
        assert_eq!(config.log_level, "info");
        assert!(config.reference_time.is_none());
    }

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let config = config_from(&[(ENV_OPENF1_BASE_URL, "http://localhost:8000/v1")]).unwrap();
        assert_eq!(config.openf1_base_url, "http://localhost:8000/v1/");
    }

    #[test]
    fn test_blank_values_fall_back_to_defaults() {
        let config = config_from(&[(ENV_LOG_LEVEL, "  ")]).unwrap();
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_invalid_values_are_configuration_errors() {
        for pairs in [
            [(ENV_OPENF1_BASE_URL, "not a url")],
            [(ENV_ERGAST_BASE_URL, "ftp://example.com/")],
            [(ENV_REQUEST_TIMEOUT_SECS, "0")],
            [(ENV_CONNECT_TIMEOUT_SECS, "soon")],
            [(ENV_REFERENCE_TIME, "yesterday")],
        ] {
            assert!(matches!(config_from(&pairs), Err(Error::Configuration(_))));
        }
    }

    #[test]
    fn test_reference_time_overrides_now() {
        let config = config_from(&[(ENV_REFERENCE_TIME, "2025-06-01T13:45:00Z")]).unwrap();
        assert_eq!(config.now().to_rfc3339(), "2025-06-01T13:45:00+00:00");
    }
}
