//! Runtime settings, read from `STORE_SEARCH_*` environment variables

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};

pub const DEFAULT_ENDPOINT: &str = "https://itunes.apple.com/search";
/// The catalog refuses to return more than this many results.
pub const MAX_RESULT_LIMIT: u32 = 200;
const DEFAULT_TIMEOUT_SECS: u64 = 15;
const DEFAULT_LOG_DIR: &str = ".logs";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub endpoint: String,
    pub result_limit: u32,
    pub request_timeout: Duration,
    pub user_agent: String,
    pub log_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            result_limit: MAX_RESULT_LIMIT,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary variable source; unset keys keep defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut settings = Settings::default();

        if let Some(endpoint) = lookup("STORE_SEARCH_ENDPOINT") {
            let endpoint = endpoint.trim().trim_end_matches('?').to_string();
            if endpoint.is_empty() {
                bail!("STORE_SEARCH_ENDPOINT is empty");
            }
            settings.endpoint = endpoint;
        }

        if let Some(limit) = lookup("STORE_SEARCH_LIMIT") {
            let limit: u32 = limit
                .trim()
                .parse()
                .with_context(|| format!("STORE_SEARCH_LIMIT is not a number: {:?}", limit))?;
            if !(1..=MAX_RESULT_LIMIT).contains(&limit) {
                bail!("STORE_SEARCH_LIMIT must be between 1 and {}, got {}", MAX_RESULT_LIMIT, limit);
            }
            settings.result_limit = limit;
        }

        if let Some(secs) = lookup("STORE_SEARCH_TIMEOUT_SECS") {
            let secs: u64 = secs
                .trim()
                .parse()
                .with_context(|| format!("STORE_SEARCH_TIMEOUT_SECS is not a number: {:?}", secs))?;
            if secs == 0 {
                bail!("STORE_SEARCH_TIMEOUT_SECS must be at least 1");
            }
            settings.request_timeout = Duration::from_secs(secs);
        }

        if let Some(dir) = lookup("STORE_SEARCH_LOG_DIR") {
            settings.log_dir = PathBuf::from(dir);
        }

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let settings = Settings::from_lookup(lookup(&[])).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(settings.result_limit, 200);
    }

    #[test]
    fn reads_overrides() {
        let settings = Settings::from_lookup(lookup(&[
            ("STORE_SEARCH_ENDPOINT", "http://localhost:8080/search?"),
            ("STORE_SEARCH_LIMIT", " 25 "),
            ("STORE_SEARCH_TIMEOUT_SECS", "3"),
            ("STORE_SEARCH_LOG_DIR", "/tmp/store-logs"),
        ]))
        .unwrap();

        assert_eq!(settings.endpoint, "http://localhost:8080/search");
        assert_eq!(settings.result_limit, 25);
        assert_eq!(settings.request_timeout, Duration::from_secs(3));
        assert_eq!(settings.log_dir, PathBuf::from("/tmp/store-logs"));
    }

    #[test]
    fn rejects_bad_values() {
        assert!(Settings::from_lookup(lookup(&[("STORE_SEARCH_LIMIT", "lots")])).is_err());
        assert!(Settings::from_lookup(lookup(&[("STORE_SEARCH_LIMIT", "0")])).is_err());
        assert!(Settings::from_lookup(lookup(&[("STORE_SEARCH_LIMIT", "500")])).is_err());
        assert!(Settings::from_lookup(lookup(&[("STORE_SEARCH_ENDPOINT", "  ")])).is_err());
        assert!(Settings::from_lookup(lookup(&[("STORE_SEARCH_TIMEOUT_SECS", "-1")])).is_err());
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let err = Settings::from_lookup(lookup(&[("STORE_SEARCH_TIMEOUT_SECS", "0")])).unwrap_err();
        assert!(err.to_string().contains("STORE_SEARCH_TIMEOUT_SECS"));
    }
}
