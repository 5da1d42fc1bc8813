//! Configuration schema definitions.
//!
//! The adapter reads three keys out of the host framework's settings. Key names
//! are kept as the host frameworks spell them so existing config files work as-is.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::LoggerError;

/// Key naming the engine config file.
pub const CONF_KEY: &str = "log4perl_conf";

/// Key naming the logging category.
pub const CATEGORY_KEY: &str = "log4perl_category";

/// Key naming the reload-watch interval in seconds.
pub const WATCH_INTERVAL_KEY: &str = "log4perl_watch_interval";

/// Adapter settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Path to the engine's own configuration file (required at init time).
    #[serde(rename = "log4perl_conf")]
    pub conf_path: Option<PathBuf>,

    /// Category to log under. Falls back to the job type.
    #[serde(rename = "log4perl_category")]
    pub category: Option<String>,

    /// Seconds between reload checks of the engine config file.
    #[serde(rename = "log4perl_watch_interval")]
    pub watch_interval: Option<u64>,
}

impl LoggerConfig {
    /// Build from the flat key/value map a host framework hands over.
    ///
    /// Unrelated keys are ignored. Empty values count as absent.
    pub fn from_params(params: &BTreeMap<String, String>) -> Result<Self, LoggerError> {
        let get = |key: &str| {
            params
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
        };

        let watch_interval = match get(WATCH_INTERVAL_KEY) {
            Some(raw) => {
                let secs: u64 = raw.parse().map_err(|_| {
                    LoggerError::Configuration(format!(
                        "{} must be a positive integer, got '{}'",
                        WATCH_INTERVAL_KEY, raw
                    ))
                })?;
                if secs == 0 {
                    return Err(LoggerError::Configuration(format!(
                        "{} must be a positive integer, got '{}'",
                        WATCH_INTERVAL_KEY, raw
                    )));
                }
                Some(secs)
            }
            None => None,
        };

        Ok(Self {
            conf_path: get(CONF_KEY).map(PathBuf::from),
            category: get(CATEGORY_KEY).map(str::to_string),
            watch_interval,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_from_params_all_keys() {
        let config = LoggerConfig::from_params(&params(&[
            ("log4perl_conf", "/etc/app/log.toml"),
            ("log4perl_category", "Foo"),
            ("log4perl_watch_interval", "10"),
            ("unrelated", "x"),
        ]))
        .unwrap();

        assert_eq!(config.conf_path, Some(PathBuf::from("/etc/app/log.toml")));
        assert_eq!(config.category.as_deref(), Some("Foo"));
        assert_eq!(config.watch_interval, Some(10));
    }

    #[test]
    fn test_from_params_empty() {
        let config = LoggerConfig::from_params(&BTreeMap::new()).unwrap();
        assert_eq!(config, LoggerConfig::default());
    }

    #[test]
    fn test_blank_values_are_absent() {
        let config = LoggerConfig::from_params(&params(&[
            ("log4perl_conf", "  "),
            ("log4perl_category", ""),
        ]))
        .unwrap();
        assert!(config.conf_path.is_none());
        assert!(config.category.is_none());
    }

    #[test]
    fn test_bad_watch_interval() {
        for raw in ["soon", "-5", "0"] {
            let err = LoggerConfig::from_params(&params(&[("log4perl_watch_interval", raw)]))
                .unwrap_err();
            assert!(matches!(err, LoggerError::Configuration(_)), "{}", raw);
        }
    }

    #[test]
    fn test_serde_key_names() {
        let config: LoggerConfig = toml::from_str(
            r#"
            log4perl_conf = "/tmp/log.toml"
            log4perl_watch_interval = 30
            "#,
        )
        .unwrap();
        assert_eq!(config.conf_path, Some(PathBuf::from("/tmp/log.toml")));
        assert_eq!(config.watch_interval, Some(30));
        assert!(config.category.is_none());
    }
}
