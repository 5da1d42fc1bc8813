//! Host configuration loading from disk.
//!
//! Host files keep a `[global]` table plus one table per job type:
//!
//! ```toml
//! [global]
//! log4perl_conf = "/etc/jobs/log.toml"
//!
//! [MyApp]
//! log4perl_category = "jobs.myapp"
//! log4perl_watch_interval = 30
//! ```
//!
//! Keys in the job type's table override the same keys from `[global]`.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::config::schema::LoggerConfig;
use crate::error::LoggerError;

/// Table holding settings shared by every job type.
pub const GLOBAL_SECTION: &str = "global";

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Section(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Section(name) => write!(f, "Section [{}] is not a table", name),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for LoggerError {
    fn from(e: ConfigError) -> Self {
        LoggerError::Configuration(e.to_string())
    }
}

/// Load the merged key/value settings for `job_type` from a TOML file.
pub fn load_params(path: &Path, job_type: &str) -> Result<BTreeMap<String, String>, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    parse_params(&content, job_type)
}

/// Load and build the adapter settings for `job_type`.
pub fn load_config(path: &Path, job_type: &str) -> Result<LoggerConfig, LoggerError> {
    let params = load_params(path, job_type)?;
    LoggerConfig::from_params(&params)
}

/// Merge `[global]` and `[job_type]` out of a TOML document.
pub fn parse_params(content: &str, job_type: &str) -> Result<BTreeMap<String, String>, ConfigError> {
    let root: toml::Table = toml::from_str(content).map_err(ConfigError::Parse)?;

    let mut params = BTreeMap::new();
    for section in [GLOBAL_SECTION, job_type] {
        let Some(value) = root.get(section) else {
            continue;
        };
        let table = value
            .as_table()
            .ok_or_else(|| ConfigError::Section(section.to_string()))?;
        for (key, value) in table {
            if let Some(text) = scalar_to_string(value) {
                params.insert(key.clone(), text);
            }
        }
    }

    Ok(params)
}

/// Nested tables and arrays are not settings; skip them.
fn scalar_to_string(value: &toml::Value) -> Option<String> {
    match value {
        toml::Value::String(s) => Some(s.clone()),
        toml::Value::Integer(i) => Some(i.to_string()),
        toml::Value::Float(f) => Some(f.to_string()),
        toml::Value::Boolean(b) => Some(b.to_string()),
        toml::Value::Datetime(d) => Some(d.to_string()),
        toml::Value::Array(_) | toml::Value::Table(_) => None,
    }
}
