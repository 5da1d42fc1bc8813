//! Configuration validation.
//!
//! # Responsibilities
//! - Check that the engine config path is set
//! - Check that it names a file this process can read
//! - Reject a zero watch interval, whichever way the config was built
//!
//! # Design Decisions
//! - This is the only check done before the engine is touched; the file's
//!   contents are the engine's business
//! - A file that passes here but fails to open later surfaces as an engine error

use std::fs::File;
use std::path::Path;

use crate::config::schema::{LoggerConfig, CONF_KEY, WATCH_INTERVAL_KEY};
use crate::error::LoggerError;

/// Return the engine config path if it is present and readable.
pub fn validate_config(config: &LoggerConfig) -> Result<&Path, LoggerError> {
    let path = config
        .conf_path
        .as_deref()
        .ok_or_else(|| LoggerError::Configuration(format!("{} not defined", CONF_KEY)))?;

    check_readable(path)?;

    if config.watch_interval == Some(0) {
        return Err(LoggerError::Configuration(format!(
            "{} must be a positive integer, got '0'",
            WATCH_INTERVAL_KEY
        )));
    }
    Ok(path)
}

fn check_readable(path: &Path) -> Result<(), LoggerError> {
    let not_readable = |reason: String| {
        LoggerError::Configuration(format!(
            "{} {} is not readable: {}",
            CONF_KEY,
            path.display(),
            reason
        ))
    };

    let file = File::open(path).map_err(|e| not_readable(e.to_string()))?;
    let metadata = file.metadata().map_err(|e| not_readable(e.to_string()))?;
    if !metadata.is_file() {
        return Err(not_readable("not a regular file".to_string()));
    }
    Ok(())
}
