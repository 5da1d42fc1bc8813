//! Error types surfaced by the adapter and the logging engine.

use thiserror::Error;

/// Errors returned by [`crate::adapter::LogBackend`] operations.
#[derive(Debug, Error)]
pub enum LoggerError {
    /// Required setting missing, or the engine config file is not readable.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Severity outside the known enumeration.
    #[error("Logging error: {0}")]
    Logging(String),

    /// Failure inside the logging engine, passed through untranslated.
    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Errors produced by a logging engine.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid engine configuration: {0}")]
    Invalid(String),

    #[error("Watch error: {0}")]
    Watch(#[from] notify::Error),
}
