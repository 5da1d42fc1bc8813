//! Job framework logging adapter library

pub mod adapter;
pub mod config;
pub mod engine;
pub mod error;
pub mod severity;

pub use adapter::{Job, JobLogger, JobRecord, LogBackend, LoggerContext};
pub use config::LoggerConfig;
pub use engine::{CategoryLogger, LogEngine, TracingEngine};
pub use error::{EngineError, LoggerError};
pub use severity::{ExternalSeverity, SeverityLevel};
