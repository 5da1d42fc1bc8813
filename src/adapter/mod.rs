//! Job framework logging adapter.
//!
//! # Data Flow
//! ```text
//! host framework
//!     → LogBackend::log_message(job, level, message)
//!     → lazy engine init (once, under a process-wide lock)
//!     → category = log4perl_category or job type
//!     → text = "[Job:<id> ]<job type> (<hostname>) <message>"
//!     → SeverityLevel → ExternalSeverity → handle.{debug,info,warn,error,fatal}
//! ```

pub mod context;
pub mod job_logger;

use crate::error::LoggerError;
use crate::severity::SeverityLevel;

pub use context::{Job, JobRecord, LoggerContext};
pub use job_logger::JobLogger;

/// Logging backend interface expected by job frameworks.
pub trait LogBackend: Send + Sync {
    /// Validate settings and configure the engine.
    fn initialize(&self) -> Result<(), LoggerError>;

    /// Log `message`, optionally on behalf of `job`. No level means info.
    fn log_message(
        &self,
        job: Option<&dyn Job>,
        level: Option<SeverityLevel>,
        message: &str,
    ) -> Result<(), LoggerError>;

    /// Same as `log_message` with a raw syslog code, for hosts that pass integers.
    fn log_raw(&self, job: Option<&dyn Job>, level: Option<i64>, message: &str) -> Result<(), LoggerError> {
        let level = level.map(SeverityLevel::try_from).transpose()?;
        self.log_message(job, level, message)
    }
}
