//! The adapter: job framework calls in, engine calls out.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use crate::adapter::context::{Job, LoggerContext};
use crate::adapter::LogBackend;
use crate::config::validation::validate_config;
use crate::config::LoggerConfig;
use crate::engine::{CategoryLogger, LogEngine, TracingEngine};
use crate::error::LoggerError;
use crate::severity::{ExternalSeverity, SeverityLevel};

/// Serializes the lazy check-then-initialize of engines across the process.
static ENGINE_INIT: Mutex<()> = Mutex::new(());

/// Adapter from the job framework's logging interface to a [`LogEngine`].
///
/// Holds no mutable state; whether the engine is initialized is asked of the
/// engine every time.
#[derive(Debug)]
pub struct JobLogger<E: LogEngine> {
    config: LoggerConfig,
    context: LoggerContext,
    engine: E,
}

impl<E: LogEngine> JobLogger<E> {
    pub fn new(config: LoggerConfig, context: LoggerContext, engine: E) -> Self {
        Self {
            config,
            context,
            engine,
        }
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    pub fn context(&self) -> &LoggerContext {
        &self.context
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Category messages are logged under.
    pub fn category(&self) -> &str {
        self.config
            .category
            .as_deref()
            .unwrap_or(self.context.job_type.as_str())
    }

    /// Final text for `message`, with the job prefix when a job is given.
    pub fn format_message(&self, job: Option<&dyn Job>, message: &str) -> String {
        format_message(
            &self.context.job_type,
            &self.context.hostname(),
            job.map(|j| j.job_id()),
            message,
        )
    }

    fn ensure_initialized(&self) -> Result<(), LoggerError> {
        if self.engine.is_initialized() {
            return Ok(());
        }

        let _guard = ENGINE_INIT.lock().unwrap_or_else(PoisonError::into_inner);
        // Another caller may have finished while we waited.
        if self.engine.is_initialized() {
            return Ok(());
        }

        tracing::debug!(job_type = %self.context.job_type, "Engine not initialized, initializing");
        self.initialize()
    }
}

impl JobLogger<Arc<TracingEngine>> {
    /// Adapter on the process-wide tracing engine.
    pub fn with_global_engine(config: LoggerConfig, context: LoggerContext) -> Self {
        Self::new(config, context, TracingEngine::global())
    }
}

impl<E: LogEngine> LogBackend for JobLogger<E> {
    fn initialize(&self) -> Result<(), LoggerError> {
        let path = validate_config(&self.config)?;

        match self.config.watch_interval {
            Some(secs) => {
                self.engine
                    .initialize_with_watch(path, Duration::from_secs(secs))?;
            }
            None => {
                self.engine.initialize(path)?;
            }
        }

        Ok(())
    }

    fn log_message(
        &self,
        job: Option<&dyn Job>,
        level: Option<SeverityLevel>,
        message: &str,
    ) -> Result<(), LoggerError> {
        self.ensure_initialized()?;

        let handle = self.engine.logger(self.category());
        let text = self.format_message(job, message);
        dispatch(&handle, level, &text);
        Ok(())
    }
}

/// `"<job type> (<hostname>) <message>"`, prefixed with `"Job:<id> "` for a job.
pub fn format_message(job_type: &str, hostname: &str, job_id: Option<&str>, message: &str) -> String {
    match job_id {
        Some(id) => format!("Job:{} {} ({}) {}", id, job_type, hostname, message),
        None => format!("{} ({}) {}", job_type, hostname, message),
    }
}

fn dispatch<H: CategoryLogger>(handle: &H, level: Option<SeverityLevel>, text: &str) {
    let severity = level
        .map(SeverityLevel::to_external)
        .unwrap_or(ExternalSeverity::Info);

    match severity {
        ExternalSeverity::Debug => handle.debug(text),
        ExternalSeverity::Info => handle.info(text),
        ExternalSeverity::Warn => handle.warn(text),
        ExternalSeverity::Error => handle.error(text),
        ExternalSeverity::Fatal => handle.fatal(text),
    }
}
