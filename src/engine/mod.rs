//! Logging engine contract and the tracing-backed engine.
//!
//! # Data Flow
//! ```text
//! adapter
//!     → LogEngine::is_initialized / initialize / initialize_with_watch
//!     → LogEngine::logger(category) → CategoryLogger handle
//!     → handle.{debug,info,warn,error,fatal}(text)
//!
//! TracingEngine:
//!     settings.rs (engine file → thresholds, output format)
//!     → tracing_engine.rs (threshold check, emit tracing event)
//!     → watcher.rs (poll engine file, swap settings)
//! ```
//!
//! # Design Decisions
//! - The adapter only sees the traits; engines are swappable and mockable
//! - Engine state is process-wide; share one engine through `Arc`

pub mod settings;
pub mod tracing_engine;
pub mod watcher;

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use crate::error::EngineError;
use crate::severity::ExternalSeverity;

pub use settings::EngineSettings;
pub use tracing_engine::{TracingEngine, TracingHandle};

/// Per-category logging handle.
///
/// Only `log` is required; the named methods delegate to it.
pub trait CategoryLogger {
    fn log(&self, severity: ExternalSeverity, text: &str);

    fn debug(&self, text: &str) {
        self.log(ExternalSeverity::Debug, text);
    }

    fn info(&self, text: &str) {
        self.log(ExternalSeverity::Info, text);
    }

    fn warn(&self, text: &str) {
        self.log(ExternalSeverity::Warn, text);
    }

    fn error(&self, text: &str) {
        self.log(ExternalSeverity::Error, text);
    }

    fn fatal(&self, text: &str) {
        self.log(ExternalSeverity::Fatal, text);
    }
}

/// A logging engine owning process-wide configuration.
pub trait LogEngine: Send + Sync {
    type Handle: CategoryLogger;

    /// Configure once from `path`.
    fn initialize(&self, path: &Path) -> Result<(), EngineError>;

    /// Configure from `path` and re-read it every `interval`.
    fn initialize_with_watch(&self, path: &Path, interval: Duration) -> Result<(), EngineError>;

    fn is_initialized(&self) -> bool;

    /// Handle for `category`.
    fn logger(&self, category: &str) -> Self::Handle;
}

impl<E: LogEngine + ?Sized> LogEngine for Arc<E> {
    type Handle = E::Handle;

    fn initialize(&self, path: &Path) -> Result<(), EngineError> {
        (**self).initialize(path)
    }

    fn initialize_with_watch(&self, path: &Path, interval: Duration) -> Result<(), EngineError> {
        (**self).initialize_with_watch(path, interval)
    }

    fn is_initialized(&self) -> bool {
        (**self).is_initialized()
    }

    fn logger(&self, category: &str) -> Self::Handle {
        (**self).logger(category)
    }
}
