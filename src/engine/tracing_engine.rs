//! Logging engine backed by the `tracing` ecosystem.
//!
//! # Responsibilities
//! - Load the engine file and keep thresholds behind an atomic swap
//! - Install the process-wide fmt subscriber on first initialization
//! - Hand out per-category handles that filter by threshold and emit events
//! - Run the poll watcher in watch mode
//!
//! # Design Decisions
//! - Thresholds reload live; output format is fixed once the subscriber exists
//! - An already-installed global subscriber is left in place
//! - FATAL has no `tracing` level; it is emitted at ERROR with `fatal = true`

use std::path::Path;
use std::sync::{Arc, Mutex, Once, OnceLock, PoisonError};
use std::time::Duration;

use arc_swap::ArcSwapOption;
use notify::PollWatcher;
use tracing_subscriber::EnvFilter;

use crate::engine::settings::{EngineSettings, OutputFormat, Threshold};
use crate::engine::watcher::SettingsWatcher;
use crate::engine::{CategoryLogger, LogEngine};
use crate::error::EngineError;
use crate::severity::ExternalSeverity;

/// Subscriber filter when `RUST_LOG` is unset. Category thresholds do the real filtering.
pub const DEFAULT_FILTER: &str = "warn,job_logger=trace";

static GLOBAL_ENGINE: OnceLock<Arc<TracingEngine>> = OnceLock::new();
static SUBSCRIBER: Once = Once::new();

pub struct TracingEngine {
    settings: Arc<ArcSwapOption<EngineSettings>>,
    watcher: Mutex<Option<PollWatcher>>,
    install_subscriber: bool,
}

impl TracingEngine {
    /// Engine that installs the global subscriber when first initialized.
    pub fn new() -> Self {
        Self {
            settings: Arc::new(ArcSwapOption::empty()),
            watcher: Mutex::new(None),
            install_subscriber: true,
        }
    }

    /// Engine that emits into whatever subscriber is already current.
    pub fn detached() -> Self {
        Self {
            install_subscriber: false,
            ..Self::new()
        }
    }

    /// The process-wide engine.
    pub fn global() -> Arc<TracingEngine> {
        GLOBAL_ENGINE
            .get_or_init(|| Arc::new(TracingEngine::new()))
            .clone()
    }

    /// Current settings, if initialized.
    pub fn settings(&self) -> Option<Arc<EngineSettings>> {
        self.settings.load_full()
    }

    pub fn is_watching(&self) -> bool {
        self.watcher
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    fn configure(&self, path: &Path) -> Result<Arc<EngineSettings>, EngineError> {
        let settings = Arc::new(EngineSettings::load(path)?);

        // A previous watch would keep reloading the old path.
        self.watcher
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();

        self.settings.store(Some(settings.clone()));

        if self.install_subscriber {
            install_subscriber(&settings);
        }

        tracing::debug!(path = ?path, root = ?settings.root, "Logging engine initialized");
        Ok(settings)
    }
}

impl Default for TracingEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TracingEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TracingEngine")
            .field("initialized", &self.is_initialized())
            .field("watching", &self.is_watching())
            .finish()
    }
}

impl LogEngine for TracingEngine {
    type Handle = TracingHandle;

    fn initialize(&self, path: &Path) -> Result<(), EngineError> {
        self.configure(path)?;
        Ok(())
    }

    fn initialize_with_watch(&self, path: &Path, interval: Duration) -> Result<(), EngineError> {
        self.configure(path)?;

        let watcher = SettingsWatcher::new(path, interval, self.settings.clone()).run()?;
        *self.watcher.lock().unwrap_or_else(PoisonError::into_inner) = Some(watcher);
        Ok(())
    }

    fn is_initialized(&self) -> bool {
        self.settings.load().is_some()
    }

    fn logger(&self, category: &str) -> TracingHandle {
        TracingHandle {
            category: category.to_string(),
            settings: self.settings.clone(),
        }
    }
}

fn install_subscriber(settings: &EngineSettings) {
    SUBSCRIBER.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(settings.ansi);

        let result = match settings.format {
            OutputFormat::Full => builder.try_init(),
            OutputFormat::Compact => builder.compact().try_init(),
            OutputFormat::Pretty => builder.pretty().try_init(),
            OutputFormat::Json => builder.json().try_init(),
        };

        if let Err(e) = result {
            tracing::debug!(error = %e, "Global subscriber already installed, keeping it");
        }
    });
}

/// Handle for one category. Thresholds are read at log time, so reloads apply
/// to handles already handed out.
#[derive(Clone)]
pub struct TracingHandle {
    category: String,
    settings: Arc<ArcSwapOption<EngineSettings>>,
}

impl TracingHandle {
    pub fn category(&self) -> &str {
        &self.category
    }

    fn threshold(&self) -> Threshold {
        match self.settings.load().as_deref() {
            Some(settings) => settings.threshold_for(&self.category),
            None => EngineSettings::default().root,
        }
    }
}

impl std::fmt::Debug for TracingHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TracingHandle")
            .field("category", &self.category)
            .finish()
    }
}

impl CategoryLogger for TracingHandle {
    fn log(&self, severity: ExternalSeverity, text: &str) {
        if !self.threshold().allows(severity) {
            return;
        }

        let category = self.category.as_str();
        match severity {
            ExternalSeverity::Debug => tracing::debug!(category, "{}", text),
            ExternalSeverity::Info => tracing::info!(category, "{}", text),
            ExternalSeverity::Warn => tracing::warn!(category, "{}", text),
            ExternalSeverity::Error => tracing::error!(category, "{}", text),
            ExternalSeverity::Fatal => tracing::error!(category, fatal = true, "{}", text),
        }
    }
}
