//! Shared utilities for adapter integration tests.
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use job_logger::{CategoryLogger, EngineError, ExternalSeverity, LogEngine};

/// Everything the adapter asked of the engine, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Initialize(PathBuf),
    InitializeWithWatch(PathBuf, Duration),
    Logger(String),
    Log(String, ExternalSeverity, String),
}

/// Engine double that records calls instead of logging.
#[derive(Debug, Default)]
pub struct RecordingEngine {
    initialized: AtomicBool,
    calls: Arc<Mutex<Vec<Call>>>,
}

impl RecordingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine that reports itself as already initialized.
    pub fn initialized() -> Self {
        let engine = Self::new();
        engine.initialized.store(true, Ordering::SeqCst);
        engine
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn init_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, Call::Initialize(_) | Call::InitializeWithWatch(..)))
            .count()
    }

    /// `(category, severity, text)` of every dispatched message.
    pub fn logged(&self) -> Vec<(String, ExternalSeverity, String)> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Log(category, severity, text) => Some((category, severity, text)),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

impl LogEngine for RecordingEngine {
    type Handle = RecordingHandle;

    fn initialize(&self, path: &Path) -> Result<(), EngineError> {
        self.record(Call::Initialize(path.to_path_buf()));
        self.initialized.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn initialize_with_watch(&self, path: &Path, interval: Duration) -> Result<(), EngineError> {
        self.record(Call::InitializeWithWatch(path.to_path_buf(), interval));
        self.initialized.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::SeqCst)
    }

    fn logger(&self, category: &str) -> RecordingHandle {
        self.record(Call::Logger(category.to_string()));
        RecordingHandle {
            category: category.to_string(),
            calls: self.calls.clone(),
        }
    }
}

pub struct RecordingHandle {
    category: String,
    calls: Arc<Mutex<Vec<Call>>>,
}

impl CategoryLogger for RecordingHandle {
    fn log(&self, severity: ExternalSeverity, text: &str) {
        self.calls.lock().unwrap().push(Call::Log(
            self.category.clone(),
            severity,
            text.to_string(),
        ));
    }
}

/// Write an engine config file into `dir` and return its path.
pub fn write_engine_file(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("engine.toml");
    fs::write(&path, content).unwrap();
    path
}
