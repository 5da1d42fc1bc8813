//! Engine config file watcher for hot reload.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use arc_swap::ArcSwapOption;
use notify::{Config, Event, PollWatcher, RecursiveMode, Watcher};

use crate::engine::settings::EngineSettings;

/// Polls the engine config file and swaps in new settings when it changes.
pub struct SettingsWatcher {
    path: PathBuf,
    interval: Duration,
    settings: Arc<ArcSwapOption<EngineSettings>>,
}

impl SettingsWatcher {
    pub fn new(
        path: &Path,
        interval: Duration,
        settings: Arc<ArcSwapOption<EngineSettings>>,
    ) -> Self {
        Self {
            path: path.to_path_buf(),
            interval,
            settings,
        }
    }

    /// Start polling on the watcher's own thread.
    ///
    /// Polling stops when the returned watcher is dropped.
    pub fn run(self) -> Result<PollWatcher, notify::Error> {
        let settings = self.settings.clone();
        let path = self.path.clone();

        // Mtimes are compared at whole-second resolution; same-second edits need a content check.
        let config = Config::default()
            .with_poll_interval(self.interval)
            .with_compare_contents(true);

        let mut watcher = PollWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    if event.kind.is_modify() || event.kind.is_create() {
                        tracing::info!(path = ?path, "Engine config change detected, reloading...");
                        reload(&path, &settings);
                    }
                }
                Err(e) => tracing::error!("Watch error: {:?}", e),
            },
            config,
        )?;

        watcher.watch(&self.path, RecursiveMode::NonRecursive)?;

        tracing::info!(
            path = ?self.path,
            interval_secs = self.interval.as_secs(),
            "Engine config watcher started"
        );
        Ok(watcher)
    }
}

/// Re-read `path` into `settings`. A bad file keeps the current settings.
pub fn reload(path: &Path, settings: &ArcSwapOption<EngineSettings>) -> bool {
    match EngineSettings::load(path) {
        Ok(new_settings) => {
            settings.store(Some(Arc::new(new_settings)));
            true
        }
        Err(e) => {
            tracing::error!(
                error = %e,
                "Failed to reload engine config. Keeping current configuration."
            );
            false
        }
    }
}
