//! Identifiers that end up in message prefixes.

use serde::{Deserialize, Serialize};

/// A unit of work being processed by the host framework.
pub trait Job {
    fn job_id(&self) -> &str;
}

/// Plain job carrying only its identifier.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct JobRecord {
    pub id: String,
}

impl JobRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl Job for JobRecord {
    fn job_id(&self) -> &str {
        &self.id
    }
}

/// Where a log line comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerContext {
    /// Job type (service name) of the host worker.
    pub job_type: String,

    /// Pinned hostname. `None` resolves the OS hostname on every call.
    pub hostname: Option<String>,
}

impl LoggerContext {
    pub fn new(job_type: impl Into<String>) -> Self {
        Self {
            job_type: job_type.into(),
            hostname: None,
        }
    }

    pub fn with_hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = Some(hostname.into());
        self
    }

    /// Hostname as of now.
    pub fn hostname(&self) -> String {
        if let Some(pinned) = &self.hostname {
            return pinned.clone();
        }
        hostname::get()
            .ok()
            .and_then(|h| h.to_str().map(|s| s.to_string()))
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| "localhost".to_string())
    }
}
