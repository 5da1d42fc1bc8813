//! Engine configuration file.
//!
//! ```toml
//! level = "info"          # root threshold
//! format = "compact"      # full | compact | pretty | json
//! ansi = false
//!
//! [categories]
//! "MyApp" = "debug"
//! "MyApp::Noisy" = "warn"
//! "jobs.billing" = "off"
//! ```
//!
//! Thresholds are resolved hierarchically: `A::B::C` falls back to `A::B`, then
//! `A`, then the root `level`.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::severity::ExternalSeverity;

/// Least urgent severity a category emits; `Off` silences it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Threshold {
    At(ExternalSeverity),
    Off,
}

impl Threshold {
    pub fn allows(self, severity: ExternalSeverity) -> bool {
        match self {
            Threshold::At(min) => severity >= min,
            Threshold::Off => false,
        }
    }

    fn parse(raw: &str) -> Result<Self, EngineError> {
        if raw.trim().eq_ignore_ascii_case("off") {
            return Ok(Threshold::Off);
        }
        raw.parse::<ExternalSeverity>()
            .map(Threshold::At)
            .map_err(EngineError::Invalid)
    }
}

/// Output layout of the installed subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Full,
    Compact,
    Pretty,
    Json,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawSettings {
    level: String,
    format: OutputFormat,
    ansi: bool,
    categories: HashMap<String, String>,
}

impl Default for RawSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: OutputFormat::default(),
            ansi: true,
            categories: HashMap::new(),
        }
    }
}

/// Parsed, validated engine settings. Immutable; reloads replace the whole value.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineSettings {
    pub root: Threshold,
    pub format: OutputFormat,
    pub ansi: bool,
    categories: HashMap<String, Threshold>,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            root: Threshold::At(ExternalSeverity::Info),
            format: OutputFormat::default(),
            ansi: true,
            categories: HashMap::new(),
        }
    }
}

impl EngineSettings {
    pub fn load(path: &Path) -> Result<Self, EngineError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, EngineError> {
        let raw: RawSettings = toml::from_str(content)?;

        let mut categories = HashMap::with_capacity(raw.categories.len());
        for (name, level) in raw.categories {
            let threshold = Threshold::parse(&level)
                .map_err(|e| EngineError::Invalid(format!("category '{}': {}", name, e)))?;
            categories.insert(name, threshold);
        }

        Ok(Self {
            root: Threshold::parse(&raw.level)?,
            format: raw.format,
            ansi: raw.ansi,
            categories,
        })
    }

    /// Threshold for `category`, walking up `::`/`.` separated parents.
    pub fn threshold_for(&self, category: &str) -> Threshold {
        let mut current = category;
        loop {
            if let Some(threshold) = self.categories.get(current) {
                return *threshold;
            }
            match parent(current) {
                Some(p) => current = p,
                None => return self.root,
            }
        }
    }
}

fn parent(category: &str) -> Option<&str> {
    let by_colons = category.rfind("::");
    let by_dot = category.rfind('.');
    let cut = match (by_colons, by_dot) {
        (Some(a), Some(b)) => a.max(b),
        (Some(a), None) => a,
        (None, Some(b)) => b,
        (None, None) => return None,
    };
    Some(&category[..cut]).filter(|p| !p.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = EngineSettings::parse("").unwrap();
        assert_eq!(settings, EngineSettings::default());
    }

    #[test]
    fn test_hierarchical_thresholds() {
        let settings = EngineSettings::parse(
            r#"
            level = "warn"
            [categories]
            "MyApp" = "debug"
            "MyApp::Noisy" = "error"
            "jobs.billing" = "off"
            "#,
        )
        .unwrap();

        assert_eq!(settings.threshold_for("MyApp"), Threshold::At(ExternalSeverity::Debug));
        assert_eq!(
            settings.threshold_for("MyApp::Worker"),
            Threshold::At(ExternalSeverity::Debug)
        );
        assert_eq!(
            settings.threshold_for("MyApp::Noisy::Deep"),
            Threshold::At(ExternalSeverity::Error)
        );
        assert_eq!(settings.threshold_for("jobs.billing.monthly"), Threshold::Off);
        assert_eq!(settings.threshold_for("Other"), Threshold::At(ExternalSeverity::Warn));
    }

    #[test]
    fn test_threshold_allows() {
        let warn = Threshold::At(ExternalSeverity::Warn);
        assert!(!warn.allows(ExternalSeverity::Info));
        assert!(warn.allows(ExternalSeverity::Warn));
        assert!(warn.allows(ExternalSeverity::Fatal));
        assert!(!Threshold::Off.allows(ExternalSeverity::Fatal));
    }

    #[test]
    fn test_invalid_level() {
        assert!(matches!(
            EngineSettings::parse("level = \"loud\""),
            Err(EngineError::Invalid(_))
        ));
        assert!(matches!(
            EngineSettings::parse("[categories]\nA = \"loud\""),
            Err(EngineError::Invalid(_))
        ));
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(matches!(
            EngineSettings::parse("appender = \"file\""),
            Err(EngineError::Parse(_))
        ));
    }

    #[test]
    fn test_parent() {
        assert_eq!(parent("a::b.c"), Some("a::b"));
        assert_eq!(parent("a::b"), Some("a"));
        assert_eq!(parent("a"), None);
        assert_eq!(parent(".a"), None);
    }
}
