//! Severity vocabularies and the mapping between them.
//!
//! # Data Flow
//! ```text
//! job framework level (syslog code or name)
//!     → SeverityLevel (8 values, closed)
//!     → ExternalSeverity (5 values, what the engine understands)
//! ```
//!
//! # Design Decisions
//! - Raw input is validated once, at conversion; past that point the enum is closed
//! - The mapping is a single exhaustive `match`, so adding a level fails to compile

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LoggerError;

/// Severity as seen by the job framework, ordered by decreasing urgency.
///
/// Discriminants follow the syslog convention (`LOG_EMERG` = 0 … `LOG_DEBUG` = 7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityLevel {
    Emergency = 0,
    Alert = 1,
    Critical = 2,
    Error = 3,
    Warning = 4,
    Notice = 5,
    Info = 6,
    Debug = 7,
}

impl SeverityLevel {
    /// Every level, most urgent first.
    pub const ALL: [SeverityLevel; 8] = [
        SeverityLevel::Emergency,
        SeverityLevel::Alert,
        SeverityLevel::Critical,
        SeverityLevel::Error,
        SeverityLevel::Warning,
        SeverityLevel::Notice,
        SeverityLevel::Info,
        SeverityLevel::Debug,
    ];

    /// Syslog code of this level.
    pub fn code(self) -> i64 {
        self as i64
    }

    /// Translate to the engine's vocabulary.
    pub fn to_external(self) -> ExternalSeverity {
        match self {
            SeverityLevel::Debug => ExternalSeverity::Debug,
            SeverityLevel::Info | SeverityLevel::Notice => ExternalSeverity::Info,
            SeverityLevel::Warning => ExternalSeverity::Warn,
            SeverityLevel::Error => ExternalSeverity::Error,
            SeverityLevel::Critical | SeverityLevel::Alert | SeverityLevel::Emergency => {
                ExternalSeverity::Fatal
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SeverityLevel::Emergency => "emergency",
            SeverityLevel::Alert => "alert",
            SeverityLevel::Critical => "critical",
            SeverityLevel::Error => "error",
            SeverityLevel::Warning => "warning",
            SeverityLevel::Notice => "notice",
            SeverityLevel::Info => "info",
            SeverityLevel::Debug => "debug",
        }
    }
}

impl From<SeverityLevel> for ExternalSeverity {
    fn from(level: SeverityLevel) -> Self {
        level.to_external()
    }
}

impl TryFrom<i64> for SeverityLevel {
    type Error = LoggerError;

    fn try_from(code: i64) -> Result<Self, LoggerError> {
        match code {
            0 => Ok(SeverityLevel::Emergency),
            1 => Ok(SeverityLevel::Alert),
            2 => Ok(SeverityLevel::Critical),
            3 => Ok(SeverityLevel::Error),
            4 => Ok(SeverityLevel::Warning),
            5 => Ok(SeverityLevel::Notice),
            6 => Ok(SeverityLevel::Info),
            7 => Ok(SeverityLevel::Debug),
            other => Err(LoggerError::Logging(format!("Invalid log level: {}", other))),
        }
    }
}

impl FromStr for SeverityLevel {
    type Err = LoggerError;

    /// Accepts level names (full or syslog-abbreviated, any case, optional `LOG_`
    /// prefix) and numeric codes.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(code) = trimmed.parse::<i64>() {
            return SeverityLevel::try_from(code);
        }

        let lower = trimmed.to_ascii_lowercase();
        let name = lower.strip_prefix("log_").unwrap_or(&lower);
        match name {
            "emerg" | "emergency" => Ok(SeverityLevel::Emergency),
            "alert" => Ok(SeverityLevel::Alert),
            "crit" | "critical" => Ok(SeverityLevel::Critical),
            "err" | "error" => Ok(SeverityLevel::Error),
            "warn" | "warning" => Ok(SeverityLevel::Warning),
            "notice" => Ok(SeverityLevel::Notice),
            "info" => Ok(SeverityLevel::Info),
            "debug" => Ok(SeverityLevel::Debug),
            _ => Err(LoggerError::Logging(format!("Invalid log level: {}", trimmed))),
        }
    }
}

impl fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Severity understood by the logging engine.
///
/// Ordered by urgency so thresholds can be compared: `Debug < Info < … < Fatal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExternalSeverity {
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

impl ExternalSeverity {
    pub fn as_str(self) -> &'static str {
        match self {
            ExternalSeverity::Debug => "debug",
            ExternalSeverity::Info => "info",
            ExternalSeverity::Warn => "warn",
            ExternalSeverity::Error => "error",
            ExternalSeverity::Fatal => "fatal",
        }
    }
}

impl fmt::Display for ExternalSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ExternalSeverity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" | "trace" => Ok(ExternalSeverity::Debug),
            "info" => Ok(ExternalSeverity::Info),
            "warn" | "warning" => Ok(ExternalSeverity::Warn),
            "error" => Ok(ExternalSeverity::Error),
            "fatal" => Ok(ExternalSeverity::Fatal),
            other => Err(format!("unknown severity '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_table() {
        use ExternalSeverity as X;
        use SeverityLevel as S;

        let expected = [
            (S::Emergency, X::Fatal),
            (S::Alert, X::Fatal),
            (S::Critical, X::Fatal),
            (S::Error, X::Error),
            (S::Warning, X::Warn),
            (S::Notice, X::Info),
            (S::Info, X::Info),
            (S::Debug, X::Debug),
        ];
        for (level, external) in expected {
            assert_eq!(level.to_external(), external, "{}", level);
        }
    }

    #[test]
    fn test_codes_follow_syslog() {
        for (i, level) in SeverityLevel::ALL.iter().enumerate() {
            assert_eq!(level.code(), i as i64);
            assert_eq!(SeverityLevel::try_from(i as i64).unwrap(), *level);
        }
    }

    #[test]
    fn test_out_of_range_code_rejected() {
        for code in [-1, 8, 100] {
            let err = SeverityLevel::try_from(code).unwrap_err();
            assert!(matches!(err, LoggerError::Logging(_)));
            assert!(err.to_string().contains("Invalid log level"));
        }
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("LOG_EMERG".parse::<SeverityLevel>().unwrap(), SeverityLevel::Emergency);
        assert_eq!("crit".parse::<SeverityLevel>().unwrap(), SeverityLevel::Critical);
        assert_eq!("Warning".parse::<SeverityLevel>().unwrap(), SeverityLevel::Warning);
        assert_eq!("5".parse::<SeverityLevel>().unwrap(), SeverityLevel::Notice);
        assert!("verbose".parse::<SeverityLevel>().is_err());
        assert!("9".parse::<SeverityLevel>().is_err());
    }

    #[test]
    fn test_display_honors_width() {
        assert_eq!(format!("[{:<10}]", SeverityLevel::Info), "[info      ]");
        assert_eq!(format!("[{:>6}]", ExternalSeverity::Warn), "[  warn]");
    }

    #[test]
    fn test_external_ordering() {
        assert!(ExternalSeverity::Debug < ExternalSeverity::Info);
        assert!(ExternalSeverity::Info < ExternalSeverity::Warn);
        assert!(ExternalSeverity::Warn < ExternalSeverity::Error);
        assert!(ExternalSeverity::Error < ExternalSeverity::Fatal);
    }
}
