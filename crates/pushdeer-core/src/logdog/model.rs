//! LogDog domain model.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Info => f.write_str("info"),
            LogLevel::Error => f.write_str("error"),
        }
    }
}

/// One operational log record.
///
/// * `entry` - Operation name (e.g. `deviceReg`)
/// * `event` - Short context for the record
/// * `log` - Detail string, typically the rendered error
/// * `time` - RFC 3339 timestamp
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogDog {
    pub level: LogLevel,
    pub entry: String,
    pub event: String,
    pub log: String,
    pub time: String,
}

impl LogDog {
    /// Creates a record stamped with the current time.
    pub fn new(
        level: LogLevel,
        entry: impl Into<String>,
        event: impl Into<String>,
        log: impl Into<String>,
    ) -> Self {
        Self {
            level,
            entry: entry.into(),
            event: event.into(),
            log: log.into(),
            time: chrono::Utc::now().to_rfc3339(),
        }
    }
}
