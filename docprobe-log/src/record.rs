//! Log record definition

use chrono::{DateTime, Local};
use std::fmt;

/// Log level
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Level {
    /// Most detailed tracing
    Trace = 0,
    /// Debugging details
    Debug = 1,
    /// General information
    Info = 2,
    /// Warning
    Warn = 3,
    /// Error
    Error = 4,
}

impl Level {
    /// Level name as printed in records
    pub const fn as_str(&self) -> &'static str {
        match self {
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }

    /// Parse from the `repr(u8)` value
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Level::Trace),
            1 => Some(Level::Debug),
            2 => Some(Level::Info),
            3 => Some(Level::Warn),
            4 => Some(Level::Error),
            _ => None,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single diagnostics record
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    /// Local wall-clock time of the record
    pub timestamp: DateTime<Local>,
    /// Log level
    pub level: Level,
    /// Module path (fixed at compile time)
    pub target: &'static str,
    /// Formatted message
    pub message: String,
}

impl Record {
    /// Create a new record stamped with the current time
    pub fn new(level: Level, target: &'static str, message: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            level,
            target,
            message: message.into(),
        }
    }

    /// Render as `[HH:MM:SS.mmm] LEVEL target: message`
    pub fn format(&self) -> String {
        format!(
            "[{}] {} {}: {}",
            self.timestamp.format("%H:%M:%S%.3f"),
            self.level,
            self.target,
            self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_level_ordering() {
        assert!(Level::Trace < Level::Debug);
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warn);
        assert!(Level::Warn < Level::Error);
    }

    #[test]
    fn test_level_from_u8() {
        assert_eq!(Level::from_u8(0), Some(Level::Trace));
        assert_eq!(Level::from_u8(4), Some(Level::Error));
        assert_eq!(Level::from_u8(5), None);
    }

    #[test]
    fn test_record_creation() {
        let record = Record::new(Level::Info, "docprobe::document", "loaded");
        assert_eq!(record.level, Level::Info);
        assert_eq!(record.target, "docprobe::document");
        assert_eq!(record.message, "loaded");
    }

    #[test]
    fn test_record_format() {
        let timestamp = Local.with_ymd_and_hms(2024, 3, 1, 1, 2, 3).unwrap();
        let record = Record {
            timestamp,
            level: Level::Warn,
            target: "docprobe::document",
            message: String::from("file missing"),
        };

        assert_eq!(
            record.format(),
            "[01:02:03.000] WARN docprobe::document: file missing"
        );
    }
}
