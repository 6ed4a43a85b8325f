//! Log entry type shared by the queue, the buffer and the renderers

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The max message length a single rendered line may carry.
pub const MAX_MESSAGE_LENGTH: usize = 16_382;

/// Severity of a console log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Warning,
    Error,
    Exception,
    Assert,
}

impl Severity {
    /// All severities in display order
    pub const ALL: [Severity; 5] = [
        Severity::Info,
        Severity::Warning,
        Severity::Error,
        Severity::Exception,
        Severity::Assert,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Info => "Info",
            Self::Warning => "Warning",
            Self::Error => "Error",
            Self::Exception => "Exception",
            Self::Assert => "Assert",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<log::Level> for Severity {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Self::Error,
            log::Level::Warn => Self::Warning,
            log::Level::Info | log::Level::Debug | log::Level::Trace => Self::Info,
        }
    }
}

/// A single console log entry
///
/// Immutable once created, except for `repeat_count` which the buffer bumps
/// when an equivalent entry arrives right after this one.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub message: String,
    pub severity: Severity,
    pub stack_trace: Option<String>,
    pub timestamp: DateTime<Local>,
    pub repeat_count: usize,
}

impl LogEntry {
    /// Create an entry stamped with the current local time
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
            stack_trace: None,
            timestamp: Local::now(),
            repeat_count: 1,
        }
    }

    pub fn with_stack_trace(mut self, stack_trace: impl Into<String>) -> Self {
        self.stack_trace = Some(stack_trace.into());
        self
    }

    /// Set the repeat count; zero is bumped to one
    pub fn with_count(mut self, count: usize) -> Self {
        self.repeat_count = count.max(1);
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Two entries collapse into one when message, stack trace, timestamp and
    /// severity all match. The repeat count is not part of the comparison.
    pub fn is_equivalent(&self, other: &LogEntry) -> bool {
        self.message == other.message
            && self.stack_trace == other.stack_trace
            && self.timestamp == other.timestamp
            && self.severity == other.severity
    }

    /// `[HH:MM:SS] message`, cut at [`MAX_MESSAGE_LENGTH`] characters
    pub fn display_text(&self) -> String {
        if self.message.is_empty() {
            return String::new();
        }
        let text = format!("[{}] {}", self.timestamp.format("%H:%M:%S"), self.message);
        match text.char_indices().nth(MAX_MESSAGE_LENGTH) {
            Some((cut, _)) => text[..cut].to_string(),
            None => text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equivalence_ignores_repeat_count() {
        let first = LogEntry::new("boom", Severity::Error);
        let second = first.clone().with_count(4);
        assert!(first.is_equivalent(&second));
    }

    #[test]
    fn test_equivalence_includes_timestamp() {
        let first = LogEntry::new("boom", Severity::Error);
        let later = first
            .clone()
            .with_timestamp(first.timestamp + chrono::Duration::milliseconds(1));
        assert!(!first.is_equivalent(&later));
    }

    #[test]
    fn test_equivalence_includes_stack_trace_and_severity() {
        let base = LogEntry::new("boom", Severity::Error);
        assert!(!base.is_equivalent(&base.clone().with_stack_trace("at main")));

        let mut warning = base.clone();
        warning.severity = Severity::Warning;
        assert!(!base.is_equivalent(&warning));
    }

    #[test]
    fn test_display_text_is_prefixed_with_time() {
        let entry = LogEntry::new("hello", Severity::Info);
        let text = entry.display_text();
        assert!(text.starts_with('['));
        assert!(text.ends_with("] hello"));
    }

    #[test]
    fn test_display_text_truncates_long_messages() {
        let entry = LogEntry::new("x".repeat(MAX_MESSAGE_LENGTH * 2), Severity::Info);
        assert_eq!(entry.display_text().chars().count(), MAX_MESSAGE_LENGTH);
    }

    #[test]
    fn test_zero_count_is_bumped() {
        assert_eq!(LogEntry::new("a", Severity::Info).with_count(0).repeat_count, 1);
    }

    #[test]
    fn test_severity_from_log_level() {
        assert_eq!(Severity::from(log::Level::Warn), Severity::Warning);
        assert_eq!(Severity::from(log::Level::Debug), Severity::Info);
    }
}
