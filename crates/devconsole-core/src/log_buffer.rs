//! Log Buffer
//!
//! Ordered store of log entries. Consecutive equivalent entries collapse into
//! a single entry with a summed repeat count, and an optional retention limit
//! trims the oldest entries first.
//!
//! The buffer is only ever mutated from the UI tick, after the ingest queue has
//! been drained.

use crate::log_entry::{LogEntry, Severity};
use std::collections::VecDeque;

/// Bounded (optionally) store of console log entries
#[derive(Debug, Clone, Default)]
pub struct LogBuffer {
    entries: VecDeque<LogEntry>,
    /// `None` = unbounded
    max_log_count: Option<usize>,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer that keeps at most `max_log_count` entries
    pub fn with_retention(max_log_count: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            max_log_count: Some(max_log_count),
        }
    }

    /// Enable or disable FIFO retention. Enabling trims immediately.
    pub fn set_retention(&mut self, max_log_count: Option<usize>) {
        self.max_log_count = max_log_count;
        self.trim_excess();
    }

    pub fn retention(&self) -> Option<usize> {
        self.max_log_count
    }

    /// Append an entry, merging it into the last entry when equivalent
    ///
    /// Only the most recent entry is compared; non-adjacent duplicates stay
    /// separate entries.
    pub fn append(&mut self, entry: LogEntry) {
        match self.entries.back_mut() {
            Some(last) if last.is_equivalent(&entry) => {
                last.repeat_count = last.repeat_count.saturating_add(entry.repeat_count);
            }
            _ => {
                self.entries.push_back(entry);
                self.trim_excess();
            }
        }
    }

    pub fn extend(&mut self, entries: impl IntoIterator<Item = LogEntry>) {
        for entry in entries {
            self.append(entry);
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.back()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &LogEntry> + Clone + '_ {
        self.entries.iter()
    }

    /// Entries whose severity passes `filter`, in insertion order
    ///
    /// The returned iterator is cloneable, so a renderer can walk it more than
    /// once per frame without touching the buffer.
    pub fn visible<F>(&self, filter: F) -> impl Iterator<Item = &LogEntry> + Clone + '_
    where
        F: Fn(Severity) -> bool + Clone + 'static,
    {
        self.entries
            .iter()
            .filter(move |entry| filter(entry.severity))
    }

    fn trim_excess(&mut self) {
        let Some(max) = self.max_log_count else {
            return;
        };
        let excess = self.entries.len().saturating_sub(max);
        if excess > 0 {
            self.entries.drain(..excess);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(message: &str) -> LogEntry {
        LogEntry::new(message, Severity::Info)
    }

    #[test]
    fn test_consecutive_duplicates_collapse() {
        let mut buffer = LogBuffer::new();
        let first = entry("same");
        buffer.append(first.clone());
        buffer.append(first.clone());
        buffer.append(first.with_count(3));

        assert_eq!(buffer.len(), 1);
        assert_eq!(buffer.last().map(|e| e.repeat_count), Some(5));
    }

    #[test]
    fn test_non_adjacent_duplicates_stay_separate() {
        let mut buffer = LogBuffer::new();
        let a = entry("a");
        let b = entry("b");
        buffer.append(a.clone());
        buffer.append(b);
        buffer.append(a);

        assert_eq!(buffer.len(), 3);
        assert!(buffer.iter().all(|e| e.repeat_count == 1));
    }

    #[test]
    fn test_different_timestamps_do_not_collapse() {
        let mut buffer = LogBuffer::new();
        let first = entry("tick");
        let second = first
            .clone()
            .with_timestamp(first.timestamp + chrono::Duration::seconds(1));
        buffer.append(first);
        buffer.append(second);

        assert_eq!(buffer.len(), 2);
    }

    #[test]
    fn test_retention_keeps_newest_in_order() {
        let mut buffer = LogBuffer::with_retention(3);
        for i in 0..10 {
            buffer.append(entry(&format!("line {}", i)));
        }

        let messages: Vec<&str> = buffer.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["line 7", "line 8", "line 9"]);
    }

    #[test]
    fn test_unbounded_by_default() {
        let mut buffer = LogBuffer::new();
        for i in 0..2_000 {
            buffer.append(entry(&i.to_string()));
        }
        assert_eq!(buffer.len(), 2_000);
        assert_eq!(buffer.retention(), None);
    }

    #[test]
    fn test_enabling_retention_trims_existing_entries() {
        let mut buffer = LogBuffer::new();
        for i in 0..5 {
            buffer.append(entry(&i.to_string()));
        }
        buffer.set_retention(Some(2));

        let messages: Vec<&str> = buffer.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["3", "4"]);
    }

    #[test]
    fn test_clear_empties_buffer() {
        let mut buffer = LogBuffer::new();
        buffer.append(entry("a"));
        buffer.clear();
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_visible_filters_by_severity_and_is_restartable() {
        let mut buffer = LogBuffer::new();
        buffer.append(LogEntry::new("info", Severity::Info));
        buffer.append(LogEntry::new("warn", Severity::Warning));
        buffer.append(LogEntry::new("err", Severity::Error));

        let visible = buffer.visible(|severity| severity != Severity::Warning);
        let first: Vec<&str> = visible.clone().map(|e| e.message.as_str()).collect();
        let second: Vec<&str> = visible.map(|e| e.message.as_str()).collect();

        assert_eq!(first, vec!["info", "err"]);
        assert_eq!(first, second);
        assert_eq!(buffer.len(), 3);
    }
}
