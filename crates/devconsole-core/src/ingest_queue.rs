//! Ingest Queue
//!
//! Multi-producer, single-consumer hand-off for log entries. Any thread may
//! submit through a [`LogSink`]; the UI tick drains everything queued since the
//! previous drain and feeds it to the [`LogBuffer`](crate::LogBuffer).
//!
//! Storage is a `Vec` behind a mutex. A drain swaps the whole vector out under
//! the lock, so producers never wait on the consumer's processing.

use crate::log_entry::{LogEntry, Severity};
use std::sync::{Arc, Mutex, MutexGuard};

/// Consumer side of the queue
#[derive(Debug, Clone, Default)]
pub struct IngestQueue {
    pending: Arc<Mutex<Vec<LogEntry>>>,
}

impl IngestQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Producer handle sharing this queue's storage
    pub fn sink(&self) -> LogSink {
        LogSink {
            pending: Arc::clone(&self.pending),
        }
    }

    /// Queue an entry. Never blocks on the consumer and never fails.
    pub fn submit(&self, entry: LogEntry) {
        lock(&self.pending).push(entry);
    }

    /// Take every entry submitted since the previous drain, in FIFO order
    pub fn drain_all(&self) -> Vec<LogEntry> {
        std::mem::take(&mut *lock(&self.pending))
    }

    pub fn len(&self) -> usize {
        lock(&self.pending).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Producer side of the queue
///
/// Cheap to clone and `Send + Sync`, so it can be handed to logger backends
/// and worker threads.
#[derive(Debug, Clone)]
pub struct LogSink {
    pending: Arc<Mutex<Vec<LogEntry>>>,
}

impl LogSink {
    pub fn submit(&self, entry: LogEntry) {
        lock(&self.pending).push(entry);
    }

    /// Queue an entry with an optional stack trace and an initial repeat count
    pub fn log(
        &self,
        message: impl Into<String>,
        severity: Severity,
        stack_trace: Option<String>,
        count: usize,
    ) {
        let mut entry = LogEntry::new(message, severity).with_count(count);
        entry.stack_trace = stack_trace;
        self.submit(entry);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.submit(LogEntry::new(message, Severity::Info));
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.submit(LogEntry::new(message, Severity::Warning));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.submit(LogEntry::new(message, Severity::Error));
    }
}

/// A panicking producer must not wedge the console, so poisoning is ignored.
fn lock(pending: &Mutex<Vec<LogEntry>>) -> MutexGuard<'_, Vec<LogEntry>> {
    pending
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::thread;

    #[test]
    fn test_drain_returns_fifo_and_empties_queue() {
        let queue = IngestQueue::new();
        let sink = queue.sink();
        sink.info("one");
        sink.warning("two");
        queue.submit(LogEntry::new("three", Severity::Error));

        let drained: Vec<String> = queue.drain_all().into_iter().map(|e| e.message).collect();
        assert_eq!(drained, vec!["one", "two", "three"]);
        assert!(queue.is_empty());
        assert!(queue.drain_all().is_empty());
    }

    #[test]
    fn test_log_carries_count_and_stack_trace() {
        let queue = IngestQueue::new();
        queue
            .sink()
            .log("boom", Severity::Exception, Some("at frame".to_string()), 3);

        let entry = &queue.drain_all()[0];
        assert_eq!(entry.repeat_count, 3);
        assert_eq!(entry.severity, Severity::Exception);
        assert_eq!(entry.stack_trace.as_deref(), Some("at frame"));
    }

    #[test]
    fn test_concurrent_producers_lose_nothing() {
        let queue = IngestQueue::new();
        let producers: Vec<_> = (0..3)
            .map(|producer| {
                let sink = queue.sink();
                thread::spawn(move || {
                    for i in 0..1_000 {
                        sink.info(format!("{}:{}", producer, i));
                    }
                })
            })
            .collect();

        // Drain while producers are still running
        let mut drained = Vec::new();
        while producers.iter().any(|p| !p.is_finished()) {
            drained.extend(queue.drain_all());
        }
        for producer in producers {
            producer.join().unwrap();
        }
        drained.extend(queue.drain_all());

        assert_eq!(drained.len(), 3_000);
        let unique: HashSet<&str> = drained.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(unique.len(), 3_000);

        // Per-producer order is preserved
        for producer in 0..3 {
            let sequence: Vec<usize> = drained
                .iter()
                .filter_map(|e| e.message.split_once(':'))
                .filter(|(p, _)| p.parse::<usize>().ok() == Some(producer))
                .filter_map(|(_, i)| i.parse().ok())
                .collect();
            assert_eq!(sequence, (0..1_000).collect::<Vec<_>>());
        }
    }
}
