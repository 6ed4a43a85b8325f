//! Logging using simplelog
//!
//! Two sinks are combined:
//! - a file logger, one file per run (current directory in debug builds, the
//!   cache directory in release builds)
//! - a console logger that mirrors records at or above the capture level into
//!   the console's ingest queue, from whatever thread they are logged on

use anyhow::{Context, Result};
use devconsole_core::{LogEntry, LogSink, Severity};
use log::{Log, Metadata, Record};
use simplelog::{CombinedLogger, Config, ConfigBuilder, LevelFilter, SharedLogger, WriteLogger};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

/// Handle returned by [`init`], used to attach the console once it exists
#[derive(Clone)]
pub struct LoggerHandle {
    sink: Arc<OnceLock<LogSink>>,
    log_file: PathBuf,
}

impl LoggerHandle {
    /// Start mirroring records into the console
    pub fn attach(&self, sink: LogSink) {
        if self.sink.set(sink).is_err() {
            log::warn!("Console logger already attached");
        }
    }

    pub fn log_file(&self) -> &Path {
        &self.log_file
    }
}

/// Routes log records into the console's ingest queue
pub struct ConsoleLogger {
    level: LevelFilter,
    config: Config,
    sink: Arc<OnceLock<LogSink>>,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter, config: Config, sink: Arc<OnceLock<LogSink>>) -> Box<Self> {
        Box::new(Self {
            level,
            config,
            sink,
        })
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        // Records logged before the console exists are only in the file
        let Some(sink) = self.sink.get() else {
            return;
        };
        sink.submit(to_entry(record));
    }

    fn flush(&self) {}
}

impl SharedLogger for ConsoleLogger {
    fn level(&self) -> LevelFilter {
        self.level
    }

    fn config(&self) -> Option<&Config> {
        Some(&self.config)
    }

    fn as_log(self: Box<Self>) -> Box<dyn Log> {
        Box::new(*self)
    }
}

fn to_entry(record: &Record<'_>) -> LogEntry {
    let severity = Severity::from(record.level());
    let entry = LogEntry::new(record.args().to_string(), severity);
    match (severity, record.module_path(), record.line()) {
        (Severity::Error, Some(module), Some(line)) => {
            entry.with_stack_trace(format!("at {}:{}", module, line))
        }
        _ => entry,
    }
}

/// File logger level from `RUST_LOG`, debug when unset
fn file_level() -> LevelFilter {
    std::env::var("RUST_LOG")
        .map(|v| match v.to_lowercase().as_str() {
            "error" => LevelFilter::Error,
            "warn" => LevelFilter::Warn,
            "info" => LevelFilter::Info,
            "debug" => LevelFilter::Debug,
            "trace" => LevelFilter::Trace,
            _ => LevelFilter::Info,
        })
        .unwrap_or(LevelFilter::Debug)
}

/// Initialize logging
///
/// `capture_level` is the minimum level mirrored into the console.
pub fn init(capture_level: LevelFilter) -> Result<LoggerHandle> {
    let log_file = devconsole_config::paths::log_file_path(chrono::Local::now())?;

    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_time_offset_to_local()
        .unwrap_or_else(|c| c) // Fallback if local time offset fails
        .build();

    let file = File::create(&log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;

    let sink = Arc::new(OnceLock::new());
    CombinedLogger::init(vec![
        WriteLogger::new(file_level(), config.clone(), file),
        ConsoleLogger::new(capture_level, config, Arc::clone(&sink)),
    ])
    .context("Failed to initialize logger")?;

    Ok(LoggerHandle { sink, log_file })
}

#[cfg(test)]
mod tests {
    use super::*;
    use devconsole_core::IngestQueue;

    fn logger(level: LevelFilter) -> (ConsoleLogger, IngestQueue) {
        let queue = IngestQueue::new();
        let sink = Arc::new(OnceLock::new());
        let _ = sink.set(queue.sink());
        (*ConsoleLogger::new(level, Config::default(), sink), queue)
    }

    #[test]
    fn test_records_below_capture_level_are_dropped() {
        let (logger, queue) = logger(LevelFilter::Warn);
        logger.log(
            &Record::builder()
                .level(log::Level::Info)
                .args(format_args!("quiet"))
                .build(),
        );
        assert!(queue.is_empty());
    }

    #[test]
    fn test_records_map_to_severity() {
        let (logger, queue) = logger(LevelFilter::Info);
        for (level, message) in [
            (log::Level::Info, "info"),
            (log::Level::Warn, "warn"),
            (log::Level::Error, "error"),
        ] {
            logger.log(
                &Record::builder()
                    .level(level)
                    .args(format_args!("{}", message))
                    .module_path(Some("devconsole::sim"))
                    .line(Some(7))
                    .build(),
            );
        }

        let entries = queue.drain_all();
        let severities: Vec<Severity> = entries.iter().map(|e| e.severity).collect();
        assert_eq!(
            severities,
            vec![Severity::Info, Severity::Warning, Severity::Error]
        );
        assert_eq!(entries[1].message, "warn");
        assert_eq!(entries[2].stack_trace.as_deref(), Some("at devconsole::sim:7"));
    }

    #[test]
    fn test_command_panic_is_reported_once() {
        use crate::sim::SimHost;
        use devconsole_core::{CommandDescriptor, CommandRegistry, Console, ConsoleOptions, Tier};

        let mut registry = CommandRegistry::new();
        registry
            .register(
                Tier::Standard,
                CommandDescriptor::new("boom", "boom", "Always panics.", |_, _| panic!("kaboom")),
            )
            .unwrap();
        let mut console =
            Console::with_registry(registry, SimHost::new().services(), ConsoleOptions::default());

        // Only test in this binary that installs the global logger
        let sink = Arc::new(OnceLock::new());
        let _ = sink.set(console.sink());
        log::set_boxed_logger(ConsoleLogger::new(LevelFilter::Warn, Config::default(), sink))
            .unwrap();
        log::set_max_level(LevelFilter::Trace);

        console.submit_line("boom");
        console.tick();

        let reports: Vec<&LogEntry> = console
            .buffer()
            .iter()
            .filter(|e| e.message.contains("kaboom"))
            .collect();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].severity, Severity::Error);
        assert_eq!(reports[0].message, "Command failed: kaboom");
    }

    #[test]
    fn test_unattached_logger_drops_records() {
        let logger =
            ConsoleLogger::new(LevelFilter::Trace, Config::default(), Arc::new(OnceLock::new()));
        logger.log(
            &Record::builder()
                .level(log::Level::Error)
                .args(format_args!("nowhere"))
                .build(),
        );
    }
}
