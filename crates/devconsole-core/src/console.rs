//! Console facade
//!
//! Ties the pieces together the way a host's UI tick uses them: producers log
//! through [`LogSink`]s, [`Console::tick`] drains the queue into the buffer,
//! and [`Console::submit_line`] runs a line through the dispatcher.

use crate::commands;
use crate::context::{CommandContext, ShellRequest};
use crate::dispatcher::{self, Dispatched};
use crate::error::RegistryError;
use crate::history::InputHistory;
use crate::host::HostServices;
use crate::ingest_queue::{IngestQueue, LogSink};
use crate::log_buffer::LogBuffer;
use crate::log_entry::{LogEntry, Severity};
use crate::registry::CommandRegistry;
use crate::session::{GameState, Session};

/// Runtime options of a console
#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleOptions {
    /// Enables the privileged tier and the chat prefix
    pub privileged: bool,
    pub chat_prefix: char,
    /// FIFO retention capacity, `None` keeps everything
    pub max_log_count: Option<usize>,
}

impl Default for ConsoleOptions {
    fn default() -> Self {
        Self {
            privileged: false,
            chat_prefix: '!',
            max_log_count: None,
        }
    }
}

#[derive(Debug)]
pub struct Console {
    registry: CommandRegistry,
    queue: IngestQueue,
    sink: LogSink,
    buffer: LogBuffer,
    session: Session,
    host: HostServices,
    history: InputHistory,
    options: ConsoleOptions,
}

impl Console {
    /// Console with the built-in command table
    pub fn new(host: HostServices, options: ConsoleOptions) -> Result<Self, RegistryError> {
        Ok(Self::with_registry(commands::builtin_registry()?, host, options))
    }

    pub fn with_registry(
        registry: CommandRegistry,
        host: HostServices,
        options: ConsoleOptions,
    ) -> Self {
        let queue = IngestQueue::new();
        let sink = queue.sink();
        let buffer = match options.max_log_count {
            Some(max) => LogBuffer::with_retention(max),
            None => LogBuffer::new(),
        };
        log::debug!(
            "Console created with {} command(s), privileged: {}",
            registry.len(),
            options.privileged
        );
        Self {
            registry,
            queue,
            sink,
            buffer,
            session: Session::new(),
            host,
            history: InputHistory::new(),
            options,
        }
    }

    /// A producer handle for other threads
    pub fn sink(&self) -> LogSink {
        self.queue.sink()
    }

    /// Queue a log entry; shows up after the next [`tick`](Self::tick)
    pub fn log(
        &self,
        message: impl Into<String>,
        severity: Severity,
        stack_trace: Option<String>,
        count: usize,
    ) {
        self.sink.log(message, severity, stack_trace, count);
    }

    /// Submit one line of input
    ///
    /// Blank lines are ignored and not recorded in the history.
    pub fn submit_line(&mut self, line: &str) -> Vec<ShellRequest> {
        if line.trim().is_empty() {
            return Vec::new();
        }
        self.history.record_submission(line);
        let (_, requests) = self.execute(line);
        requests
    }

    /// Run a line through the dispatcher without touching the history
    pub fn execute(&mut self, line: &str) -> (Dispatched, Vec<ShellRequest>) {
        let mut requests = Vec::new();
        let mut ctx = CommandContext {
            log: &self.sink,
            session: &mut self.session,
            host: &mut self.host,
            buffer: &mut self.buffer,
            registry: &self.registry,
            privileged: self.options.privileged,
            chat_prefix: self.options.chat_prefix,
            requests: &mut requests,
        };
        let outcome = dispatcher::process(line, &mut ctx);
        (outcome, requests)
    }

    /// One UI tick: poll the session, then move queued entries into the buffer
    ///
    /// Returns the number of entries drained.
    pub fn tick(&mut self) -> usize {
        self.session.poll(&self.host);
        let drained = self.queue.drain_all();
        let count = drained.len();
        self.buffer.extend(drained);
        count
    }

    pub fn on_state_change(&mut self, state: GameState) {
        self.session.on_state_change(state, &mut self.host);
    }

    /// Entries passing `filter`, oldest first
    pub fn visible_entries<F>(&self, filter: F) -> impl Iterator<Item = &LogEntry> + Clone + '_
    where
        F: Fn(Severity) -> bool + Clone + 'static,
    {
        self.buffer.visible(filter)
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    pub fn set_retention(&mut self, max_log_count: Option<usize>) {
        self.options.max_log_count = max_log_count;
        self.buffer.set_retention(max_log_count);
    }

    pub fn set_privileged(&mut self, privileged: bool) {
        self.options.privileged = privileged;
    }

    pub fn buffer(&self) -> &LogBuffer {
        &self.buffer
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn host(&self) -> &HostServices {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut HostServices {
        &mut self.host
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn history(&self) -> &InputHistory {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut InputHistory {
        &mut self.history
    }

    pub fn options(&self) -> &ConsoleOptions {
        &self.options
    }
}
