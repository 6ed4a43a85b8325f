//! Developer console core
//!
//! An in-process command console for a host application: a command registry
//! with two tiers, a multi-producer log pipeline with deduplication and
//! bounded retention, and input history navigation. Everything the console
//! does to the host goes through the capability traits in [`host`].

pub mod arguments;
pub mod commands;
pub mod console;
pub mod context;
pub mod dispatcher;
pub mod error;
pub mod history;
pub mod host;
pub mod ingest_queue;
pub mod log_buffer;
pub mod log_entry;
pub mod registry;
pub mod session;

pub use console::{Console, ConsoleOptions};
pub use context::{CommandContext, ShellRequest};
pub use dispatcher::Dispatched;
pub use error::{CommandError, CommandResult, HostError, RegistryError};
pub use history::InputHistory;
pub use host::{
    BombAccessor, BombId, ChatBridge, HostServices, LeaderboardControl, ModuleForceSolve,
    ModuleId, ModuleInfo, ModuleKind, TaskHandle, TaskRunner,
};
pub use ingest_queue::{IngestQueue, LogSink};
pub use log_buffer::LogBuffer;
pub use log_entry::{LogEntry, Severity, MAX_MESSAGE_LENGTH};
pub use registry::{CommandDescriptor, CommandRegistry, Tier};
pub use session::{GameState, Session};
