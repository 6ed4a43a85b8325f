//! Command execution context
//!
//! Handlers get exactly what they are allowed to touch: the log sink, the
//! session, the host capabilities, the buffer (for `clear`) and a read-only view
//! of the registry (for `help`).

use crate::error::CommandError;
use crate::host::{BombId, HostServices, ModuleId};
use crate::ingest_queue::LogSink;
use crate::log_buffer::LogBuffer;
use crate::registry::CommandRegistry;
use crate::session::Session;

/// Requests a command makes of the console surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellRequest {
    /// Hide the console and clear the input line
    Close,
}

pub struct CommandContext<'a> {
    pub log: &'a LogSink,
    pub session: &'a mut Session,
    pub host: &'a mut HostServices,
    pub buffer: &'a mut LogBuffer,
    pub registry: &'a CommandRegistry,
    /// Privileged tier and chat prefix enabled
    pub privileged: bool,
    pub chat_prefix: char,
    pub requests: &'a mut Vec<ShellRequest>,
}

impl CommandContext<'_> {
    /// Fails with `<what>: no bombs are active.` outside an active session
    pub fn require_active(&self, what: &str) -> Result<(), CommandError> {
        if self.session.is_active() {
            Ok(())
        } else {
            Err(CommandError::unmet(format!("{}: no bombs are active.", what)))
        }
    }

    /// The held bomb, or a user-actionable warning
    pub fn require_held(&self, hint: &str) -> Result<BombId, CommandError> {
        self.host
            .bombs
            .held_bomb()
            .ok_or_else(|| CommandError::actionable(hint))
    }

    /// The focused module, or a user-actionable warning
    pub fn require_focused(&self, hint: &str) -> Result<ModuleId, CommandError> {
        self.host
            .bombs
            .focused_module()
            .ok_or_else(|| CommandError::actionable(hint))
    }

    pub fn disable_leaderboard(&mut self) -> bool {
        self.session.disable_leaderboard(self.host, self.log)
    }

    pub fn request(&mut self, request: ShellRequest) {
        self.requests.push(request);
    }

    /// Whether a chat bridge is wired in
    pub fn chat_available(&self) -> bool {
        self.host.chat.is_some()
    }
}
