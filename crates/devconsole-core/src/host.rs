//! Host capability interfaces
//!
//! The console never owns game objects. Everything it does to a bomb, a module
//! or the leaderboard goes through these narrow traits, which the composition
//! root implements and injects via [`HostServices`].

use crate::error::HostError;
use std::fmt;

/// Identifier of a bomb, stable for the lifetime of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BombId(pub usize);

impl fmt::Display for BombId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Identifier of a module on some bomb
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModuleId(pub usize);

/// Kind of component occupying a bomb slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleKind {
    Regular,
    Needy,
    Empty,
    Timer,
}

/// Static description of a module, captured once per session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleInfo {
    pub id: ModuleId,
    pub bomb: BombId,
    pub name: String,
    pub kind: ModuleKind,
    pub solvable: bool,
}

/// Access to the bombs of the running session
pub trait BombAccessor: Send {
    /// Bombs currently present; empty until the host has spawned them
    fn bombs(&self) -> Vec<BombId>;
    /// All module slots, across all bombs
    fn modules(&self) -> Vec<ModuleInfo>;

    /// The bomb the player is holding
    fn held_bomb(&self) -> Option<BombId>;
    /// The module the player is looking at
    fn focused_module(&self) -> Option<ModuleId>;

    fn time_remaining(&self, bomb: BombId) -> Result<f64, HostError>;
    fn set_time_remaining(&mut self, bomb: BombId, seconds: f64) -> Result<(), HostError>;

    fn strike_count(&self, bomb: BombId) -> Result<u32, HostError>;
    fn set_strike_count(&mut self, bomb: BombId, strikes: u32) -> Result<(), HostError>;

    fn strike_limit(&self, bomb: BombId) -> Result<u32, HostError>;
    fn set_strike_limit(&mut self, bomb: BombId, limit: u32) -> Result<(), HostError>;

    fn detonate(&mut self, bomb: BombId, reason: &str) -> Result<(), HostError>;
    fn cause_strike(&mut self, bomb: BombId, reason: &str) -> Result<(), HostError>;

    fn is_timer_running(&self, bomb: BombId) -> Result<bool, HostError>;
    fn pause_timer(&mut self, bomb: BombId) -> Result<(), HostError>;
    fn unpause_timer(&mut self, bomb: BombId) -> Result<(), HostError>;

    fn is_solved(&self, module: ModuleId) -> Result<bool, HostError>;
}

/// Forcibly completes a module
pub trait ModuleForceSolve: Send {
    fn force_solve(&mut self, module: ModuleId) -> Result<(), HostError>;
}

/// Ranking/record bookkeeping of the host
pub trait LeaderboardControl: Send {
    fn set_disabled(&mut self, disabled: bool);
}

/// Relay for prefixed chat commands
pub trait ChatBridge: Send {
    fn relay(&mut self, handle: &str, sender_tag: Option<&str>, message: &str)
    -> Result<(), HostError>;
}

/// A multi-tick host action the console started
pub trait TaskHandle: Send {
    fn cancel(&self);
    fn is_finished(&self) -> bool;
}

/// Runs long host-visual effects cooperatively, e.g. turning a bomb over
pub trait TaskRunner: Send {
    fn start_turn(&mut self, bomb: BombId) -> Result<Box<dyn TaskHandle>, HostError>;
}

/// Everything the console needs from the host, injected at startup
pub struct HostServices {
    pub bombs: Box<dyn BombAccessor>,
    pub force_solve: Option<Box<dyn ModuleForceSolve>>,
    pub leaderboard: Box<dyn LeaderboardControl>,
    pub chat: Option<Box<dyn ChatBridge>>,
    pub tasks: Option<Box<dyn TaskRunner>>,
}

impl HostServices {
    pub fn new(bombs: Box<dyn BombAccessor>, leaderboard: Box<dyn LeaderboardControl>) -> Self {
        Self {
            bombs,
            force_solve: None,
            leaderboard,
            chat: None,
            tasks: None,
        }
    }

    pub fn with_force_solve(mut self, force_solve: Box<dyn ModuleForceSolve>) -> Self {
        self.force_solve = Some(force_solve);
        self
    }

    pub fn with_chat(mut self, chat: Box<dyn ChatBridge>) -> Self {
        self.chat = Some(chat);
        self
    }

    pub fn with_tasks(mut self, tasks: Box<dyn TaskRunner>) -> Self {
        self.tasks = Some(tasks);
        self
    }
}

impl fmt::Debug for HostServices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostServices")
            .field("force_solve", &self.force_solve.is_some())
            .field("chat", &self.chat.is_some())
            .field("tasks", &self.tasks.is_some())
            .finish_non_exhaustive()
    }
}
