//! Session lifecycle
//!
//! A session runs from gameplay start to teardown. It owns the bomb/module
//! snapshot, the leaderboard-disabled flag and any host tasks the console has
//! started, and it is passed to every command handler through the context.

use crate::host::{BombId, HostServices, ModuleId, ModuleInfo, ModuleKind, TaskHandle};
use crate::ingest_queue::LogSink;

/// Lifecycle signal emitted by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Gameplay,
    Setup,
    Quitting,
    PostGame,
}

impl GameState {
    pub fn is_teardown(self) -> bool {
        !matches!(self, Self::Gameplay)
    }
}

/// Session-scoped console state
#[derive(Default)]
pub struct Session {
    awaiting_bombs: bool,
    active: bool,
    bombs: Vec<BombId>,
    modules: Vec<ModuleInfo>,
    leaderboard_disabled: bool,
    tasks: Vec<Box<dyn TaskHandle>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// React to a host lifecycle signal
    pub fn on_state_change(&mut self, state: GameState, host: &mut HostServices) {
        log::debug!("Session state change: {:?}", state);
        if state.is_teardown() {
            self.teardown(host);
        } else {
            self.awaiting_bombs = true;
        }
    }

    /// Called once per tick; snapshots the bombs the first time the host has any
    ///
    /// Returns `true` on the tick the snapshot was taken.
    pub fn poll(&mut self, host: &HostServices) -> bool {
        self.tasks.retain(|task| !task.is_finished());

        if !self.awaiting_bombs {
            return false;
        }
        let bombs = host.bombs.bombs();
        if bombs.is_empty() {
            return false;
        }

        self.modules = host.bombs.modules();
        self.bombs = bombs;
        self.awaiting_bombs = false;
        self.active = true;
        log::info!(
            "Session active with {} bomb(s) and {} module(s)",
            self.bombs.len(),
            self.modules.len()
        );
        true
    }

    /// Bombs are present and snapshotted
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn bombs(&self) -> &[BombId] {
        &self.bombs
    }

    pub fn modules(&self) -> &[ModuleInfo] {
        &self.modules
    }

    pub fn module(&self, id: ModuleId) -> Option<&ModuleInfo> {
        self.modules.iter().find(|m| m.id == id)
    }

    /// Modules on `bomb`, optionally only the solvable ones
    ///
    /// Empty slots and the timer never count as solvable.
    pub fn modules_on(
        &self,
        bomb: BombId,
        solvable_only: bool,
    ) -> impl Iterator<Item = &ModuleInfo> {
        self.modules.iter().filter(move |m| {
            m.bomb == bomb
                && (!solvable_only
                    || (m.solvable && !matches!(m.kind, ModuleKind::Empty | ModuleKind::Timer)))
        })
    }

    pub fn leaderboard_disabled(&self) -> bool {
        self.leaderboard_disabled
    }

    /// Flip the leaderboard-disabled flag on
    ///
    /// Only the first call in a session forwards to the host and warns the
    /// user; later calls return `false` and do nothing.
    pub fn disable_leaderboard(&mut self, host: &mut HostServices, sink: &LogSink) -> bool {
        if self.leaderboard_disabled {
            return false;
        }
        self.leaderboard_disabled = true;
        host.leaderboard.set_disabled(true);
        log::info!("Leaderboard disabled");
        sink.warning("Leaderboard disabled.");
        true
    }

    /// Remember a host task so teardown can cancel it
    pub fn track_task(&mut self, task: Box<dyn TaskHandle>) {
        self.tasks.push(task);
    }

    pub fn running_tasks(&self) -> usize {
        self.tasks.iter().filter(|t| !t.is_finished()).count()
    }

    fn teardown(&mut self, host: &mut HostServices) {
        for task in self.tasks.drain(..) {
            if !task.is_finished() {
                task.cancel();
            }
        }
        self.awaiting_bombs = false;
        self.active = false;
        self.bombs.clear();
        self.modules.clear();
        if self.leaderboard_disabled {
            self.leaderboard_disabled = false;
            host.leaderboard.set_disabled(false);
            log::info!("Leaderboard re-enabled");
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("active", &self.active)
            .field("awaiting_bombs", &self.awaiting_bombs)
            .field("bombs", &self.bombs)
            .field("modules", &self.modules.len())
            .field("leaderboard_disabled", &self.leaderboard_disabled)
            .field("tasks", &self.tasks.len())
            .finish()
    }
}
