use devconsole_core::{GameState, LogEntry, Severity};
use ratatui::crossterm::event::KeyEvent;
use std::sync::Arc;

use crate::sim::WorldSummary;

/// Actions flowing through the store
#[derive(Debug, Clone)]
pub enum Action {
    /// Raw key press, translated by the keyboard middleware
    GlobalKeyPressed(KeyEvent),
    GlobalQuit,
    /// One iteration of the UI loop
    Tick,

    // Console surface
    ConsoleToggle,
    ConsoleClose,
    InputChar(char),
    InputBackspace,
    InputClear,
    /// Input line replaced wholesale, e.g. by history recall
    InputReplaced(String),
    InputSubmit,
    HistoryPrevious,
    HistoryNext,
    ToggleFilter(Severity),
    ToggleCollapse,
    ClearLog,
    ScrollUp(usize),
    ScrollDown(usize),
    ScrollToTop,
    ScrollToBottom,
    SetVisibleHeight(usize),
    /// Fresh copy of the console log buffer
    EntriesUpdated(Arc<Vec<LogEntry>>),

    // Simulated host
    StartGame,
    EndGame,
    ToggleHold,
    CycleFocus,
    GameStateChanged(GameState),
    WorldUpdated(WorldSummary),
}

impl Action {
    /// Actions fired every tick or as a consequence of one
    pub fn is_periodic(&self) -> bool {
        matches!(
            self,
            Self::Tick | Self::EntriesUpdated(_) | Self::WorldUpdated(_)
        )
    }
}
