use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use devconsole_core::Severity;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// KeyboardMiddleware - converts raw keyboard events to semantic actions
pub struct KeyboardMiddleware;

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::GlobalKeyPressed(key) = action {
            handle_key_event(key, state, dispatcher);
            // Consume the raw key event (don't pass to reducer)
            return false;
        }

        true
    }
}

/// Handle a key event and dispatch semantic actions
fn handle_key_event(key: &KeyEvent, state: &AppState, dispatcher: &Dispatcher) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        dispatcher.dispatch(Action::GlobalQuit);
        return;
    }
    if key.code == KeyCode::Char(state.console.toggle_key) && !is_command_chord(key) {
        dispatcher.dispatch(Action::ConsoleToggle);
        return;
    }

    if state.console.visible {
        handle_console_key(key, state, dispatcher);
    } else {
        handle_world_key(key, dispatcher);
    }
}

fn handle_console_key(key: &KeyEvent, state: &AppState, dispatcher: &Dispatcher) {
    let page = state.console.visible_height.max(1);
    match key.code {
        KeyCode::Esc => dispatcher.dispatch(Action::ConsoleClose),
        KeyCode::Enter => dispatcher.dispatch(Action::InputSubmit),
        KeyCode::Backspace => dispatcher.dispatch(Action::InputBackspace),
        KeyCode::Up => dispatcher.dispatch(Action::HistoryPrevious),
        KeyCode::Down => dispatcher.dispatch(Action::HistoryNext),
        KeyCode::PageUp => dispatcher.dispatch(Action::ScrollUp(page)),
        KeyCode::PageDown => dispatcher.dispatch(Action::ScrollDown(page)),
        KeyCode::Home => dispatcher.dispatch(Action::ScrollToTop),
        KeyCode::End => dispatcher.dispatch(Action::ScrollToBottom),
        KeyCode::F(6) => dispatcher.dispatch(Action::ToggleCollapse),
        KeyCode::F(n @ 1..=5) => {
            dispatcher.dispatch(Action::ToggleFilter(Severity::ALL[usize::from(n - 1)]));
        }
        KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            dispatcher.dispatch(Action::ClearLog);
        }
        KeyCode::Char(c) if !is_command_chord(key) => {
            dispatcher.dispatch(Action::InputChar(c));
        }
        _ => {
            log::trace!("Unhandled console key: {:?}", key);
        }
    }
}

fn handle_world_key(key: &KeyEvent, dispatcher: &Dispatcher) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => dispatcher.dispatch(Action::GlobalQuit),
        KeyCode::Char('g') => dispatcher.dispatch(Action::StartGame),
        KeyCode::Char('e') => dispatcher.dispatch(Action::EndGame),
        KeyCode::Char('h') => dispatcher.dispatch(Action::ToggleHold),
        KeyCode::Tab => dispatcher.dispatch(Action::CycleFocus),
        _ => {
            log::trace!("Unhandled key: {:?}", key);
        }
    }
}

fn is_command_chord(key: &KeyEvent) -> bool {
    key.modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}
