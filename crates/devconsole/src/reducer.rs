use crate::actions::Action;
use crate::state::{AppState, ConsoleState};

/// Reducer - pure function that produces new state from current state + action
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::GlobalQuit => {
            state.running = false;
        }
        Action::WorldUpdated(summary) => {
            state.world = summary.clone();
        }
        _ => {
            state.console = reduce_console(state.console, action);
        }
    }
    state
}

/// Console surface reducer
fn reduce_console(mut state: ConsoleState, action: &Action) -> ConsoleState {
    match action {
        Action::ConsoleToggle => {
            state.visible = !state.visible;
            if state.visible {
                state.scroll_offset = 0;
            }
        }
        Action::ConsoleClose => {
            state.visible = false;
            state.input.clear();
        }
        Action::InputChar(c) => {
            state.input.push(*c);
        }
        Action::InputBackspace => {
            state.input.pop();
        }
        Action::InputClear => {
            state.input.clear();
        }
        Action::InputReplaced(text) => {
            state.input = text.clone();
        }
        Action::ToggleFilter(severity) => {
            state.filter.toggle(*severity);
            state.scroll_offset = state.scroll_offset.min(state.max_scroll());
        }
        Action::ToggleCollapse => {
            state.collapse = !state.collapse;
            state.scroll_offset = state.scroll_offset.min(state.max_scroll());
        }
        Action::ScrollUp(lines) => {
            state.scroll_offset = state
                .scroll_offset
                .saturating_add(*lines)
                .min(state.max_scroll());
        }
        Action::ScrollDown(lines) => {
            state.scroll_offset = state.scroll_offset.saturating_sub(*lines);
        }
        Action::ScrollToTop => {
            state.scroll_offset = state.max_scroll();
        }
        Action::ScrollToBottom => {
            state.scroll_offset = 0;
        }
        Action::SetVisibleHeight(height) => {
            state.visible_height = *height;
            state.scroll_offset = state.scroll_offset.min(state.max_scroll());
        }
        Action::EntriesUpdated(entries) => {
            // Keep the same lines in view while scrolled up; at the bottom
            // the offset stays 0 and the view follows the newest entry
            let before = state.line_count();
            state.entries = entries.clone();
            if state.scroll_offset > 0 {
                let grown = state.line_count().saturating_sub(before);
                state.scroll_offset = state.scroll_offset.saturating_add(grown);
            }
            state.scroll_offset = state.scroll_offset.min(state.max_scroll());
        }
        _ => {}
    }
    state
}
