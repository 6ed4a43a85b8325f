use crate::state::AppState;
use crate::theme::Theme;
use ratatui::{Frame, layout::Rect};

pub mod console_view;
pub mod status_bar;

/// Render the whole screen; the console drops down over the world view
pub fn render(state: &AppState, theme: &Theme, area: Rect, f: &mut Frame) {
    status_bar::render(&state.world, state.console.toggle_key, theme, area, f);
    console_view::render(&state.console, theme, area, f);
}
