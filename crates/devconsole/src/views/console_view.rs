use crate::state::ConsoleState;
use crate::theme::Theme;
use crate::view_models::console_view_model::ConsoleViewModel;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

/// Share of the screen the console takes when open
const CONSOLE_HEIGHT_PERCENT: u16 = 70;

/// Area the console occupies within `area`
pub fn console_area(area: Rect) -> Rect {
    let height = (area.height * CONSOLE_HEIGHT_PERCENT) / 100;
    Rect {
        height: height.min(area.height),
        ..area
    }
}

/// Rows available for log lines: console minus borders, input and hint rows
pub fn log_height(area: Rect) -> usize {
    console_area(area).height.saturating_sub(4) as usize
}

/// Render the console (Quake-style drop-down)
pub fn render(state: &ConsoleState, theme: &Theme, area: Rect, f: &mut Frame) {
    if !state.visible {
        return;
    }

    let console_area = console_area(area);
    f.render_widget(Clear, console_area);

    let vm = ConsoleViewModel::new(state);
    let block = Block::default()
        .title(vm.title())
        .borders(Borders::ALL)
        .border_style(theme.panel_border())
        .title_style(theme.panel_title())
        .style(theme.panel_background());
    let inner = block.inner(console_area);
    f.render_widget(block, console_area);

    let [log_area, hint_area, input_area] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    let lines: Vec<Line> = vm
        .visible_lines(log_area.height as usize)
        .into_iter()
        .map(|line| {
            let mut spans = Vec::new();
            if let Some(count) = line.badge {
                spans.push(Span::styled(format!(" {} ", count), theme.badge()));
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(line.text, theme.severity(line.severity)));
            Line::from(spans)
        })
        .collect();
    f.render_widget(Paragraph::new(lines), log_area);

    let mut hints = Vec::new();
    for (key, label, enabled) in vm.filter_hints() {
        hints.push(Span::styled(format!("{} ", key), theme.key_hint()));
        let style = if enabled { theme.text() } else { theme.muted() };
        hints.push(Span::styled(format!("{}  ", label), style));
    }
    hints.push(Span::styled("F6 ", theme.key_hint()));
    hints.push(Span::styled("collapse  ", theme.muted()));
    hints.push(Span::styled("^L ", theme.key_hint()));
    hints.push(Span::styled("clear", theme.muted()));
    f.render_widget(Paragraph::new(Line::from(hints)), hint_area);

    f.render_widget(
        Paragraph::new(vm.prompt()).style(theme.input()),
        input_area,
    );
    let cursor_x = input_area.x + (vm.prompt().chars().count() as u16).min(input_area.width);
    f.set_cursor_position((cursor_x, input_area.y));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_height_leaves_room_for_chrome() {
        let area = Rect::new(0, 0, 80, 40);
        assert_eq!(console_area(area).height, 28);
        assert_eq!(log_height(area), 24);
    }
}
