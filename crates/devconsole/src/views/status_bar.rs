use crate::sim::WorldSummary;
use crate::theme::Theme;
use crate::view_models::status_bar_view_model::StatusBarViewModel;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the world overview filling the screen
pub fn render(world: &WorldSummary, toggle_key: char, theme: &Theme, area: Rect, f: &mut Frame) {
    let vm = StatusBarViewModel::new(world);

    let mut lines: Vec<Line> = Vec::new();
    if vm.idle() {
        lines.push(Line::from(Span::styled("No game running.", theme.muted())));
    } else {
        lines.extend(
            vm.bomb_lines()
                .into_iter()
                .map(|text| Line::from(Span::styled(text, theme.text()))),
        );
        lines.push(Line::from(Span::styled(vm.focus_line(), theme.text())));
    }
    lines.push(Line::from(Span::styled(vm.leaderboard_line(), theme.muted())));
    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled(format!("{} ", toggle_key), theme.key_hint()),
        Span::styled("console  ", theme.muted()),
        Span::styled("g ", theme.key_hint()),
        Span::styled("start  ", theme.muted()),
        Span::styled("e ", theme.key_hint()),
        Span::styled("end  ", theme.muted()),
        Span::styled("h ", theme.key_hint()),
        Span::styled("hold  ", theme.muted()),
        Span::styled("Tab ", theme.key_hint()),
        Span::styled("focus  ", theme.muted()),
        Span::styled("q ", theme.key_hint()),
        Span::styled("quit", theme.muted()),
    ]));

    let block = Block::default()
        .title(" Simulated Host ")
        .borders(Borders::ALL)
        .border_style(theme.panel_border())
        .title_style(theme.panel_title());

    f.render_widget(
        Paragraph::new(lines)
            .block(block)
            .style(ratatui::style::Style::default().bg(theme.bg_primary)),
        area,
    );
}
