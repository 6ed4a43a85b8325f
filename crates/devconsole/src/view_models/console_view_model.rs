//! Console View Model

use crate::state::ConsoleState;
use devconsole_core::{LogEntry, Severity};

/// A single rendered log line
#[derive(Debug, Clone, PartialEq)]
pub struct LogLine {
    pub severity: Severity,
    /// `[HH:MM:SS] message`, truncated
    pub text: String,
    /// Repeat badge, only in collapsed mode for repeated entries
    pub badge: Option<usize>,
}

/// View model for the console - handles presentation logic
pub struct ConsoleViewModel<'a> {
    state: &'a ConsoleState,
}

impl<'a> ConsoleViewModel<'a> {
    pub fn new(state: &'a ConsoleState) -> Self {
        Self { state }
    }

    /// The window of lines for the current scroll offset
    ///
    /// Expanded mode repeats an entry `repeat_count` times, collapsed mode
    /// shows it once with a badge. scroll_offset = 0 shows the newest lines.
    /// Entries are walked newest first until the window is full.
    pub fn visible_lines(&self, available_height: usize) -> Vec<LogLine> {
        if available_height == 0 {
            return Vec::new();
        }
        let max_scroll = self.state.line_count().saturating_sub(available_height);
        let mut skip = self.state.scroll_offset.min(max_scroll);

        let mut window = Vec::new();
        for entry in self.state.filtered().rev() {
            let span = if self.state.collapse { 1 } else { entry.repeat_count };
            if skip >= span {
                skip -= span;
                continue;
            }
            let take = (span - skip).min(available_height - window.len());
            skip = 0;

            let text = entry.display_text();
            if self.state.collapse {
                let badge = (entry.repeat_count > 1).then_some(entry.repeat_count);
                window.push(line(entry, text, badge));
            } else {
                window.extend((0..take).map(|_| line(entry, text.clone(), None)));
            }
            if window.len() == available_height {
                break;
            }
        }
        window.reverse();
        window
    }

    pub fn title(&self) -> String {
        let mode = if self.state.collapse { "collapsed" } else { "expanded" };
        if self.state.scroll_offset > 0 {
            format!(" Console ({}) - ↓{} ", mode, self.state.scroll_offset)
        } else {
            format!(" Console ({}) ", mode)
        }
    }

    /// Filter toggles as (key hint, label, enabled)
    pub fn filter_hints(&self) -> Vec<(String, &'static str, bool)> {
        Severity::ALL
            .iter()
            .enumerate()
            .map(|(i, severity)| {
                (
                    format!("F{}", i + 1),
                    severity.label(),
                    self.state.filter.is_enabled(*severity),
                )
            })
            .collect()
    }

    pub fn prompt(&self) -> String {
        format!("> {}", self.state.input)
    }
}

fn line(entry: &LogEntry, text: String, badge: Option<usize>) -> LogLine {
    LogLine {
        severity: entry.severity,
        text,
        badge,
    }
}
