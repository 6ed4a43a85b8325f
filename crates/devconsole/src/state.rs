//! Application state

use devconsole_config::{ConsoleConfig, SeverityFilters};
use devconsole_core::{LogEntry, Severity};
use std::sync::Arc;

use crate::sim::WorldSummary;

#[derive(Debug, Clone)]
pub struct AppState {
    pub running: bool,
    pub console: ConsoleState,
    pub world: WorldSummary,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            running: true,
            console: ConsoleState::default(),
            world: WorldSummary::default(),
        }
    }
}

impl AppState {
    pub fn from_config(config: &ConsoleConfig) -> Self {
        Self {
            console: ConsoleState::from_config(config),
            ..Self::default()
        }
    }
}

/// Which severities the log view shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeverityFilter {
    enabled: [bool; 5],
}

impl Default for SeverityFilter {
    fn default() -> Self {
        SeverityFilters::default().into()
    }
}

impl From<SeverityFilters> for SeverityFilter {
    fn from(filters: SeverityFilters) -> Self {
        Self {
            enabled: [
                filters.info,
                filters.warning,
                filters.error,
                filters.exception,
                filters.assert,
            ],
        }
    }
}

impl SeverityFilter {
    pub fn is_enabled(&self, severity: Severity) -> bool {
        self.enabled[index(severity)]
    }

    pub fn toggle(&mut self, severity: Severity) {
        let slot = &mut self.enabled[index(severity)];
        *slot = !*slot;
    }
}

fn index(severity: Severity) -> usize {
    Severity::ALL
        .iter()
        .position(|s| *s == severity)
        .unwrap_or_default()
}

/// Console surface state
#[derive(Debug, Clone)]
pub struct ConsoleState {
    pub visible: bool,
    /// Current input line
    pub input: String,
    /// Snapshot of the log buffer, oldest first
    pub entries: Arc<Vec<LogEntry>>,
    pub filter: SeverityFilter,
    /// Show repeated entries once with a count badge
    pub collapse: bool,
    /// Scroll offset in rendered lines (0 = bottom/newest)
    pub scroll_offset: usize,
    /// Log area height, for scroll bounds
    pub visible_height: usize,
    pub toggle_key: char,
}

impl Default for ConsoleState {
    fn default() -> Self {
        Self::from_config(&ConsoleConfig::default())
    }
}

impl ConsoleState {
    pub fn from_config(config: &ConsoleConfig) -> Self {
        Self {
            visible: config.open_on_start,
            input: String::new(),
            entries: Arc::new(Vec::new()),
            filter: config.filters.into(),
            collapse: config.collapse,
            scroll_offset: 0,
            visible_height: 0,
            toggle_key: config.toggle_char(),
        }
    }

    /// Entries passing the severity filter
    pub fn filtered(&self) -> impl DoubleEndedIterator<Item = &LogEntry> + '_ {
        self.entries
            .iter()
            .filter(|entry| self.filter.is_enabled(entry.severity))
    }

    /// Number of rendered lines given the filter and collapse mode
    pub fn line_count(&self) -> usize {
        if self.collapse {
            self.filtered().count()
        } else {
            self.filtered()
                .fold(0usize, |total, entry| total.saturating_add(entry.repeat_count))
        }
    }

    pub fn max_scroll(&self) -> usize {
        self.line_count().saturating_sub(self.visible_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(entries: Vec<LogEntry>) -> ConsoleState {
        ConsoleState {
            entries: Arc::new(entries),
            ..ConsoleState::default()
        }
    }

    #[test]
    fn test_filter_defaults_follow_config() {
        let filter = SeverityFilter::default();
        assert!(filter.is_enabled(Severity::Info));
        assert!(filter.is_enabled(Severity::Error));
        assert!(!filter.is_enabled(Severity::Assert));
    }

    #[test]
    fn test_filter_toggle() {
        let mut filter = SeverityFilter::default();
        filter.toggle(Severity::Warning);
        assert!(!filter.is_enabled(Severity::Warning));
        filter.toggle(Severity::Warning);
        assert!(filter.is_enabled(Severity::Warning));
    }

    #[test]
    fn test_line_count_depends_on_collapse() {
        let mut state = state_with(vec![
            LogEntry::new("a", Severity::Info).with_count(3),
            LogEntry::new("b", Severity::Warning),
            LogEntry::new("hidden", Severity::Exception),
        ]);
        assert_eq!(state.line_count(), 4);

        state.collapse = true;
        assert_eq!(state.line_count(), 2);
    }

    #[test]
    fn test_line_count_saturates() {
        let state = state_with(vec![
            LogEntry::new("big", Severity::Info).with_count(usize::MAX),
            LogEntry::new("next", Severity::Info),
        ]);
        assert_eq!(state.line_count(), usize::MAX);
        assert_eq!(state.max_scroll(), usize::MAX);
    }
}
