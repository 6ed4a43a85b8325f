//! Input History
//!
//! Previously submitted lines, newest first, with a browsing cursor. The text
//! being composed when browsing starts is saved once and handed back when the
//! cursor walks past the newest entry.

/// Submitted-line history with draft restoration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputHistory {
    /// Newest first
    entries: Vec<String>,
    /// `None` = editing live text
    cursor: Option<usize>,
    saved_draft: String,
}

impl InputHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a submitted line and stop browsing
    pub fn record_submission(&mut self, line: impl Into<String>) {
        self.entries.insert(0, line.into());
        self.cursor = None;
        self.saved_draft.clear();
    }

    /// Step back to an older line
    ///
    /// The first step of a browsing session saves `current_live_text` as the
    /// draft. At the oldest entry this is a no-op returning the displayed text.
    pub fn recall_previous(&mut self, current_live_text: &str) -> Option<String> {
        let next = match self.cursor {
            None => {
                if self.entries.is_empty() {
                    return None;
                }
                self.saved_draft = current_live_text.to_string();
                0
            }
            Some(index) if index + 1 >= self.entries.len() => {
                return Some(current_live_text.to_string());
            }
            Some(index) => index + 1,
        };
        self.cursor = Some(next);
        self.entries.get(next).cloned()
    }

    /// Step forward to a newer line, or back to the saved draft
    ///
    /// Returns `None` when not browsing.
    pub fn recall_next(&mut self) -> Option<String> {
        match self.cursor? {
            0 => {
                self.cursor = None;
                Some(std::mem::take(&mut self.saved_draft))
            }
            index => {
                self.cursor = Some(index - 1);
                self.entries.get(index - 1).cloned()
            }
        }
    }

    pub fn is_browsing(&self) -> bool {
        self.cursor.is_some()
    }

    /// Cursor as a signed index, `-1` when not browsing
    pub fn cursor(&self) -> isize {
        self.cursor.map_or(-1, |index| index as isize)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history_of(lines: &[&str]) -> InputHistory {
        let mut history = InputHistory::new();
        for line in lines {
            history.record_submission(*line);
        }
        history
    }

    #[test]
    fn test_round_trip_restores_draft() {
        let mut history = history_of(&["a", "b", "c"]);

        assert_eq!(history.recall_previous("draft").as_deref(), Some("c"));
        assert_eq!(history.recall_previous("c").as_deref(), Some("b"));
        assert_eq!(history.recall_previous("b").as_deref(), Some("a"));
        // Clamped at the oldest entry
        assert_eq!(history.recall_previous("a").as_deref(), Some("a"));
        assert_eq!(history.cursor(), 2);

        assert_eq!(history.recall_next().as_deref(), Some("b"));
        assert_eq!(history.recall_next().as_deref(), Some("c"));
        assert_eq!(history.recall_next().as_deref(), Some("draft"));
        assert!(!history.is_browsing());
        assert_eq!(history.cursor(), -1);
    }

    #[test]
    fn test_draft_is_captured_once_per_session() {
        let mut history = history_of(&["a", "b"]);
        history.recall_previous("original draft");
        history.recall_previous("something else");

        history.recall_next();
        assert_eq!(history.recall_next().as_deref(), Some("original draft"));
    }

    #[test]
    fn test_recall_previous_at_oldest_keeps_edited_text() {
        let mut history = history_of(&["a", "b"]);
        history.recall_previous("draft");
        assert_eq!(history.recall_previous("b").as_deref(), Some("a"));

        assert_eq!(history.recall_previous("a, edited").as_deref(), Some("a, edited"));
        assert_eq!(history.cursor(), 1);
        assert_eq!(history.recall_next().as_deref(), Some("b"));
    }

    #[test]
    fn test_recall_next_when_not_browsing_is_noop() {
        let mut history = history_of(&["a"]);
        assert_eq!(history.recall_next(), None);
        assert_eq!(history.cursor(), -1);
    }

    #[test]
    fn test_recall_previous_on_empty_history() {
        let mut history = InputHistory::new();
        assert_eq!(history.recall_previous("typing"), None);
        assert!(!history.is_browsing());
    }

    #[test]
    fn test_submission_resets_browsing() {
        let mut history = history_of(&["a", "b"]);
        history.recall_previous("draft");
        history.record_submission("c");

        assert!(!history.is_browsing());
        assert_eq!(history.entries(), &["c", "b", "a"]);
        // A new browsing session captures a fresh draft
        assert_eq!(history.recall_previous("new").as_deref(), Some("c"));
        assert_eq!(history.recall_next().as_deref(), Some("new"));
    }
}
