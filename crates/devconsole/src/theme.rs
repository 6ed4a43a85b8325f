use devconsole_core::Severity;
use ratatui::{prelude::*, style::palette::tailwind};

/// Application theme - centralized color and style management
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg_primary: Color,
    pub bg_panel: Color,
    pub bg_input: Color,

    // Text colors
    pub text_primary: Color,
    pub text_muted: Color,

    // Accent colors
    pub accent_primary: Color,

    // Severity colors
    pub severity_info: Color,
    pub severity_warning: Color,
    pub severity_error: Color,
    pub severity_exception: Color,
    pub severity_assert: Color,

    pub badge_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            bg_primary: tailwind::SLATE.c950,
            bg_panel: tailwind::SLATE.c900,
            bg_input: tailwind::SLATE.c800,

            text_primary: tailwind::SLATE.c100,
            text_muted: tailwind::SLATE.c400,

            accent_primary: tailwind::CYAN.c400,

            severity_info: tailwind::SLATE.c200,
            severity_warning: tailwind::YELLOW.c400,
            severity_error: tailwind::RED.c400,
            severity_exception: tailwind::ROSE.c500,
            severity_assert: tailwind::PURPLE.c400,

            badge_bg: tailwind::SLATE.c600,
        }
    }

    /// Style for panel backgrounds
    pub fn panel_background(&self) -> Style {
        Style::default().bg(self.bg_panel)
    }

    /// Style for panel borders
    pub fn panel_border(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for panel titles
    pub fn panel_title(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the input line
    pub fn input(&self) -> Style {
        Style::default().fg(self.text_primary).bg(self.bg_input)
    }

    /// Style for key hints (e.g., "F1")
    pub fn key_hint(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Style for a log line of the given severity
    pub fn severity(&self, severity: Severity) -> Style {
        let color = match severity {
            Severity::Info => self.severity_info,
            Severity::Warning => self.severity_warning,
            Severity::Error => self.severity_error,
            Severity::Exception => self.severity_exception,
            Severity::Assert => self.severity_assert,
        };
        Style::default().fg(color)
    }

    /// Style for the repeat-count badge
    pub fn badge(&self) -> Style {
        Style::default()
            .fg(Color::White)
            .bg(self.badge_bg)
            .add_modifier(Modifier::BOLD)
    }
}
