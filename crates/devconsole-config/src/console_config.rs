//! Console configuration
//!
//! Loaded from `.devconsole.toml`; every field falls back to its default.

use anyhow::Context;
use log::LevelFilter;
use serde::{Deserialize, Serialize};

/// Console configuration loaded from .devconsole.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ConsoleConfig {
    /// Key that opens and closes the console
    #[serde(default = "default_toggle_key")]
    pub toggle_key: String,

    /// Open the console right after startup
    #[serde(default)]
    pub open_on_start: bool,

    /// Drop the oldest entries once `max_log_count` is exceeded
    #[serde(default)]
    pub restrict_log_count: bool,

    #[serde(default = "default_max_log_count")]
    pub max_log_count: usize,

    /// Enables experimental commands and the chat prefix
    #[serde(default = "default_debug_mode")]
    pub debug_mode: bool,

    #[serde(default = "default_chat_prefix")]
    pub chat_prefix: char,

    /// Minimum level of internal log records mirrored into the console
    #[serde(default = "default_capture_level")]
    pub capture_level: String,

    /// Start with repeated entries collapsed into one line
    #[serde(default)]
    pub collapse: bool,

    #[serde(default)]
    pub filters: SeverityFilters,
}

/// Which severities are shown initially
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct SeverityFilters {
    pub info: bool,
    pub warning: bool,
    pub error: bool,
    pub exception: bool,
    pub assert: bool,
}

impl Default for SeverityFilters {
    fn default() -> Self {
        Self {
            info: true,
            warning: true,
            error: true,
            exception: false,
            assert: false,
        }
    }
}

fn default_toggle_key() -> String {
    "`".to_string()
}

fn default_max_log_count() -> usize {
    1000
}

fn default_debug_mode() -> bool {
    cfg!(debug_assertions)
}

fn default_chat_prefix() -> char {
    '!'
}

fn default_capture_level() -> String {
    "warn".to_string()
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            toggle_key: default_toggle_key(),
            open_on_start: false,
            restrict_log_count: false,
            max_log_count: default_max_log_count(),
            debug_mode: default_debug_mode(),
            chat_prefix: default_chat_prefix(),
            capture_level: default_capture_level(),
            collapse: false,
            filters: SeverityFilters::default(),
        }
    }
}

impl ConsoleConfig {
    /// Load config from the first config file found, or use defaults
    ///
    /// A file that fails to parse is returned as an error so the caller can
    /// report it once logging is up.
    pub fn try_load() -> anyhow::Result<Self> {
        Self::from_content(crate::load_config_file().as_deref())
    }

    fn from_content(content: Option<&str>) -> anyhow::Result<Self> {
        let Some(content) = content else {
            log::debug!("Using default console config");
            return Ok(Self::default());
        };
        let config = Self::parse(content).context("Failed to parse config file")?;
        log::info!("Loaded console config from file");
        Ok(config)
    }

    pub fn parse(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Retention capacity, if retention is enabled
    pub fn retention(&self) -> Option<usize> {
        self.restrict_log_count.then_some(self.max_log_count)
    }

    /// `capture_level` as a level filter; unknown names fall back to warn
    pub fn capture_level_filter(&self) -> LevelFilter {
        self.capture_level.parse().unwrap_or(LevelFilter::Warn)
    }

    /// The configured toggle key as a single character
    pub fn toggle_char(&self) -> char {
        self.toggle_key.chars().next().unwrap_or('`')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ConsoleConfig::default();
        assert_eq!(config.toggle_key, "`");
        assert!(!config.open_on_start);
        assert_eq!(config.retention(), None);
        assert_eq!(config.max_log_count, 1000);
        assert_eq!(config.chat_prefix, '!');
        assert_eq!(config.capture_level_filter(), LevelFilter::Warn);
        assert!(config.filters.info);
        assert!(!config.filters.exception);
    }

    #[test]
    fn test_config_deserialize_partial() {
        let toml = r##"
            restrict_log_count = true
            max_log_count = 50
            chat_prefix = "#"

            [filters]
            info = false
        "##;
        let config = ConsoleConfig::parse(toml).unwrap();
        assert_eq!(config.retention(), Some(50));
        assert_eq!(config.chat_prefix, '#');
        assert!(!config.filters.info);
        // Unset filters keep their defaults
        assert!(config.filters.warning);
        assert_eq!(config.toggle_key, "`");
    }

    #[test]
    fn test_missing_config_file_uses_defaults() {
        let config = ConsoleConfig::from_content(None).unwrap();
        assert_eq!(config, ConsoleConfig::default());
    }

    #[test]
    fn test_malformed_config_file_is_reported() {
        let err = ConsoleConfig::from_content(Some("max_log_count = \"many\"")).unwrap_err();
        assert!(format!("{:#}", err).starts_with("Failed to parse config file: "));
    }

    #[test]
    fn test_invalid_capture_level_falls_back() {
        let config = ConsoleConfig::parse("capture_level = \"loud\"").unwrap();
        assert_eq!(config.capture_level_filter(), LevelFilter::Warn);

        let config = ConsoleConfig::parse("capture_level = \"debug\"").unwrap();
        assert_eq!(config.capture_level_filter(), LevelFilter::Debug);
    }

    #[test]
    fn test_parse_error() {
        assert!(ConsoleConfig::parse("max_log_count = \"many\"").is_err());
    }
}
