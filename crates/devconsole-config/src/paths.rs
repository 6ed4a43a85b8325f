//! Configuration and data directory paths
//!
//! Uses XDG directories via `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/devconsole/`, `~/.cache/devconsole/`
//! - macOS: `~/Library/Application Support/devconsole/`, `~/Library/Caches/devconsole/`
//! - Windows: `%APPDATA%\devconsole\`, `%LOCALAPPDATA%\devconsole\`

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use std::path::PathBuf;

const APP_NAME: &str = "devconsole";

/// Get the application config directory, creating it if needed
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create config directory {}", dir.display()))?;
    Ok(dir)
}

/// Get the application cache directory, creating it if needed
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create cache directory {}", dir.display()))?;
    Ok(dir)
}

/// Get path to app config file
pub fn app_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

/// File name of the per-run log, e.g. `devconsole-20240131-142501.log`
pub fn log_file_name(started: DateTime<Local>) -> String {
    format!("{}-{}.log", APP_NAME, started.format("%Y%m%d-%H%M%S"))
}

/// Per-run log file path
///
/// Debug builds log next to the binary's working directory, release builds
/// into the cache directory.
pub fn log_file_path(started: DateTime<Local>) -> Result<PathBuf> {
    let dir = if cfg!(debug_assertions) {
        std::env::current_dir().context("Could not determine current directory")?
    } else {
        cache_dir()?
    };
    Ok(dir.join(log_file_name(started)))
}
