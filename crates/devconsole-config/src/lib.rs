//! Configuration and file management for devconsole
//!
//! This crate provides:
//! - File path utilities for config, cache and log files
//! - Configuration file loading (TOML)
//! - Console configuration (ConsoleConfig)

pub mod config_file;
pub mod console_config;
pub mod paths;

pub use config_file::load_config_file;
pub use console_config::{ConsoleConfig, SeverityFilters};
