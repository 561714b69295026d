//! Front end configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Configuration for the terminal front end.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct UiConfig {
    /// Path of the log file.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Show the key hint line under the board.
    #[serde(default = "default_show_help")]
    show_help: bool,

    /// Draw the grid with plain ASCII instead of box-drawing characters.
    #[serde(default)]
    ascii_borders: bool,
}

#[instrument]
fn default_log_file() -> PathBuf {
    PathBuf::from("noughts.log")
}

#[instrument]
fn default_show_help() -> bool {
    true
}

impl UiConfig {
    /// Creates a configuration from explicit settings.
    #[instrument(skip(log_file), fields(log_file = %log_file.display()))]
    pub fn new(log_file: PathBuf, show_help: bool, ascii_borders: bool) -> Self {
        Self {
            log_file,
            show_help,
            ascii_borders,
        }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(log_file = %config.log_file.display(), "Config loaded successfully");
        Ok(config)
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            show_help: default_show_help(),
            ascii_borders: false,
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
