//! Timeline configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Configuration for a [`Timeline`](crate::Timeline).
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TimelineConfig {
    /// Re-check history invariants after every accepted move.
    #[serde(default = "default_check_invariants")]
    check_invariants: bool,

    /// Label of the history entry for the empty board.
    #[serde(default = "default_start_label")]
    start_label: String,

    /// Prefix of the history entry for move `n`, followed by `n`.
    #[serde(default = "default_move_label")]
    move_label: String,
}

fn default_check_invariants() -> bool {
    true
}

fn default_start_label() -> String {
    "Go to game start".to_string()
}

fn default_move_label() -> String {
    "Go to move #".to_string()
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            check_invariants: default_check_invariants(),
            start_label: default_start_label(),
            move_label: default_move_label(),
        }
    }
}

impl TimelineConfig {
    /// Returns a copy with invariant checking switched on or off.
    pub fn with_check_invariants(mut self, check_invariants: bool) -> Self {
        self.check_invariants = check_invariants;
        self
    }

    /// Parses configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(check_invariants = config.check_invariants, "Config loaded");
        Ok(config)
    }

    /// Label for the history entry at `index`.
    pub fn entry_label(&self, index: usize) -> String {
        if index == 0 {
            self.start_label.clone()
        } else {
            format!("{}{}", self.move_label, index)
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
