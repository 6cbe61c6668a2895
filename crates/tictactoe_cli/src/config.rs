//! Play configuration, loaded from an optional TOML file.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_engine::Player;
use tracing::{debug, info, instrument};

/// Settings for an interactive game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayConfig {
    /// Mark played by the human (X moves first).
    #[serde(default = "default_human_mark")]
    human_mark: Player,

    /// Print search counters after each engine move.
    #[serde(default)]
    show_stats: bool,

    /// Print the board before each human move.
    #[serde(default = "default_show_board")]
    show_board_each_turn: bool,
}

fn default_human_mark() -> Player {
    Player::X
}

fn default_show_board() -> bool {
    true
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            human_mark: default_human_mark(),
            show_stats: false,
            show_board_each_turn: default_show_board(),
        }
    }
}

impl PlayConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(human_mark = %config.human_mark, "Config loaded successfully");
        Ok(config)
    }

    /// Overrides the human's mark.
    pub fn with_human_mark(mut self, mark: Player) -> Self {
        self.human_mark = mark;
        self
    }

    /// Overrides whether search counters are printed.
    pub fn with_show_stats(mut self, show: bool) -> Self {
        self.show_stats = show;
        self
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: PlayConfig = toml::from_str("").unwrap();
        assert_eq!(config, PlayConfig::default());
    }

    #[test]
    fn test_partial_file() {
        let config: PlayConfig = toml::from_str("human_mark = \"O\"").unwrap();
        assert_eq!(*config.human_mark(), Player::O);
        assert!(*config.show_board_each_turn());
        assert!(!*config.show_stats());
    }

    #[test]
    fn test_overrides() {
        let config = PlayConfig::default()
            .with_human_mark(Player::O)
            .with_show_stats(true);
        assert_eq!(*config.human_mark(), Player::O);
        assert!(*config.show_stats());
    }
}
