//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

use crate::session::{DEFAULT_NAME_CHAR_LIMIT, SessionSettings};

/// Configuration for the terminal game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Name shown for X when left blank.
    player_x_placeholder: String,

    /// Name shown for O when left blank.
    player_o_placeholder: String,

    /// Maximum length of a player name.
    name_char_limit: usize,

    /// File that receives log output while the terminal is in use.
    log_file: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        let settings = SessionSettings::default();
        Self {
            player_x_placeholder: settings.player_x_placeholder,
            player_o_placeholder: settings.player_o_placeholder,
            name_char_limit: DEFAULT_NAME_CHAR_LIMIT,
            log_file: PathBuf::from("tictactoe_tui.log"),
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        if config.name_char_limit == 0 {
            return Err(ConfigError::new("name_char_limit must be at least 1"));
        }

        info!(log_file = %config.log_file.display(), "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Returns the configuration with a different log file.
    pub fn with_log_file(mut self, log_file: PathBuf) -> Self {
        self.log_file = log_file;
        self
    }

    /// Session defaults derived from this configuration.
    #[instrument(skip(self))]
    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            player_x_placeholder: self.player_x_placeholder.clone(),
            player_o_placeholder: self.player_o_placeholder.clone(),
            name_char_limit: self.name_char_limit,
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
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
