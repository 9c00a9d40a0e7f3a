//! Application configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tictactoe_core::Mark;
use tracing::{debug, info, instrument};

/// Top-level configuration. Every section is optional in the file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Player names.
    players: PlayersConfig,
    /// Glyphs drawn for each mark.
    display: DisplayConfig,
    /// Log destination and filter.
    logging: LoggingConfig,
}

/// Names of the two players.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    /// Player one, plays `X` and moves first.
    one: String,
    /// Player two, plays `O`.
    two: String,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        Self {
            one: "Player 1".to_string(),
            two: "Player 2".to_string(),
        }
    }
}

/// Text drawn in a cell for each mark.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Glyph for `X`.
    x: String,
    /// Glyph for `O`.
    o: String,
}

impl DisplayConfig {
    /// Returns the glyph for a mark.
    pub fn glyph(&self, mark: Mark) -> &str {
        match mark {
            Mark::X => &self.x,
            Mark::O => &self.o,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            x: "X".to_string(),
            o: "O".to_string(),
        }
    }
}

/// Where the terminal UI writes its logs.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log file used while the terminal UI owns the screen.
    file: PathBuf,
    /// `tracing_subscriber` filter directive, overridden by `RUST_LOG`.
    filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("tictactoe.log"),
            filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {e}")))?;
        Self::from_toml(&content)
    }

    /// Parses and validates configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        info!(
            player_one = %config.players.one,
            player_two = %config.players.two,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads `path` if it exists, defaults otherwise.
    #[instrument(skip(path), fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Replaces player names with the ones given on the command line.
    pub fn with_player_names(
        mut self,
        one: Option<String>,
        two: Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(name) = one {
            debug!(%name, "Overriding player one name");
            self.players.one = name;
        }
        if let Some(name) = two {
            debug!(%name, "Overriding player two name");
            self.players.two = name;
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.players.one.trim().is_empty() || self.players.two.trim().is_empty() {
            return Err(ConfigError::new("Player names must not be empty".to_string()));
        }
        if self.display.x.trim().is_empty() || self.display.o.trim().is_empty() {
            return Err(ConfigError::new("Mark glyphs must not be empty".to_string()));
        }
        if self.display.x == self.display.o {
            return Err(ConfigError::new(format!(
                "Both marks use the glyph '{}'",
                self.display.x
            )));
        }
        Ok(())
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
