//! Game configuration loaded from a TOML file.

use derive_getters::Getters;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tileslide_core::{
    SessionSettings, DEFAULT_MOVE_BUDGET, DEFAULT_PLAYER_NAME, DEFAULT_PUZZLE_FILE,
    DEFAULT_SWAP_COUNT,
};
use tracing::{debug, info, instrument};

/// Configuration for one game installation.
///
/// Every field has a default, so a missing file or a partial one is fine;
/// the paths default to the layout the game ships with.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Name recorded against winning scores.
    #[serde(default = "default_player_name")]
    player_name: String,

    /// Moves allowed before the game is lost.
    #[serde(default = "default_move_budget")]
    move_budget: u32,

    /// Blank moves per scramble.
    #[serde(default = "default_shuffle_swaps")]
    shuffle_swaps: usize,

    /// Puzzle file installed at startup.
    #[serde(default = "default_puzzle_file")]
    default_puzzle: String,

    /// Directory scanned for `.puz` files.
    #[serde(default = "default_puzzle_dir")]
    puzzle_dir: PathBuf,

    /// Directory image paths inside puzzle files resolve against.
    #[serde(default = "default_asset_base")]
    asset_base: PathBuf,

    /// File the leaderboard persists to.
    #[serde(default = "default_leaderboard_file")]
    leaderboard_file: PathBuf,
}

#[instrument]
fn default_player_name() -> String {
    DEFAULT_PLAYER_NAME.to_string()
}

#[instrument]
fn default_move_budget() -> u32 {
    DEFAULT_MOVE_BUDGET
}

#[instrument]
fn default_shuffle_swaps() -> usize {
    DEFAULT_SWAP_COUNT
}

#[instrument]
fn default_puzzle_file() -> String {
    DEFAULT_PUZZLE_FILE.to_string()
}

#[instrument]
fn default_puzzle_dir() -> PathBuf {
    PathBuf::from("Puzzles")
}

#[instrument]
fn default_asset_base() -> PathBuf {
    PathBuf::from(".")
}

#[instrument]
fn default_leaderboard_file() -> PathBuf {
    PathBuf::from("Logs/leaderboard.log")
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(player = %config.player_name, "Config loaded successfully");
        Ok(config)
    }

    /// Loads configuration from `path`, falling back to defaults when the
    /// file does not exist.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Builds session settings from this configuration.
    #[instrument(skip(self))]
    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings::new(
            self.player_name.clone(),
            self.move_budget,
            self.shuffle_swaps,
            self.default_puzzle.clone(),
        )
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_name: default_player_name(),
            move_budget: default_move_budget(),
            shuffle_swaps: default_shuffle_swaps(),
            default_puzzle: default_puzzle_file(),
            puzzle_dir: default_puzzle_dir(),
            asset_base: default_asset_base(),
            leaderboard_file: default_leaderboard_file(),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl std::error::Error for ConfigError {}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message,
            line: location.line(),
            file: location.file(),
        }
    }
}
