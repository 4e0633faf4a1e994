//! Settings loaded from `duel_games.toml`.

use crate::game::{GameKind, Signs};
use derive_getters::Getters;
use duel_core::{Board, Player};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Front-end settings. Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// File the tracing output is written to.
    log_file: PathBuf,

    /// Filter used when `RUST_LOG` is not set.
    log_filter: String,

    /// Tic-tac-toe signs.
    tictactoe: SignOverrides,

    /// Othello signs.
    othello: SignOverrides,
}

/// Player signs for one game, falling back to the game's defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct SignOverrides {
    /// Sign of player 1.
    player_one: Option<String>,
    /// Sign of player 2.
    player_two: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from("duel_games.log"),
            log_filter: "info".to_string(),
            tictactoe: SignOverrides::default(),
            othello: SignOverrides::default(),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read settings file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))?;

        info!(log_file = %settings.log_file.display(), "Settings loaded successfully");
        Ok(settings)
    }

    /// Loads settings from `path`, or the defaults when the file does not exist.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if !path.as_ref().exists() {
            debug!("No settings file, using defaults");
            return Ok(Self::default());
        }
        Self::from_file(path)
    }

    /// Resolved signs for a game.
    pub fn signs(&self, game: GameKind) -> Signs {
        let overrides = match game {
            GameKind::TicTacToe => &self.tictactoe,
            GameKind::Othello => &self.othello,
        };
        let defaults = game.default_signs();
        Signs::new(
            overrides
                .player_one
                .as_deref()
                .unwrap_or(defaults.of(Player::One)),
            overrides
                .player_two
                .as_deref()
                .unwrap_or(defaults.of(Player::Two)),
        )
    }
}

/// Reads a starting board written as JSON rows of 0, 1 and 2.
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn load_start_board(path: impl AsRef<Path>) -> Result<Board, ConfigError> {
    let content = std::fs::read_to_string(path.as_ref())
        .map_err(|e| ConfigError::new(format!("Failed to read board file: {}", e)))?;
    let board: Board = serde_json::from_str(&content)
        .map_err(|e| ConfigError::new(format!("Failed to parse board: {}", e)))?;
    info!(width = board.width(), height = board.height(), "Starting board loaded");
    Ok(board)
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
