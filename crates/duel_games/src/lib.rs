//! Duel Games - terminal front-end for two-player board games.
//!
//! Wires the [`duel_tictactoe`] and [`duel_othello`] sessions to a ratatui
//! interface: a game menu, a board view and an arrow-key coordinate prompt.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod game;
pub mod tui;

pub use config::{ConfigError, Settings, SignOverrides};
pub use game::{GameKind, Signs};
