//! Shared model for two-player grid games.
//!
//! Both engines speak the same vocabulary: a [`Board`] of [`Cell`]s, the two
//! [`Player`]s, [`Coordinates`] for moves, and a [`GameResponse`] snapshot
//! returned by every [`GameSession`] call.
//!
//! # Example
//!
//! ```
//! use duel_core::{Board, Cell, Coordinates, Player};
//!
//! let mut board = Board::new(3, 3);
//! board.set(Coordinates::new(1, 1), Cell::Occupied(Player::One)).unwrap();
//! assert_eq!(board.rows()[1], vec![0, 1, 0]);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod coordinates;
mod error;
mod player;
mod response;
mod session;

pub use board::{Board, Cell};
pub use coordinates::Coordinates;
pub use error::{MoveError, SetupError};
pub use player::{Outcome, Player};
pub use response::{GameResponse, Score, Status, rejection_message};
pub use session::GameSession;

/// Message of a freshly initialised session.
pub const WAITING_MESSAGE: &str = "Waiting for the first move.";

/// Message after a move that lets play continue.
pub const NEXT_MOVE_MESSAGE: &str = "Next move.";
