//! Error types shared by the game engines.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Reasons a move is refused.
///
/// All of these are recoverable: a session folds them into a
/// [`GameResponse`](crate::GameResponse) and leaves its state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Error, Serialize, Deserialize)]
pub enum MoveError {
    /// The coordinates lie outside the grid.
    #[display("Move outside the grid. Choose a position inside the grid.")]
    OutOfBounds,

    /// The target cell already holds a mark or disc.
    #[display("Tried writing over another player. Choose another position.")]
    CellOccupied,

    /// The cell is not in the legal-move set (othello).
    #[display("Can't place there.")]
    IllegalMove,

    /// The player has nowhere to move (othello).
    #[display("No available moves.")]
    NoLegalMove,

    /// The game has already finished.
    #[display("The game is over. Start a new game.")]
    GameOver,
}

/// Invalid starting position handed to a session.
#[derive(Debug, Clone, Display, Error)]
#[display("Setup error: {} at {}:{}", message, file, line)]
pub struct SetupError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SetupError {
    /// Creates a new setup error with caller location tracking.
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
