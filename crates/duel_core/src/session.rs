//! Session trait implemented by every game.

use crate::{Coordinates, GameResponse, Player};

/// A game in progress, owned by the caller.
///
/// Each call returns a fresh [`GameResponse`]. A refused move leaves the
/// session exactly as it was.
pub trait GameSession {
    /// Display name of the game.
    fn title(&self) -> &'static str;

    /// Number of columns.
    fn width(&self) -> usize;

    /// Number of rows.
    fn height(&self) -> usize;

    /// Resets to the starting position.
    fn init(&mut self) -> GameResponse;

    /// Plays `player` at `at`.
    fn apply_move(&mut self, player: Player, at: Coordinates) -> GameResponse;
}
