//! Win detection logic for tic-tac-toe.

use duel_core::{Board, Cell, Coordinates, Player};
use tracing::instrument;

/// The eight winning lines as `(x, y)` triples.
pub const LINES: [[(i32, i32); 3]; 8] = [
    // Rows
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Columns
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(2, 0), (1, 1), (0, 2)],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    for [a, b, c] in LINES {
        let sq = board.get(Coordinates::new(a.0, a.1));
        if let Some(Cell::Occupied(player)) = sq
            && sq == board.get(Coordinates::new(b.0, b.1))
            && sq == board.get(Coordinates::new(c.0, c.1))
        {
            return Some(player);
        }
    }

    None
}
