//! Legality, flipping and move generation.

use crate::direction::Direction;
use crate::frontier::frontier;
use crate::ray::cast;
use duel_core::{Board, Cell, Coordinates, MoveError, Player};
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Returns true if a disc of `player` at `at` would flip at least one run.
pub fn could_flip(board: &Board, player: Player, at: Coordinates) -> bool {
    Direction::iter().any(|direction| cast(board, player, at, direction).flippable().is_some())
}

/// All discs a disc of `player` at `at` would flip, over all directions.
pub fn flips(board: &Board, player: Player, at: Coordinates) -> Vec<Coordinates> {
    Direction::iter()
        .filter_map(|direction| {
            cast(board, player, at, direction)
                .flippable()
                .map(<[Coordinates]>::to_vec)
        })
        .flatten()
        .collect()
}

/// Rewrites every bracketed run around `at` to `player`.
///
/// Returns the number of discs flipped.
#[instrument(skip(board))]
pub fn do_flips(board: &mut Board, player: Player, at: Coordinates) -> Result<usize, MoveError> {
    let captured = flips(board, player, at);
    for &cell in &captured {
        board.set(cell, Cell::Occupied(player))?;
    }
    debug!(count = captured.len(), "Discs flipped");
    Ok(captured.len())
}

/// Cells where `player` may legally place a disc, in row-major order.
///
/// # Errors
///
/// Returns [`MoveError::NoLegalMove`] when there are none.
#[instrument(skip(board))]
pub fn available_moves(board: &Board, player: Player) -> Result<Vec<Coordinates>, MoveError> {
    let moves: Vec<Coordinates> = frontier(board)
        .into_iter()
        .filter(|&at| could_flip(board, player, at))
        .collect();

    if moves.is_empty() {
        debug!("No legal moves");
        return Err(MoveError::NoLegalMove);
    }
    Ok(moves)
}
