//! Ray casting from a candidate cell.
//!
//! A ray walks outward one cell at a time, collecting opponent discs, and
//! stops on the first cell that is off the board, empty, or the mover's own.
//! Only a run closed by an own disc can be flipped.

use crate::direction::Direction;
use duel_core::{Board, Cell, Coordinates, Player};

/// Where a ray stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RayEnd {
    /// Walked off the edge.
    OffBoard,
    /// Reached an empty cell.
    Empty,
    /// Reached a disc of the mover.
    Own,
}

/// Opponent discs passed over and the reason the walk stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ray {
    /// How the walk ended.
    pub end: RayEnd,
    /// Opponent discs between the origin and the stopping cell, nearest first.
    pub run: Vec<Coordinates>,
}

impl Ray {
    /// The run to flip, if it is bracketed by an own disc and not empty.
    pub fn flippable(&self) -> Option<&[Coordinates]> {
        (self.end == RayEnd::Own && !self.run.is_empty()).then_some(self.run.as_slice())
    }
}

/// Walks from `origin` (exclusive) in `direction` on behalf of `player`.
pub fn cast(board: &Board, player: Player, origin: Coordinates, direction: Direction) -> Ray {
    let (dx, dy) = direction.delta();
    let mut run = Vec::new();
    let mut at = origin.offset(dx, dy);

    let end = loop {
        match board.get(at) {
            None => break RayEnd::OffBoard,
            Some(Cell::Empty) => break RayEnd::Empty,
            Some(Cell::Occupied(owner)) if owner == player => break RayEnd::Own,
            Some(Cell::Occupied(_)) => run.push(at),
        }
        at = at.offset(dx, dy);
    };

    Ray { end, run }
}
