//! Frontier scan: empty cells touching at least one disc.
//!
//! Every legal move lies on the frontier, so the legality search only has
//! to test these cells. Each cell is compared with four of its neighbours
//! (next column, next row, and the two lower diagonals); because a pair is
//! recorded from whichever side is empty, the four forward checks cover
//! all eight neighbourhoods.

use duel_core::{Board, Cell, Coordinates};
use std::collections::BTreeSet;
use tracing::instrument;

const FORWARD_NEIGHBOURS: [(i32, i32); 4] = [
    (1, 0),  // Next column
    (0, 1),  // Next row
    (1, 1),  // Bottom-right
    (-1, 1), // Bottom-left
];

/// Empty cells adjacent to a disc, in row-major order.
#[instrument(skip(board))]
pub fn frontier(board: &Board) -> Vec<Coordinates> {
    let mut outline = BTreeSet::new();

    for at in board.coordinates() {
        let Some(current) = board.get(at) else {
            continue;
        };
        for (dx, dy) in FORWARD_NEIGHBOURS {
            let neighbour = at.offset(dx, dy);
            let Some(next) = board.get(neighbour) else {
                continue;
            };
            match (current, next) {
                (Cell::Empty, Cell::Occupied(_)) => {
                    outline.insert(at.row_major());
                }
                (Cell::Occupied(_), Cell::Empty) => {
                    outline.insert(neighbour.row_major());
                }
                _ => {}
            }
        }
    }

    outline
        .into_iter()
        .map(|(y, x)| Coordinates::new(x, y))
        .collect()
}
