//! Othello (reversi) on an 8×8 board.
//!
//! Legal moves are found by scanning the frontier (empty cells next to a
//! disc) and casting rays in the eight compass directions from each
//! candidate. A move must bracket at least one run of opponent discs.

pub mod direction;
pub mod frontier;
pub mod moves;
pub mod ray;
mod session;

pub use session::{OthelloSession, SIZE, STARTING_GRID};
