//! Pure tic-tac-toe game logic.
//!
//! A 3×3 grid, two players, three in a row wins and a full board without
//! a line is a tie. [`TicTacToeSession`] implements
//! [`GameSession`](duel_core::GameSession).

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod rules;
mod session;

pub use session::{SIZE, TicTacToeSession};
