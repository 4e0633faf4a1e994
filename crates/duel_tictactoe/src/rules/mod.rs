//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](duel_core::Board), kept apart from the
//! session so they can be tested on hand-built positions.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::check_winner;
