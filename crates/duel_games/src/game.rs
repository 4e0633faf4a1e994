//! The games on offer and how their players are drawn.

use duel_core::{Cell, Coordinates, Player};
use strum::{Display, EnumIter};

/// A game the front-end can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum GameKind {
    /// Three in a row on a 3×3 grid.
    #[strum(to_string = "Tic-Tac-Toe")]
    TicTacToe,
    /// Reversi on an 8×8 board.
    #[strum(to_string = "Othello")]
    Othello,
}

impl GameKind {
    /// Signs used when the settings file names none.
    pub fn default_signs(self) -> Signs {
        match self {
            GameKind::TicTacToe => Signs::new("X", "O"),
            GameKind::Othello => Signs::new("○", "●"),
        }
    }

    /// Where the cursor starts on a fresh board.
    pub fn start_cursor(self) -> Coordinates {
        match self {
            GameKind::TicTacToe => Coordinates::new(1, 1),
            GameKind::Othello => Coordinates::new(3, 3),
        }
    }
}

/// Symbols drawn for each player's marks or discs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signs {
    player_one: String,
    player_two: String,
}

impl Signs {
    /// Creates a sign pair.
    pub fn new(player_one: impl Into<String>, player_two: impl Into<String>) -> Self {
        Self {
            player_one: player_one.into(),
            player_two: player_two.into(),
        }
    }

    /// Sign of a player.
    pub fn of(&self, player: Player) -> &str {
        match player {
            Player::One => &self.player_one,
            Player::Two => &self.player_two,
        }
    }

    /// Sign drawn in a cell, a blank for an empty one.
    pub fn cell(&self, cell: Cell) -> &str {
        cell.owner().map_or(" ", |player| self.of(player))
    }

    /// Rewrites player ids in an engine message as signs.
    ///
    /// `"Error: ... Player 1 move again."` becomes `"Error: ... Player X move again."`.
    pub fn label(&self, message: &str) -> String {
        let mut labelled = message.to_string();
        for player in Player::ALL {
            for prefix in ["Player ", "player ", "Winner: "] {
                labelled = labelled.replace(
                    &format!("{}{}", prefix, player),
                    &format!("{}{}", prefix, self.of(player)),
                );
            }
        }
        labelled
    }
}
