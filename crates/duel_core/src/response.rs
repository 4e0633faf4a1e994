//! Snapshot returned to the front-end after every session call.

use crate::{Board, Coordinates, MoveError, Outcome, Player};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// Disc counts per player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, new)]
pub struct Score {
    /// Cells owned by player 1.
    pub player_one: usize,
    /// Cells owned by player 2.
    pub player_two: usize,
}

impl Score {
    /// Tallies both players on a board.
    pub fn tally(board: &Board) -> Self {
        Self {
            player_one: board.count(Player::One),
            player_two: board.count(Player::Two),
        }
    }

    /// Count for one player.
    pub fn of(&self, player: Player) -> usize {
        match player {
            Player::One => self.player_one,
            Player::Two => self.player_two,
        }
    }

    /// Player with more cells, `None` on equal counts.
    pub fn leader(&self) -> Option<Player> {
        match self.player_one.cmp(&self.player_two) {
            std::cmp::Ordering::Greater => Some(Player::One),
            std::cmp::Ordering::Less => Some(Player::Two),
            std::cmp::Ordering::Equal => None,
        }
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Player 1: {}. Player 2: {}.",
            self.player_one, self.player_two
        )
    }
}

/// What the last session call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// Fresh session, no move made yet.
    Waiting,
    /// Move applied, play continues.
    Continue,
    /// Move refused, nothing changed.
    Rejected(MoveError),
    /// Move applied, the named player had to pass.
    Passed(Player),
    /// Move applied and the game ended.
    Finished(Outcome),
}

/// Immutable snapshot of a session, created fresh by every call.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
pub struct GameResponse {
    /// Board after the call.
    board: Board,
    /// Player to move next.
    next_player: Player,
    /// Cells the next player may use (othello only).
    legal_moves: Option<Vec<Coordinates>>,
    /// Disc counts (othello only).
    score: Option<Score>,
    /// Human-readable status line, displayed verbatim.
    message: String,
    /// Machine-readable status.
    status: Status,
    /// True once no further moves are accepted.
    game_over: bool,
}

impl GameResponse {
    /// Returns true when the call was refused.
    pub fn is_error(&self) -> bool {
        matches!(self.status, Status::Rejected(_))
    }

    /// Returns true when `at` is one of the reported legal moves.
    pub fn is_legal(&self, at: Coordinates) -> bool {
        self.legal_moves
            .as_ref()
            .is_some_and(|moves| moves.contains(&at))
    }

    /// Final outcome, once the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.status {
            Status::Finished(outcome) => Some(outcome),
            _ => None,
        }
    }
}

/// Message shown after a refused move.
pub fn rejection_message(error: MoveError, next_player: Player) -> String {
    format!("Error: {} Player {} move again.", error, next_player)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_leader() {
        assert_eq!(Score::new(10, 54).leader(), Some(Player::Two));
        assert_eq!(Score::new(3, 1).leader(), Some(Player::One));
        assert_eq!(Score::new(32, 32).leader(), None);
        assert_eq!(Score::new(10, 54).to_string(), "Player 1: 10. Player 2: 54.");
    }

    #[test]
    fn test_rejection_message() {
        let msg = rejection_message(MoveError::OutOfBounds, Player::One);
        assert!(msg.contains("Choose a position inside the grid"));
        assert!(msg.ends_with("Player 1 move again."));
    }

    #[test]
    fn test_response_json_shape() {
        let response = GameResponse::new(
            Board::from_rows(&[[1u8, 0], [0, 2]]).unwrap(),
            Player::Two,
            Some(vec![Coordinates::new(1, 0)]),
            Some(Score::new(1, 1)),
            "Next move.".to_string(),
            Status::Continue,
            false,
        );
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["board"], serde_json::json!([[1, 0], [0, 2]]));
        assert_eq!(value["next_player"], serde_json::json!(2));
        assert_eq!(value["legal_moves"], serde_json::json!([{ "x": 1, "y": 0 }]));
        assert!(response.is_legal(Coordinates::new(1, 0)));
        assert!(!response.is_error());
    }
}
