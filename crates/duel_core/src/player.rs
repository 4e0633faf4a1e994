//! Players and game outcomes.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the two players sharing the board.
///
/// Serialized as its numeric id (1 or 2), which is also the value its
/// discs or marks take in a board snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Player {
    /// Player 1 (moves first).
    One,
    /// Player 2.
    Two,
}

impl Player {
    /// Both players in turn order.
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Numeric id of the player (1 or 2).
    pub fn id(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// Looks a player up by numeric id.
    #[instrument]
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Player::One),
            2 => Some(Player::Two),
            _ => None,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl From<Player> for u8 {
    fn from(player: Player) -> Self {
        player.id()
    }
}

impl TryFrom<u8> for Player {
    type Error = String;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Player::from_id(id).ok_or_else(|| format!("Unknown player id {}", id))
    }
}

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player won the game.
    Winner(Player),
    /// Game ended in a draw.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_alternates() {
        assert_eq!(Player::One.opponent(), Player::Two);
        assert_eq!(Player::Two.opponent().opponent(), Player::Two);
    }

    #[test]
    fn test_ids() {
        assert_eq!(Player::from_id(1), Some(Player::One));
        assert_eq!(Player::from_id(2), Some(Player::Two));
        assert_eq!(Player::from_id(0), None);
        assert_eq!(Player::Two.to_string(), "2");
    }

    #[test]
    fn test_outcome_winner() {
        assert_eq!(Outcome::Winner(Player::Two).winner(), Some(Player::Two));
        assert!(Outcome::Draw.is_draw());
        assert_eq!(Outcome::Draw.winner(), None);
    }
}
