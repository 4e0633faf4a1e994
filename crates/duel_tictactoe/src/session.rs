//! Tic-tac-toe session: board, turn, and status owned by the caller.

use crate::rules::{check_winner, is_draw};
use duel_core::{
    Board, Cell, Coordinates, GameResponse, GameSession, MoveError, NEXT_MOVE_MESSAGE, Outcome,
    Player, Status, WAITING_MESSAGE, rejection_message,
};
use tracing::{debug, info, instrument, warn};

/// Side length of the grid.
pub const SIZE: usize = 3;

/// A tic-tac-toe game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicTacToeSession {
    board: Board,
    next_player: Player,
    outcome: Option<Outcome>,
}

impl TicTacToeSession {
    /// Creates a session at the starting position.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(SIZE, SIZE),
            next_player: Player::One,
            outcome: None,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn next_player(&self) -> Player {
        self.next_player
    }

    /// Returns the outcome once the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Places `player`'s mark, validating bounds and occupancy first.
    fn place(&mut self, player: Player, at: Coordinates) -> Result<Option<Outcome>, MoveError> {
        if self.outcome.is_some() {
            return Err(MoveError::GameOver);
        }
        match self.board.get(at) {
            None => return Err(MoveError::OutOfBounds),
            Some(Cell::Occupied(_)) => return Err(MoveError::CellOccupied),
            Some(Cell::Empty) => {}
        }

        self.board.set(at, Cell::Occupied(player))?;

        if let Some(winner) = check_winner(&self.board) {
            self.next_player = player;
            return Ok(Some(Outcome::Winner(winner)));
        }
        if is_draw(&self.board) {
            self.next_player = player;
            return Ok(Some(Outcome::Draw));
        }

        self.next_player = player.opponent();
        Ok(None)
    }

    fn respond(&self, message: String, status: Status) -> GameResponse {
        GameResponse::new(
            self.board.clone(),
            self.next_player,
            None,
            None,
            message,
            status,
            self.outcome.is_some(),
        )
    }
}

impl Default for TicTacToeSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession for TicTacToeSession {
    fn title(&self) -> &'static str {
        "Tic-Tac-Toe"
    }

    fn width(&self) -> usize {
        SIZE
    }

    fn height(&self) -> usize {
        SIZE
    }

    #[instrument(skip(self))]
    fn init(&mut self) -> GameResponse {
        *self = Self::new();
        info!("Tic-tac-toe session initialised");
        self.respond(WAITING_MESSAGE.to_string(), Status::Waiting)
    }

    #[instrument(skip(self), fields(next_player = %self.next_player))]
    fn apply_move(&mut self, player: Player, at: Coordinates) -> GameResponse {
        match self.place(player, at) {
            Ok(None) => {
                debug!(%player, %at, "Mark placed");
                self.respond(NEXT_MOVE_MESSAGE.to_string(), Status::Continue)
            }
            Ok(Some(outcome)) => {
                self.outcome = Some(outcome);
                info!(%outcome, "Game over");
                let message = match outcome {
                    Outcome::Winner(winner) => format!("Winner: {}.", winner),
                    Outcome::Draw => "Tie. Game over.".to_string(),
                };
                self.respond(message, Status::Finished(outcome))
            }
            Err(error) => {
                warn!(%player, %at, %error, "Move rejected");
                self.respond(
                    rejection_message(error, self.next_player),
                    Status::Rejected(error),
                )
            }
        }
    }
}
