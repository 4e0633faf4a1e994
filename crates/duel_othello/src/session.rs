//! Othello session: board, turn, legal moves and score owned by the caller.

use crate::moves::{available_moves, do_flips};
use duel_core::{
    Board, Cell, Coordinates, GameResponse, GameSession, MoveError, NEXT_MOVE_MESSAGE, Outcome,
    Player, Score, SetupError, Status, WAITING_MESSAGE, rejection_message,
};
use tracing::{debug, info, instrument, warn};

/// Side length of the board.
pub const SIZE: usize = 8;

/// Starting position: the four-disc cross in the centre.
pub const STARTING_GRID: [[u8; SIZE]; SIZE] = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 1, 2, 0, 0, 0],
    [0, 0, 0, 2, 1, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

/// An othello game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OthelloSession {
    board: Board,
    next_player: Player,
    legal_moves: Vec<Coordinates>,
    score: Score,
    outcome: Option<Outcome>,
}

impl OthelloSession {
    /// Creates a session at the starting position.
    #[instrument]
    pub fn new() -> Self {
        let mut session = Self {
            board: Board::new(SIZE, SIZE),
            next_player: Player::One,
            legal_moves: Vec::new(),
            score: Score::default(),
            outcome: None,
        };
        session.reset(starting_board());
        session
    }

    /// Creates a session from a custom position, player 1 to move.
    ///
    /// # Errors
    ///
    /// Fails unless the board is 8×8.
    #[instrument(skip(board))]
    pub fn from_board(board: Board) -> Result<Self, SetupError> {
        let mut session = Self::new();
        session.init_with(board)?;
        Ok(session)
    }

    /// Resets to a custom position, player 1 to move.
    ///
    /// # Errors
    ///
    /// Fails unless the board is 8×8. The session is left untouched then.
    #[instrument(skip(self, board))]
    pub fn init_with(&mut self, board: Board) -> Result<GameResponse, SetupError> {
        if board.width() != SIZE || board.height() != SIZE {
            return Err(SetupError::new(format!(
                "Othello board must be {}x{}, got {}x{}",
                SIZE,
                SIZE,
                board.width(),
                board.height()
            )));
        }
        let status = self.reset(board);
        info!(score = %self.score, "Othello session initialised");
        Ok(self.respond(self.turn_message(status), status))
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn next_player(&self) -> Player {
        self.next_player
    }

    /// Cells the player to move may use, row-major.
    pub fn legal_moves(&self) -> &[Coordinates] {
        &self.legal_moves
    }

    /// Current disc counts.
    pub fn score(&self) -> Score {
        self.score
    }

    /// Returns the outcome once the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    fn reset(&mut self, board: Board) -> Status {
        self.board = board;
        self.outcome = None;
        self.score = Score::tally(&self.board);
        match self.hand_over(Player::One) {
            Status::Continue => Status::Waiting,
            status => status,
        }
    }

    /// Works out who plays next, starting with `to_move`, and stores it.
    ///
    /// When neither player can move the game ends and `next_player` is left
    /// on the player who made the final move.
    fn hand_over(&mut self, to_move: Player) -> Status {
        if let Ok(moves) = available_moves(&self.board, to_move) {
            self.next_player = to_move;
            self.legal_moves = moves;
            return Status::Continue;
        }

        let mover = to_move.opponent();
        if let Ok(moves) = available_moves(&self.board, mover) {
            debug!(skipped = %to_move, %mover, "Turn passes");
            self.next_player = mover;
            self.legal_moves = moves;
            return Status::Passed(to_move);
        }

        let outcome = self
            .score
            .leader()
            .map_or(Outcome::Draw, Outcome::Winner);
        self.next_player = mover;
        self.legal_moves.clear();
        self.outcome = Some(outcome);
        Status::Finished(outcome)
    }

    /// Validates and plays a disc. Leaves the session untouched on error.
    fn place(&mut self, player: Player, at: Coordinates) -> Result<Status, MoveError> {
        if self.outcome.is_some() {
            return Err(MoveError::GameOver);
        }
        if !self.board.contains(at) {
            return Err(MoveError::OutOfBounds);
        }

        // Only the cached moves of the player to move are ever legal.
        if !self.legal_moves.contains(&at) {
            return Err(MoveError::IllegalMove);
        }
        if self.board.get(at) != Some(Cell::Empty) {
            return Err(MoveError::CellOccupied);
        }

        self.board.set(at, Cell::Occupied(player))?;
        do_flips(&mut self.board, player, at)?;
        self.score = Score::tally(&self.board);

        Ok(self.hand_over(player.opponent()))
    }

    fn turn_message(&self, status: Status) -> String {
        match status {
            Status::Passed(skipped) => format!(
                "{} Player {} passes. Player {} move again.",
                MoveError::NoLegalMove,
                skipped,
                self.next_player
            ),
            Status::Finished(Outcome::Winner(winner)) => format!(
                "Game over. We have a Winner. Winner is player {}. {}",
                winner, self.score
            ),
            Status::Finished(Outcome::Draw) => format!("Game over. It's a tie. {}", self.score),
            Status::Rejected(error) => rejection_message(error, self.next_player),
            Status::Waiting => WAITING_MESSAGE.to_string(),
            Status::Continue => NEXT_MOVE_MESSAGE.to_string(),
        }
    }

    fn respond(&self, message: String, status: Status) -> GameResponse {
        GameResponse::new(
            self.board.clone(),
            self.next_player,
            Some(self.legal_moves.clone()),
            Some(self.score),
            message,
            status,
            self.outcome.is_some(),
        )
    }
}

impl Default for OthelloSession {
    fn default() -> Self {
        Self::new()
    }
}

fn starting_board() -> Board {
    Board::from_fn(SIZE, SIZE, |at| match (at.x, at.y) {
        (3, 3) | (4, 4) => Cell::Occupied(Player::One),
        (4, 3) | (3, 4) => Cell::Occupied(Player::Two),
        _ => Cell::Empty,
    })
}

impl GameSession for OthelloSession {
    fn title(&self) -> &'static str {
        "Othello"
    }

    fn width(&self) -> usize {
        SIZE
    }

    fn height(&self) -> usize {
        SIZE
    }

    #[instrument(skip(self))]
    fn init(&mut self) -> GameResponse {
        let status = self.reset(starting_board());
        info!("Othello session initialised");
        self.respond(self.turn_message(status), status)
    }

    #[instrument(skip(self), fields(next_player = %self.next_player))]
    fn apply_move(&mut self, player: Player, at: Coordinates) -> GameResponse {
        match self.place(player, at) {
            Ok(status) => {
                debug!(%player, %at, score = %self.score, "Disc placed");
                if let Status::Finished(outcome) = status {
                    info!(%outcome, score = %self.score, "Game over");
                }
                self.respond(self.turn_message(status), status)
            }
            Err(error) => {
                warn!(%player, %at, %error, "Move rejected");
                let status = Status::Rejected(error);
                self.respond(self.turn_message(status), status)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_has_opening_moves() {
        let session = OthelloSession::new();
        assert_eq!(session.next_player(), Player::One);
        assert_eq!(session.legal_moves().len(), 4);
        assert_eq!(session.score(), Score::new(2, 2));
        assert_eq!(session.outcome(), None);
    }

    #[test]
    fn test_starting_board_matches_grid() {
        let board = starting_board();
        let expected: Vec<Vec<u8>> = STARTING_GRID.iter().map(|row| row.to_vec()).collect();
        assert_eq!(board.rows(), expected);
    }

    #[test]
    fn test_init_with_rejects_wrong_size() {
        let mut session = OthelloSession::new();
        let result = session.init_with(Board::new(3, 3));
        assert!(result.is_err());
        assert_eq!(session, OthelloSession::new());
    }

    #[test]
    fn test_game_over_rejects_further_moves() {
        let mut session = OthelloSession::new();
        session.outcome = Some(Outcome::Draw);
        let response = session.apply_move(Player::One, Coordinates::new(5, 3));
        assert_eq!(*response.status(), Status::Rejected(MoveError::GameOver));
        assert_eq!(response.board().rows()[3], vec![0, 0, 0, 1, 2, 0, 0, 0]);
    }
}
