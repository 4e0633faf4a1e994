//! Tests for the othello session, driven through the public session API.

use duel_core::{Board, Coordinates, GameSession, MoveError, Outcome, Player, Score, Status};
use duel_othello::{OthelloSession, SIZE, STARTING_GRID};
use std::collections::HashSet;

fn coords(cells: &[(i32, i32)]) -> Vec<Coordinates> {
    cells.iter().map(|&(x, y)| Coordinates::new(x, y)).collect()
}

fn session_from(grid: [[u8; SIZE]; SIZE]) -> OthelloSession {
    OthelloSession::from_board(Board::from_rows(&grid).unwrap()).unwrap()
}

#[test]
fn test_init_gives_starting_cross() {
    let mut session = OthelloSession::new();
    let response = session.init();

    assert_eq!(response.board(), &Board::from_rows(&STARTING_GRID).unwrap());
    assert_eq!(*response.next_player(), Player::One);
    assert_eq!(*response.score(), Some(Score::new(2, 2)));
    assert_eq!(response.message(), "Waiting for the first move.");
    assert_eq!(*response.status(), Status::Waiting);
    assert!(!*response.game_over());
    assert_eq!(
        response.legal_moves().as_deref(),
        Some(&coords(&[(4, 2), (5, 3), (2, 4), (3, 5)])[..])
    );
}

#[test]
fn test_single_move_flips_and_hands_over() {
    let mut session = OthelloSession::new();
    session.init();
    let response = session.apply_move(Player::One, Coordinates::new(5, 3));

    let expected = [
        [0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 1, 1, 1, 0, 0],
        [0, 0, 0, 2, 1, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0],
    ];
    assert_eq!(response.board(), &Board::from_rows(&expected).unwrap());
    assert_eq!(*response.next_player(), Player::Two);
    assert_eq!(
        response.legal_moves().clone(),
        Some(coords(&[(3, 2), (5, 2), (5, 4)]))
    );
    assert_eq!(*response.score(), Some(Score::new(4, 1)));
    assert_eq!(response.message(), "Next move.");
    assert_eq!(*response.status(), Status::Continue);
}

#[test]
fn test_subsequent_move() {
    let mut session = OthelloSession::new();
    let first = session.apply_move(Player::One, Coordinates::new(5, 3));
    let response = session.apply_move(*first.next_player(), Coordinates::new(5, 2));

    let expected = [
        [0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 2, 0, 0],
        [0, 0, 0, 1, 2, 1, 0, 0],
        [0, 0, 0, 2, 1, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0],
    ];
    assert_eq!(response.board(), &Board::from_rows(&expected).unwrap());
    assert_eq!(*response.next_player(), Player::One);
    assert_eq!(
        response.legal_moves().clone(),
        Some(coords(&[(5, 1), (4, 2), (2, 4), (3, 5)]))
    );
}

#[test]
fn test_occupied_cell_is_rejected() {
    let mut session = OthelloSession::new();
    let start = session.init();
    let response = session.apply_move(Player::One, Coordinates::new(3, 3));

    assert_eq!(response.board(), start.board());
    assert_eq!(response.next_player(), start.next_player());
    assert_eq!(response.legal_moves(), start.legal_moves());
    assert!(response.is_error());
    assert_eq!(
        *response.status(),
        Status::Rejected(MoveError::IllegalMove)
    );
    assert_eq!(
        response.message(),
        "Error: Can't place there. Player 1 move again."
    );
}

#[test]
fn test_moves_outside_the_grid_are_rejected() {
    for (x, y) in [(-1, 2), (8, 2), (1, -1), (0, 8)] {
        let mut session = OthelloSession::new();
        let start = session.init();
        let response = session.apply_move(Player::One, Coordinates::new(x, y));

        assert_eq!(response.board(), start.board(), "move ({x}, {y})");
        assert_eq!(response.next_player(), start.next_player());
        assert!(response.message().contains("Choose a position inside the grid"));
        assert!(response.message().contains("Player 1 move again."));
        assert_eq!(
            *response.status(),
            Status::Rejected(MoveError::OutOfBounds)
        );
    }
}

#[test]
fn test_unbracketing_move_is_rejected() {
    let mut session = OthelloSession::new();
    let response = session.apply_move(Player::One, Coordinates::new(2, 2));
    assert_eq!(
        *response.status(),
        Status::Rejected(MoveError::IllegalMove)
    );
    assert_eq!(session.board(), &Board::from_rows(&STARTING_GRID).unwrap());
}

#[test]
fn test_failed_move_is_idempotent() {
    let mut session = OthelloSession::new();
    let first = session.apply_move(Player::One, Coordinates::new(0, 0));
    let second = session.apply_move(Player::One, Coordinates::new(0, 0));
    assert_eq!(first, second);
}

#[test]
fn test_opponent_without_moves_passes() {
    let mut session = session_from([
        [0, 0, 0, 1, 1, 1, 1, 1],
        [0, 0, 0, 1, 1, 1, 1, 1],
        [0, 0, 0, 1, 1, 1, 1, 1],
        [0, 0, 0, 1, 2, 1, 1, 1],
        [0, 0, 0, 2, 0, 1, 1, 1],
        [0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0],
    ]);
    let response = session.apply_move(Player::One, Coordinates::new(4, 4));

    let expected = [
        [0, 0, 0, 1, 1, 1, 1, 1],
        [0, 0, 0, 1, 1, 1, 1, 1],
        [0, 0, 0, 1, 1, 1, 1, 1],
        [0, 0, 0, 1, 1, 1, 1, 1],
        [0, 0, 0, 2, 1, 1, 1, 1],
        [0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0],
    ];
    assert_eq!(response.board(), &Board::from_rows(&expected).unwrap());
    assert_eq!(*response.next_player(), Player::One);
    assert_eq!(*response.status(), Status::Passed(Player::Two));
    assert!(response.message().contains("No available moves."));
    assert!(response.message().contains("Player 1 move again."));
    assert!(!*response.game_over());

    let legal: HashSet<_> = response.legal_moves().clone().unwrap().into_iter().collect();
    let expected: HashSet<_> = coords(&[(2, 4), (3, 5), (2, 5)]).into_iter().collect();
    assert_eq!(legal, expected);
}

#[test]
fn test_last_move_ends_game_with_winner() {
    let mut session = session_from([
        [2, 2, 2, 2, 2, 2, 2, 2],
        [2, 2, 2, 1, 1, 1, 2, 2],
        [2, 2, 1, 2, 2, 1, 2, 2],
        [2, 2, 2, 1, 2, 1, 2, 2],
        [2, 2, 2, 2, 1, 1, 2, 2],
        [2, 2, 2, 1, 1, 1, 2, 2],
        [2, 2, 2, 1, 2, 2, 2, 2],
        [2, 2, 0, 1, 2, 2, 2, 2],
    ]);
    let response = session.apply_move(Player::Two, Coordinates::new(2, 7));

    let expected = [
        [2, 2, 2, 2, 2, 2, 2, 2],
        [2, 2, 2, 1, 1, 1, 2, 2],
        [2, 2, 1, 2, 2, 1, 2, 2],
        [2, 2, 2, 1, 2, 1, 2, 2],
        [2, 2, 2, 2, 1, 2, 2, 2],
        [2, 2, 2, 1, 2, 1, 2, 2],
        [2, 2, 2, 2, 2, 2, 2, 2],
        [2, 2, 2, 2, 2, 2, 2, 2],
    ];
    assert_eq!(response.board(), &Board::from_rows(&expected).unwrap());
    assert!(*response.game_over());
    assert!(response.message().contains("Game over"));
    assert!(response.message().contains("Winner is player 2."));
    assert!(response.message().contains("Player 1: 10. Player 2: 54."));
    assert_eq!(*response.next_player(), Player::Two);
    assert_eq!(response.legal_moves().clone(), Some(Vec::new()));
    assert_eq!(response.outcome(), Some(Outcome::Winner(Player::Two)));
    assert_eq!(session.outcome(), Some(Outcome::Winner(Player::Two)));
}

#[test]
fn test_last_move_ends_game_in_tie() {
    let mut session = session_from([
        [0, 2, 1, 1, 1, 1, 1, 1],
        [1, 1, 1, 1, 1, 1, 1, 1],
        [1, 1, 1, 1, 1, 1, 1, 1],
        [1, 1, 1, 1, 1, 1, 1, 1],
        [2, 2, 2, 2, 2, 2, 2, 2],
        [2, 2, 2, 2, 2, 2, 2, 2],
        [2, 2, 2, 2, 2, 2, 2, 2],
        [2, 2, 2, 2, 2, 2, 2, 2],
    ]);
    assert_eq!(session.legal_moves(), &coords(&[(0, 0)])[..]);

    let response = session.apply_move(Player::One, Coordinates::new(0, 0));
    assert!(*response.game_over());
    assert_eq!(
        response.message(),
        "Game over. It's a tie. Player 1: 32. Player 2: 32."
    );
    assert_eq!(*response.status(), Status::Finished(Outcome::Draw));
    assert_eq!(*response.next_player(), Player::One);

    let after = session.apply_move(Player::Two, Coordinates::new(0, 0));
    assert_eq!(*after.status(), Status::Rejected(MoveError::GameOver));
    assert_eq!(after.board(), response.board());
}

#[test]
fn test_score_and_empty_cells_cover_the_board() {
    let mut session = OthelloSession::new();
    let mut response = session.init();
    for _ in 0..20 {
        let Some(&at) = response.legal_moves().as_ref().and_then(|moves| moves.first()) else {
            break;
        };
        response = session.apply_move(*response.next_player(), at);
        let score = response.score().unwrap();
        assert_eq!(
            score.player_one + score.player_two + response.board().empty_count(),
            SIZE * SIZE
        );
    }
}

#[test]
fn test_move_outside_legal_set_is_rejected_for_either_player() {
    let mut session = OthelloSession::new();
    let start = session.init();

    // (3, 2) brackets for player 2, but player 1 is to move.
    let response = session.apply_move(Player::Two, Coordinates::new(3, 2));

    assert_eq!(*response.status(), Status::Rejected(MoveError::IllegalMove));
    assert_eq!(response.message(), "Error: Can't place there. Player 1 move again.");
    assert_eq!(response.board(), &Board::from_rows(&STARTING_GRID).unwrap());
    assert_eq!(*response.next_player(), Player::One);
    assert_eq!(response.legal_moves(), start.legal_moves());
    assert_eq!(*response.score(), Some(Score::new(2, 2)));
}

#[test]
fn test_init_with_custom_board() {
    let mut session = OthelloSession::new();
    let mut grid = STARTING_GRID;
    grid[0][0] = 1;
    let response = session
        .init_with(Board::from_rows(&grid).unwrap())
        .unwrap();
    assert_eq!(*response.score(), Some(Score::new(3, 2)));
    assert_eq!(*response.next_player(), Player::One);
    assert!(session.init_with(Board::new(SIZE, SIZE - 1)).is_err());
}
