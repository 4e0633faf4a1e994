//! Cursor movement for the coordinate prompt.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use duel_core::Coordinates;

/// What a key press means while picking a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptAction {
    /// The cursor moved (or stayed put on an unbound key).
    Moved(Coordinates),
    /// The cell under the cursor was chosen.
    Submit(Coordinates),
    /// The player wants to leave the game.
    Leave,
}

/// Moves cursor based on arrow keys and h/j/k/l, wrapping at each edge.
pub fn move_cursor(cursor: Coordinates, key: KeyCode, width: usize, height: usize) -> Coordinates {
    let (width, height) = (width as i32, height as i32);
    match key {
        KeyCode::Left | KeyCode::Char('h') => Coordinates::new(wrap(cursor.x - 1, width), cursor.y),
        KeyCode::Right | KeyCode::Char('l') => Coordinates::new(wrap(cursor.x + 1, width), cursor.y),
        KeyCode::Up | KeyCode::Char('k') => Coordinates::new(cursor.x, wrap(cursor.y - 1, height)),
        KeyCode::Down | KeyCode::Char('j') => Coordinates::new(cursor.x, wrap(cursor.y + 1, height)),
        _ => cursor,
    }
}

fn wrap(value: i32, len: i32) -> i32 {
    value.rem_euclid(len.max(1))
}

/// Interprets a key press at `cursor` on a `width` × `height` grid.
pub fn handle_key(cursor: Coordinates, key: KeyEvent, width: usize, height: usize) -> PromptAction {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => PromptAction::Leave,
        KeyCode::Char('q') | KeyCode::Esc => PromptAction::Leave,
        KeyCode::Enter => PromptAction::Submit(cursor),
        code => PromptAction::Moved(move_cursor(cursor, code, width, height)),
    }
}
