//! The eight compass directions a capture can run along.

use strum::EnumIter;

/// A step direction on the board, in screen terms (`y` grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Direction {
    /// Toward higher rows.
    Down,
    /// Toward lower rows.
    Up,
    /// Toward lower columns.
    Left,
    /// Toward higher columns.
    Right,
    /// Diagonal down and right.
    DownRight,
    /// Diagonal down and left.
    DownLeft,
    /// Diagonal up and right.
    UpRight,
    /// Diagonal up and left.
    UpLeft,
}

impl Direction {
    /// Column and row step for one cell in this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Down => (0, 1),
            Direction::Up => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::DownRight => (1, 1),
            Direction::DownLeft => (-1, 1),
            Direction::UpRight => (1, -1),
            Direction::UpLeft => (-1, -1),
        }
    }
}
