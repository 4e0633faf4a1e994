//! Cell coordinates.

use derive_new::new;
use serde::{Deserialize, Serialize};

/// A cell address: `x` is the column, `y` the row, both zero-indexed.
///
/// Components are signed so that input from outside the grid (for example
/// `x = -1`) can be expressed and rejected instead of wrapping around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Coordinates {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl Coordinates {
    /// Returns the coordinates shifted by `(dx, dy)`.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Key for row-major ordering (row first, then column).
    pub fn row_major(self) -> (i32, i32) {
        (self.y, self.x)
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{ x: {}, y: {} }}", self.x, self.y)
    }
}
