//! Rectangular game board.

use crate::{Coordinates, MoveError, Player, SetupError};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell holding a player's mark or disc.
    Occupied(Player),
}

impl Cell {
    /// Numeric cell value: 0 for empty, otherwise the owner's id.
    pub fn value(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Occupied(player) => player.id(),
        }
    }

    /// Parses a numeric cell value.
    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            0 => Some(Cell::Empty),
            id => Player::from_id(id).map(Cell::Occupied),
        }
    }

    /// Owner of the cell, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }

    /// Returns true for an empty cell.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// Fixed-size grid of cells stored in row-major order.
///
/// Serialized as a list of rows of cell values (0 empty, 1 and 2 for the
/// players), the shape front-ends and fixtures exchange.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<u8>>", into = "Vec<Vec<u8>>")]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board.
    #[instrument]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        }
    }

    /// Creates a board whose cells are given by `cell` at each coordinate.
    pub fn from_fn(width: usize, height: usize, cell: impl FnMut(Coordinates) -> Cell) -> Self {
        let mut board = Self::new(width, height);
        board.cells = board.coordinates().map(cell).collect();
        board
    }

    /// Builds a board from rows of cell values.
    ///
    /// # Errors
    ///
    /// Fails when there are no rows, the rows differ in length, or a value
    /// is not 0, 1 or 2.
    #[instrument(skip(rows))]
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, SetupError> {
        let height = rows.len();
        let width = rows.first().map(|row| row.as_ref().len()).unwrap_or(0);
        if width == 0 {
            return Err(SetupError::new("Board must have at least one cell"));
        }

        let mut cells = Vec::with_capacity(width * height);
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(SetupError::new(format!(
                    "Row {} has {} cells, expected {}",
                    y,
                    row.len(),
                    width
                )));
            }
            for (x, &value) in row.iter().enumerate() {
                let cell = Cell::from_value(value).ok_or_else(|| {
                    SetupError::new(format!("Invalid cell value {} at ({}, {})", value, x, y))
                })?;
                cells.push(cell);
            }
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns true when the coordinates lie on the board.
    pub fn contains(&self, at: Coordinates) -> bool {
        at.x >= 0 && at.y >= 0 && (at.x as usize) < self.width && (at.y as usize) < self.height
    }

    fn index(&self, at: Coordinates) -> Option<usize> {
        self.contains(at)
            .then(|| at.y as usize * self.width + at.x as usize)
    }

    /// Gets the cell at the given coordinates, `None` when off the board.
    pub fn get(&self, at: Coordinates) -> Option<Cell> {
        self.index(at).map(|i| self.cells[i])
    }

    /// Writes a cell.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] for coordinates off the board.
    pub fn set(&mut self, at: Coordinates, cell: Cell) -> Result<(), MoveError> {
        let index = self.index(at).ok_or(MoveError::OutOfBounds)?;
        self.cells[index] = cell;
        Ok(())
    }

    /// Number of cells owned by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|&&cell| cell == Cell::Occupied(player))
            .count()
    }

    /// Number of empty cells.
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_empty()).count()
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// All coordinates in row-major order.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinates> + use<> {
        let (width, height) = (self.width as i32, self.height as i32);
        (0..height).flat_map(move |y| (0..width).map(move |x| Coordinates::new(x, y)))
    }

    /// Snapshot of the board as rows of cell values.
    pub fn rows(&self) -> Vec<Vec<u8>> {
        (0..self.height)
            .map(|y| {
                self.cells[y * self.width..(y + 1) * self.width]
                    .iter()
                    .map(|cell| cell.value())
                    .collect()
            })
            .collect()
    }
}

impl From<Board> for Vec<Vec<u8>> {
    fn from(board: Board) -> Self {
        board.rows()
    }
}

impl TryFrom<Vec<Vec<u8>>> for Board {
    type Error = SetupError;

    fn try_from(rows: Vec<Vec<u8>>) -> Result<Self, Self::Error> {
        Board::from_rows(&rows)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            let line: Vec<String> = row.iter().map(|value| value.to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
