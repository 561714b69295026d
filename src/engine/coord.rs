//! Grid coordinates with validated construction.

use super::types::Board;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A (row, column) pair outside the 3x3 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("coordinate ({row}, {column}) is outside the 3x3 grid")]
pub struct InvalidCoordinate {
    /// Rejected row.
    pub row: usize,
    /// Rejected column.
    pub column: usize,
}

/// A position on the 3x3 grid.
///
/// Rows and columns are indexed 0-2; a `Coord` is always in range, so
/// board access through it cannot fail. Raw input enters through
/// [`Coord::new`], which reports [`InvalidCoordinate`] instead of
/// constructing an out-of-range value. Serde goes through `[row, column]`
/// pairs with the same validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[u8; 2]", into = "[u8; 2]")]
pub struct Coord {
    row: u8,
    col: u8,
}

impl Coord {
    /// Top-left cell (0, 0).
    pub const TOP_LEFT: Coord = Coord { row: 0, col: 0 };
    /// Top-center cell (0, 1).
    pub const TOP_CENTER: Coord = Coord { row: 0, col: 1 };
    /// Top-right cell (0, 2).
    pub const TOP_RIGHT: Coord = Coord { row: 0, col: 2 };
    /// Middle-left cell (1, 0).
    pub const MIDDLE_LEFT: Coord = Coord { row: 1, col: 0 };
    /// Center cell (1, 1).
    pub const CENTER: Coord = Coord { row: 1, col: 1 };
    /// Middle-right cell (1, 2).
    pub const MIDDLE_RIGHT: Coord = Coord { row: 1, col: 2 };
    /// Bottom-left cell (2, 0).
    pub const BOTTOM_LEFT: Coord = Coord { row: 2, col: 0 };
    /// Bottom-center cell (2, 1).
    pub const BOTTOM_CENTER: Coord = Coord { row: 2, col: 1 };
    /// Bottom-right cell (2, 2).
    pub const BOTTOM_RIGHT: Coord = Coord { row: 2, col: 2 };

    /// All nine coordinates in row-major order.
    pub const ALL: [Coord; 9] = [
        Coord::TOP_LEFT,
        Coord::TOP_CENTER,
        Coord::TOP_RIGHT,
        Coord::MIDDLE_LEFT,
        Coord::CENTER,
        Coord::MIDDLE_RIGHT,
        Coord::BOTTOM_LEFT,
        Coord::BOTTOM_CENTER,
        Coord::BOTTOM_RIGHT,
    ];

    /// Creates a coordinate, rejecting rows or columns outside 0-2.
    pub fn new(row: usize, column: usize) -> Result<Self, InvalidCoordinate> {
        if row < 3 && column < 3 {
            Ok(Coord {
                row: row as u8,
                col: column as u8,
            })
        } else {
            Err(InvalidCoordinate { row, column })
        }
    }

    /// Creates a coordinate from a row-major index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        if index < 9 {
            Some(Coord {
                row: (index / 3) as u8,
                col: (index % 3) as u8,
            })
        } else {
            None
        }
    }

    /// Returns the row (0-2).
    pub fn row(self) -> usize {
        self.row as usize
    }

    /// Returns the column (0-2).
    pub fn column(self) -> usize {
        self.col as usize
    }

    /// Returns the row-major index (0-8).
    pub fn index(self) -> usize {
        self.row as usize * 3 + self.col as usize
    }

    /// Returns the coordinate shifted by the given deltas, or `None` if
    /// the result leaves the grid.
    pub fn offset(self, rows: i16, columns: i16) -> Option<Self> {
        // Widened so extreme deltas cannot overflow the sum.
        let row = self.row as i32 + rows as i32;
        let col = self.col as i32 + columns as i32;
        if (0..3).contains(&row) && (0..3).contains(&col) {
            Some(Coord {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Human-readable cell name for status lines.
    pub fn label(self) -> &'static str {
        match self.index() {
            0 => "top-left",
            1 => "top-center",
            2 => "top-right",
            3 => "middle-left",
            4 => "center",
            5 => "middle-right",
            6 => "bottom-left",
            7 => "bottom-center",
            _ => "bottom-right",
        }
    }

    /// Returns the coordinates of all empty cells, in row-major order.
    #[instrument(skip(board))]
    pub fn open_cells(board: &Board) -> Vec<Coord> {
        Coord::ALL
            .iter()
            .copied()
            .filter(|coord| board.is_empty(*coord))
            .collect()
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl From<Coord> for [u8; 2] {
    fn from(coord: Coord) -> Self {
        [coord.row, coord.col]
    }
}

impl TryFrom<[u8; 2]> for Coord {
    type Error = InvalidCoordinate;

    fn try_from([row, column]: [u8; 2]) -> Result<Self, Self::Error> {
        Coord::new(row as usize, column as usize)
    }
}
