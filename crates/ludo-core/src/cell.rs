//! Board cell representation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A `(row, column)` coordinate on the 15x15 board grid.
///
/// Row 0 is the top edge, column 0 the left edge.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    row: u8,
    col: u8,
}

impl Cell {
    /// Number of rows and columns on the board.
    pub const GRID_SIZE: u8 = 15;

    /// Creates a cell, returning `None` if it lies outside the grid.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < Self::GRID_SIZE && col < Self::GRID_SIZE {
            Some(Cell { row, col })
        } else {
            None
        }
    }

    /// Creates a cell from constant coordinates.
    ///
    /// # Panics
    /// Panics if the coordinates lie outside the grid. In a `const` context
    /// this is a compile error.
    #[inline]
    pub const fn at(row: u8, col: u8) -> Self {
        assert!(row < Self::GRID_SIZE && col < Self::GRID_SIZE);
        Cell { row, col }
    }

    /// Returns the row (0-14).
    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column (0-14).
    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }
}

impl fmt::Debug for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cell[{},{}]", self.row, self.col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.row, self.col)
    }
}
