//! Static board topology.
//!
//! The board is a 15x15 grid. Pieces travel clockwise around a shared
//! cyclic main path of 51 cells, then turn off onto a private 5-cell home
//! path leading to the centre. All functions here are pure lookups over
//! constant tables.

use ludo_core::{Cell, Color, PIECES_PER_PLAYER};
use std::fmt;
use thiserror::Error;

/// Number of cells on the shared main path.
pub const MAIN_PATH_LEN: usize = 51;

/// Number of cells on each color's home path.
pub const HOME_PATH_LEN: usize = 5;

/// The shared main path, clockwise, starting at Red's start cell.
#[rustfmt::skip]
const MAIN_PATH: [Cell; MAIN_PATH_LEN] = [
    // Red start towards the centre
    Cell::at(6, 1), Cell::at(6, 2), Cell::at(6, 3), Cell::at(6, 4), Cell::at(6, 5),
    // Top-left column
    Cell::at(5, 6), Cell::at(4, 6), Cell::at(3, 6), Cell::at(2, 6), Cell::at(1, 6), Cell::at(0, 6),
    Cell::at(0, 7),
    // Top-right column
    Cell::at(0, 8), Cell::at(1, 8), Cell::at(2, 8), Cell::at(3, 8), Cell::at(4, 8), Cell::at(5, 8),
    // Right arm, upper row
    Cell::at(6, 9), Cell::at(6, 10), Cell::at(6, 11), Cell::at(6, 12), Cell::at(6, 13), Cell::at(6, 14),
    Cell::at(7, 14),
    // Right arm, lower row
    Cell::at(8, 14), Cell::at(8, 13), Cell::at(8, 12), Cell::at(8, 11), Cell::at(8, 10), Cell::at(8, 9),
    // Bottom-right column
    Cell::at(9, 8), Cell::at(10, 8), Cell::at(11, 8), Cell::at(12, 8), Cell::at(13, 8), Cell::at(14, 8),
    Cell::at(14, 7),
    // Bottom-left column
    Cell::at(14, 6), Cell::at(13, 6), Cell::at(12, 6), Cell::at(11, 6), Cell::at(10, 6), Cell::at(9, 6),
    // Left arm, lower row
    Cell::at(8, 5), Cell::at(8, 4), Cell::at(8, 3), Cell::at(8, 2), Cell::at(8, 1), Cell::at(8, 0),
    Cell::at(7, 0),
];

/// Home paths indexed by [`Color::index`]. Index 0 is nearest the main path.
#[rustfmt::skip]
const HOME_PATHS: [[Cell; HOME_PATH_LEN]; 4] = [
    [Cell::at(7, 1), Cell::at(7, 2), Cell::at(7, 3), Cell::at(7, 4), Cell::at(7, 5)],
    [Cell::at(13, 7), Cell::at(12, 7), Cell::at(11, 7), Cell::at(10, 7), Cell::at(9, 7)],
    [Cell::at(7, 13), Cell::at(7, 12), Cell::at(7, 11), Cell::at(7, 10), Cell::at(7, 9)],
    [Cell::at(1, 7), Cell::at(2, 7), Cell::at(3, 7), Cell::at(4, 7), Cell::at(5, 7)],
];

/// Base slots indexed by [`Color::index`], then piece id.
#[rustfmt::skip]
const BASE_SLOTS: [[Cell; PIECES_PER_PLAYER]; 4] = [
    [Cell::at(1, 1), Cell::at(1, 4), Cell::at(4, 1), Cell::at(4, 4)],
    [Cell::at(10, 1), Cell::at(10, 4), Cell::at(13, 1), Cell::at(13, 4)],
    [Cell::at(10, 10), Cell::at(10, 13), Cell::at(13, 10), Cell::at(13, 13)],
    [Cell::at(1, 10), Cell::at(1, 13), Cell::at(4, 10), Cell::at(4, 13)],
];

/// Main-path index of each color's start cell.
const START_INDICES: [usize; 4] = [0, 13, 26, 39];

/// Last main-path index before each color turns onto its home path.
///
/// Green's entrance is `[9,6]`, the last bottom-left column cell before the
/// centre; the other three follow the same run-end placement.
const HOME_ENTRANCES: [usize; 4] = [4, 43, 30, 18];

/// Main-path indices of the star cells. Includes every start cell.
const SAFE_INDICES: [usize; 11] = [0, 5, 8, 13, 18, 21, 26, 31, 34, 39, 42];

/// A path a cell lookup was performed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Track {
    Main,
    Home(Color),
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Track::Main => write!(f, "the main path"),
            Track::Home(color) => write!(f, "{}'s home path", color),
        }
    }
}

/// Topology lookup failures.
///
/// These only arise from inconsistent board data or positions and never
/// describe a legal game outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("cell {cell} not found on {track}")]
    NotFound { cell: Cell, track: Track },

    #[error("index {index} out of range for {track}")]
    IndexOutOfRange { index: usize, track: Track },
}

/// Returns the index of `cell` on the main path.
pub fn main_index_of(cell: Cell) -> Result<usize, BoardError> {
    MAIN_PATH
        .iter()
        .position(|&c| c == cell)
        .ok_or(BoardError::NotFound {
            cell,
            track: Track::Main,
        })
}

/// Returns the index of `cell` on `color`'s home path.
pub fn home_index_of(color: Color, cell: Cell) -> Result<usize, BoardError> {
    home_path(color)
        .iter()
        .position(|&c| c == cell)
        .ok_or(BoardError::NotFound {
            cell,
            track: Track::Home(color),
        })
}

/// Returns true if `cell` is a star (safe) cell.
pub fn is_safe(cell: Cell) -> bool {
    SAFE_INDICES.iter().any(|&i| MAIN_PATH[i] == cell)
}

/// Returns the last main-path index before `color` turns off the main path.
#[inline]
pub const fn home_entrance_index(color: Color) -> usize {
    HOME_ENTRANCES[color.index()]
}

/// Returns the main-path index of `color`'s start cell.
#[inline]
pub const fn start_index(color: Color) -> usize {
    START_INDICES[color.index()]
}

/// Returns `color`'s start cell.
#[inline]
pub const fn start_cell(color: Color) -> Cell {
    MAIN_PATH[start_index(color)]
}

/// Returns the main-path cell at `index`.
pub fn main_cell(index: usize) -> Result<Cell, BoardError> {
    MAIN_PATH
        .get(index)
        .copied()
        .ok_or(BoardError::IndexOutOfRange {
            index,
            track: Track::Main,
        })
}

/// Returns the cell at `index` on `color`'s home path.
pub fn home_cell(color: Color, index: usize) -> Result<Cell, BoardError> {
    home_path(color)
        .get(index)
        .copied()
        .ok_or(BoardError::IndexOutOfRange {
            index,
            track: Track::Home(color),
        })
}

/// Returns `color`'s home path, nearest-the-main-path first.
#[inline]
pub const fn home_path(color: Color) -> &'static [Cell; HOME_PATH_LEN] {
    &HOME_PATHS[color.index()]
}

/// Returns the fixed base slot of piece `id` of `color`.
///
/// # Panics
/// Panics if `id` is not in `0..4`.
#[inline]
pub const fn base_slot(color: Color, id: u8) -> Cell {
    BASE_SLOTS[color.index()][id as usize]
}

/// Returns the whole main path in travel order.
#[inline]
pub const fn main_path() -> &'static [Cell; MAIN_PATH_LEN] {
    &MAIN_PATH
}

/// Returns every safe cell.
pub fn safe_cells() -> impl Iterator<Item = Cell> {
    SAFE_INDICES.iter().map(|&i| MAIN_PATH[i])
}
