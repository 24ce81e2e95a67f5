//! Piece representation.

use crate::{Cell, Color};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of pieces each player owns.
pub const PIECES_PER_PLAYER: usize = 4;

/// Where a piece currently is.
///
/// The four states are mutually exclusive and each carries exactly the
/// position that state allows: a base slot, a main-path cell, a home-path
/// cell, or nothing once the piece is home.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceState {
    /// Waiting in the color's base at its fixed slot.
    InBase(Cell),
    /// On the shared main path.
    OnMainPath(Cell),
    /// On the color's private home path.
    OnHomePath(Cell),
    /// Finished.
    Home,
}

/// Tag-only view of [`PieceState`], without the position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StateKind {
    InBase,
    OnMainPath,
    OnHomePath,
    Home,
}

impl PieceState {
    /// Returns the cell this state places the piece on, if any.
    #[inline]
    pub const fn position(self) -> Option<Cell> {
        match self {
            PieceState::InBase(cell)
            | PieceState::OnMainPath(cell)
            | PieceState::OnHomePath(cell) => Some(cell),
            PieceState::Home => None,
        }
    }

    /// Returns the state tag.
    #[inline]
    pub const fn kind(self) -> StateKind {
        match self {
            PieceState::InBase(_) => StateKind::InBase,
            PieceState::OnMainPath(_) => StateKind::OnMainPath,
            PieceState::OnHomePath(_) => StateKind::OnHomePath,
            PieceState::Home => StateKind::Home,
        }
    }

    #[inline]
    pub const fn is_home(self) -> bool {
        matches!(self, PieceState::Home)
    }

    #[inline]
    pub const fn is_in_base(self) -> bool {
        matches!(self, PieceState::InBase(_))
    }
}

impl fmt::Display for StateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StateKind::InBase => "base",
            StateKind::OnMainPath => "main",
            StateKind::OnHomePath => "home-path",
            StateKind::Home => "home",
        };
        write!(f, "{}", name)
    }
}

impl fmt::Display for PieceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position() {
            Some(cell) => write!(f, "{} {}", self.kind(), cell),
            None => write!(f, "{}", self.kind()),
        }
    }
}

/// Identifies one piece on the board: its owner and its number (0-3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PieceRef {
    pub color: Color,
    pub id: u8,
}

impl PieceRef {
    #[inline]
    pub const fn new(color: Color, id: u8) -> Self {
        PieceRef { color, id }
    }
}

impl fmt::Display for PieceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.color.to_char(), self.id)
    }
}

/// A single piece and its current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub id: u8,
    pub color: Color,
    pub state: PieceState,
}

impl Piece {
    /// Creates a piece waiting at the given base slot.
    #[inline]
    pub const fn in_base(color: Color, id: u8, slot: Cell) -> Self {
        Piece {
            id,
            color,
            state: PieceState::InBase(slot),
        }
    }

    #[inline]
    pub const fn reference(&self) -> PieceRef {
        PieceRef::new(self.color, self.id)
    }

    #[inline]
    pub const fn position(&self) -> Option<Cell> {
        self.state.position()
    }
}
