//! Move representation.

use crate::{Cell, Color, PieceRef, PieceState};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The five kinds of piece movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum MoveKind {
    /// Leave the base for the color's start cell (requires a six).
    EnterBoard = 0,
    /// Advance along the shared main path.
    AdvanceOnMain = 1,
    /// Turn off the main path onto the home path.
    EnterHomePath = 2,
    /// Advance along the home path.
    AdvanceOnHomePath = 3,
    /// Reach the centre; the piece is done.
    Finish = 4,
}

impl MoveKind {
    /// Short verb used in move notation.
    pub const fn verb(self) -> &'static str {
        match self {
            MoveKind::EnterBoard => "enter",
            MoveKind::AdvanceOnMain => "advance",
            MoveKind::EnterHomePath => "turn-in",
            MoveKind::AdvanceOnHomePath => "climb",
            MoveKind::Finish => "finish",
        }
    }

    /// Returns true if the move ends on the shared main path.
    #[inline]
    pub const fn lands_on_main_path(self) -> bool {
        matches!(self, MoveKind::EnterBoard | MoveKind::AdvanceOnMain)
    }
}

/// A candidate move for one piece.
///
/// Carries the piece's state before and after the move, so a move
/// generated for one game position never matches a different position.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub piece: PieceRef,
    pub from: PieceState,
    pub to: PieceState,
    pub kind: MoveKind,
}

impl Move {
    #[inline]
    pub const fn new(piece: PieceRef, from: PieceState, to: PieceState, kind: MoveKind) -> Self {
        Move {
            piece,
            from,
            to,
            kind,
        }
    }

    /// Returns the cell the piece ends on, or `None` for [`MoveKind::Finish`].
    #[inline]
    pub const fn destination(self) -> Option<Cell> {
        self.to.position()
    }

    /// Returns the color of the moving piece.
    #[inline]
    pub const fn color(self) -> Color {
        self.piece.color
    }

    /// Returns the short notation for this move (e.g. "R0 enter [6,1]").
    pub fn to_notation(self) -> String {
        match self.destination() {
            Some(cell) => format!("{} {} {}", self.piece, self.kind.verb(), cell),
            None => format!("{} {}", self.piece, self.kind.verb()),
        }
    }

    /// A placeholder move (used to fill fixed-size lists, never legal).
    pub const NULL: Move = Move {
        piece: PieceRef::new(Color::Red, 0),
        from: PieceState::Home,
        to: PieceState::Home,
        kind: MoveKind::Finish,
    };
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self.to_notation())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_notation())
    }
}
