//! Events and outcomes reported by the turn controller.

use crate::MoveList;
use ludo_core::{Cell, Color, PieceRef};
use serde::Serialize;

/// Something that happened while applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameEvent {
    /// An opponent piece was sent back to its base.
    Capture {
        capturer: PieceRef,
        victim: PieceRef,
        cell: Cell,
    },
    /// The mover rolled a six and rolls again.
    ExtraTurn { color: Color },
    /// All four of the mover's pieces are home; the game is over.
    Win { color: Color },
    /// The move had no side effects and the turn passed on.
    NoOp,
}

/// Result of a dice roll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RollOutcome {
    /// The player must pick one of `moves`.
    Moves { dice: u8, moves: MoveList },
    /// Third six in a row: nothing moves and the turn passes on.
    TurnForfeited { color: Color, dice: u8 },
    /// No piece can use the roll; the turn passes on.
    NoLegalMoves { color: Color, dice: u8 },
}

impl RollOutcome {
    /// Returns the rolled value.
    pub fn dice(&self) -> u8 {
        match *self {
            RollOutcome::Moves { dice, .. }
            | RollOutcome::TurnForfeited { dice, .. }
            | RollOutcome::NoLegalMoves { dice, .. } => dice,
        }
    }

    /// Returns the candidate moves (empty unless a selection is required).
    pub fn moves(&self) -> &[ludo_core::Move] {
        match self {
            RollOutcome::Moves { moves, .. } => moves.as_slice(),
            _ => &[],
        }
    }
}
