//! Core types for Ludo.
//!
//! This crate provides the fundamental types used across the engine:
//! - [`Color`] for the four players
//! - [`Cell`] for board coordinates
//! - [`Piece`], [`PieceRef`], and [`PieceState`] for piece representation
//! - [`Move`] and [`MoveKind`] for move representation

mod cell;
mod color;
mod mov;
mod piece;

pub use cell::Cell;
pub use color::{Color, ParseColorError};
pub use mov::{Move, MoveKind};
pub use piece::{Piece, PieceRef, PieceState, StateKind, PIECES_PER_PLAYER};
