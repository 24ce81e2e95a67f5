//! Error types for game operations.

use crate::board::BoardError;
use ludo_core::Color;
use thiserror::Error;

/// Error type for game operations.
///
/// A failed operation never changes the game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// No game is running: `start` was never called, or the game was reset.
    #[error("game has not been started")]
    GameNotStarted,

    /// The move is not in the current legal set.
    #[error("invalid move selection: {0}")]
    InvalidMoveSelection(String),

    /// The game has already ended.
    #[error("game has already ended")]
    GameAlreadyOver,

    /// The dice were rolled and a move must be selected first.
    #[error("a move must be selected before continuing")]
    MoveSelectionPending,

    /// A game needs exactly four distinct colors.
    #[error("expected four distinct colors, got {0:?}")]
    InvalidColors(Vec<Color>),

    /// The dice source produced a value outside `1..=6`.
    #[error("dice value out of range: {0}")]
    InvalidDiceValue(u8),

    /// A setup placement was rejected.
    #[error("invalid placement: {0}")]
    InvalidPlacement(String),

    /// Board data and piece positions disagree. Never expected in a correct build.
    #[error("board topology fault: {0}")]
    Topology(#[from] BoardError),
}
