//! Player representation.

use crate::board;
use ludo_core::{Color, Piece, PIECES_PER_PLAYER};

/// One of the four players and their pieces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    color: Color,
    pieces: [Piece; PIECES_PER_PLAYER],
    finished: bool,
}

impl Player {
    /// Creates a player with every piece at its base slot.
    pub fn new(color: Color) -> Self {
        let pieces = std::array::from_fn(|id| {
            let id = id as u8;
            Piece::in_base(color, id, board::base_slot(color, id))
        });
        Player {
            color,
            pieces,
            finished: false,
        }
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Display name, e.g. "Player Red".
    pub fn name(&self) -> String {
        format!("Player {}", self.color)
    }

    #[inline]
    pub fn pieces(&self) -> &[Piece; PIECES_PER_PLAYER] {
        &self.pieces
    }

    #[inline]
    pub(crate) fn piece_mut(&mut self, id: u8) -> Option<&mut Piece> {
        self.pieces.get_mut(id as usize)
    }

    #[inline]
    pub(crate) fn pieces_mut(&mut self) -> &mut [Piece; PIECES_PER_PLAYER] {
        &mut self.pieces
    }

    /// Returns true if every piece has reached home.
    pub fn all_home(&self) -> bool {
        self.pieces.iter().all(|p| p.state.is_home())
    }

    /// Returns true once the player has been marked finished.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub(crate) fn mark_finished(&mut self) {
        self.finished = true;
    }
}
