//! Read-only piece snapshots for renderers.

use ludo_core::{Cell, Color, Piece, StateKind};
use serde::Serialize;

/// Where one piece is, flattened for drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PieceView {
    pub piece_id: u8,
    pub color: Color,
    pub state: StateKind,
    /// Base slot, path cell, or `None` once home.
    pub position: Option<Cell>,
}

impl From<&Piece> for PieceView {
    fn from(piece: &Piece) -> Self {
        PieceView {
            piece_id: piece.id,
            color: piece.color,
            state: piece.state.kind(),
            position: piece.position(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ludo_core::PieceState;

    #[test]
    fn serializes_for_renderers() {
        let piece = Piece {
            id: 2,
            color: Color::Blue,
            state: PieceState::OnMainPath(Cell::at(13, 6)),
        };
        let json = serde_json::to_value(PieceView::from(&piece)).unwrap();
        assert_eq!(json["piece_id"], 2);
        assert_eq!(json["color"], "Blue");
        assert_eq!(json["state"], "OnMainPath");
        assert_eq!(json["position"]["row"], 13);
        assert_eq!(json["position"]["col"], 6);
    }

    #[test]
    fn home_pieces_have_no_position() {
        let piece = Piece {
            id: 0,
            color: Color::Red,
            state: PieceState::Home,
        };
        let view = PieceView::from(&piece);
        assert_eq!(view.state, StateKind::Home);
        assert_eq!(view.position, None);
    }
}
