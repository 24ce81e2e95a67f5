//! Legal move generation.
//!
//! For a given piece and dice value at most one move exists, so a player
//! never has more than four candidates. Generation is pure: nothing here
//! mutates the game.

use crate::board::{self, BoardError, HOME_PATH_LEN, MAIN_PATH_LEN};
use crate::Player;
use ludo_core::{Move, MoveKind, Piece, PieceState, PIECES_PER_PLAYER};

/// The dice value that releases a piece from its base.
pub const RELEASE_ROLL: u8 = 6;

/// A list of moves with a fixed maximum capacity.
///
/// One candidate per piece at most, so the list never allocates.
#[derive(Clone)]
pub struct MoveList {
    moves: [Move; Self::MAX_MOVES],
    len: usize,
}

impl MoveList {
    /// Maximum number of legal moves for a single roll.
    pub const MAX_MOVES: usize = PIECES_PER_PLAYER;

    /// Creates an empty move list.
    #[inline]
    pub const fn new() -> Self {
        MoveList {
            moves: [Move::NULL; Self::MAX_MOVES],
            len: 0,
        }
    }

    /// Adds a move to the list.
    #[inline]
    pub fn push(&mut self, m: Move) {
        debug_assert!(self.len < Self::MAX_MOVES);
        self.moves[self.len] = m;
        self.len += 1;
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    #[inline]
    pub fn contains(&self, m: &Move) -> bool {
        self.as_slice().contains(m)
    }

    /// Returns the candidate for piece `id`, if it has one.
    pub fn for_piece(&self, id: u8) -> Option<Move> {
        self.iter().find(|m| m.piece.id == id).copied()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        debug_assert!(index < self.len);
        &self.moves[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl PartialEq for MoveList {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for MoveList {}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

/// Generates every legal move for `player` with the given dice value.
///
/// Candidates are listed in piece order. Pieces that are home, pieces in
/// base without a six, and moves that would overshoot the centre produce
/// nothing.
pub fn generate_moves(player: &Player, dice: u8) -> Result<MoveList, BoardError> {
    let mut list = MoveList::new();
    for piece in player.pieces() {
        if let Some(m) = piece_move(piece, dice)? {
            list.push(m);
        }
    }
    Ok(list)
}

/// Returns the single move `piece` can make with `dice`, if any.
pub fn piece_move(piece: &Piece, dice: u8) -> Result<Option<Move>, BoardError> {
    let color = piece.color;
    let steps = dice as usize;
    let from = piece.state;

    let (to, kind) = match from {
        PieceState::Home => return Ok(None),

        PieceState::InBase(_) => {
            if dice != RELEASE_ROLL {
                return Ok(None);
            }
            (
                PieceState::OnMainPath(board::start_cell(color)),
                MoveKind::EnterBoard,
            )
        }

        PieceState::OnHomePath(cell) => {
            let target = board::home_index_of(color, cell)? + steps;
            if target < HOME_PATH_LEN {
                (
                    PieceState::OnHomePath(board::home_cell(color, target)?),
                    MoveKind::AdvanceOnHomePath,
                )
            } else if target == HOME_PATH_LEN {
                (PieceState::Home, MoveKind::Finish)
            } else {
                // Overshooting the centre is illegal, not clamped.
                return Ok(None);
            }
        }

        PieceState::OnMainPath(cell) => {
            let current = board::main_index_of(cell)?;
            let entrance = board::home_entrance_index(color);
            let target = current + steps;

            if current <= entrance && target > entrance {
                let steps_into_home = target - entrance;
                if steps_into_home > HOME_PATH_LEN {
                    return Ok(None);
                }
                (
                    PieceState::OnHomePath(board::home_cell(color, steps_into_home - 1)?),
                    MoveKind::EnterHomePath,
                )
            } else {
                (
                    PieceState::OnMainPath(board::main_cell(target % MAIN_PATH_LEN)?),
                    MoveKind::AdvanceOnMain,
                )
            }
        }
    };

    Ok(Some(Move::new(piece.reference(), from, to, kind)))
}
