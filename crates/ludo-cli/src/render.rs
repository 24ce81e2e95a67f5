//! Plain-text rendering of the board, pieces and moves.
//!
//! Grid legend:
//!
//! ```text
//!   .   main-path cell        *   star (safe) cell
//!   r   Red home path         _   empty base slot
//!   R   a Red piece           2   two to nine pieces stacked
//!   +   ten or more pieces stacked
//!   x   destination of a pending move
//! ```

use ludo_core::{Cell, Color, Move, StateKind};
use ludo_engine::{board, Game, GameMove, PieceView};

const SIZE: usize = Cell::GRID_SIZE as usize;

/// Draws the 15x15 board with every piece and pending destination.
pub fn render_board(game: &Game) -> String {
    let mut grid = [[' '; SIZE]; SIZE];
    let mut put = |cell: Cell, ch: char| grid[cell.row() as usize][cell.col() as usize] = ch;

    for &cell in board::main_path() {
        put(cell, '.');
    }
    for cell in board::safe_cells() {
        put(cell, '*');
    }
    for color in Color::ALL {
        for &cell in board::home_path(color) {
            put(cell, color.to_char().to_ascii_lowercase());
        }
        for id in 0..4 {
            put(board::base_slot(color, id), '_');
        }
    }
    for m in game.legal_moves() {
        if let Some(cell) = m.destination() {
            put(cell, 'x');
        }
    }

    let mut stacks = [[0u8; SIZE]; SIZE];
    for view in game.query_pieces() {
        if let Some(cell) = view.position {
            let (r, c) = (cell.row() as usize, cell.col() as usize);
            stacks[r][c] += 1;
            grid[r][c] = match stacks[r][c] {
                1 => view.color.to_char(),
                n @ 2..=9 => char::from(b'0' + n),
                _ => '+',
            };
        }
    }

    let mut out = String::from("   ");
    for col in 0..SIZE {
        out.push_str(&format!("{:>2}", col % 10));
    }
    out.push('\n');
    for (row, cells) in grid.iter().enumerate() {
        out.push_str(&format!("{:>2} ", row));
        for &ch in cells {
            out.push(' ');
            out.push(ch);
        }
        out.push('\n');
    }

    let home: Vec<String> = game
        .players()
        .iter()
        .map(|p| {
            let n = p.pieces().iter().filter(|x| x.state.is_home()).count();
            format!("{}:{}", p.color().to_char(), n)
        })
        .collect();
    out.push_str(&format!("home {}", home.join(" ")));
    out
}

/// Lists pieces one per line, e.g. `R0 main [6,1]`.
pub fn render_pieces(pieces: &[PieceView]) -> String {
    pieces
        .iter()
        .map(|v| {
            let name = format!("{}{}", v.color.to_char(), v.piece_id);
            match (v.state, v.position) {
                (StateKind::Home, _) | (_, None) => format!("{} {}", name, v.state),
                (state, Some(cell)) => format!("{} {} {}", name, state, cell),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Lists pending moves, keyed by the piece id to type after `move`.
pub fn render_moves(moves: &[Move]) -> String {
    if moves.is_empty() {
        return "no pending moves".to_string();
    }
    moves
        .iter()
        .map(|m| format!("  {}: {}", m.piece.id, m))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_history(history: &[GameMove]) -> String {
    if history.is_empty() {
        return "no moves yet".to_string();
    }
    history
        .iter()
        .enumerate()
        .map(|(i, gm)| format!("{:>3}. [{}] {}", i + 1, gm.dice, gm.mov))
        .collect::<Vec<_>>()
        .join("\n")
}
