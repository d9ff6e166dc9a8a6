//! Terminal-oriented Unicode board renderer.
//!
//! Text stand-in for a graphical board: rank 8 on top, file labels above
//! and below, and the last move's squares bracketed.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::utils::algebraic::{COLS_TO_FILES, ROWS_TO_RANKS};

pub fn render_game_state(game_state: &GameState) -> String {
    let highlighted: Vec<Square> = game_state
        .last_move()
        .map(|mv| vec![mv.start(), mv.end()])
        .unwrap_or_default();

    let mut out = String::new();
    push_file_labels(&mut out);

    for (row, rank) in game_state.board().rows().iter().enumerate() {
        out.push(ROWS_TO_RANKS[row]);
        out.push(' ');

        for (col, occupant) in rank.iter().enumerate() {
            let square = Square::new(row as u8, col as u8);
            let symbol = occupant.map_or('·', piece_to_unicode);
            if highlighted.contains(&square) {
                out.push('[');
                out.push(symbol);
                out.push(']');
            } else {
                out.push(' ');
                out.push(symbol);
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(ROWS_TO_RANKS[row]);
        out.push('\n');
    }

    push_file_labels(&mut out);
    out
}

fn push_file_labels(out: &mut String) {
    out.push_str("  ");
    for file in COLS_TO_FILES {
        out.push(' ');
        out.push(file);
        out.push(' ');
    }
    out.push('\n');
}

pub fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}
