//! Attack and check detection.
//!
//! A square is attacked by a color when any pseudo-legal move of that color
//! ends on it. This includes pawn advances, which only matters for empty
//! squares; king squares are always occupied, so check detection is exact.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::pseudo_legal::generate_pseudo_legal_moves;

pub fn is_square_attacked(board: &Board, square: Square, by_color: Color) -> bool {
    generate_pseudo_legal_moves(board, by_color)
        .iter()
        .any(|mv| mv.end() == square)
}

impl GameState {
    /// Read-only query; the side to move and the log are untouched.
    pub fn is_square_attacked(&self, square: Square, by_color: Color) -> bool {
        is_square_attacked(self.board(), square, by_color)
    }

    pub fn is_in_check(&self, color: Color) -> bool {
        self.is_square_attacked(self.king_square(color), color.opposite())
    }
}
