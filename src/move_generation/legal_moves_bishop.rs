//! Bishop move generation.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Piece, Square};
use crate::move_generation::legal_move_shared::{push_sliding_moves, DIAGONAL_DIRECTIONS};
use crate::moves::chess_move::ChessMove;

pub fn generate_bishop_moves(piece: Piece, from: Square, board: &Board, out: &mut Vec<ChessMove>) {
    push_sliding_moves(piece, from, board, &DIAGONAL_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Color, PieceKind};

    #[test]
    fn centre_bishop_on_empty_board_has_thirteen_moves() {
        let board = Board::empty();
        let bishop = Piece::new(Color::White, PieceKind::Bishop);
        let mut out = Vec::new();
        generate_bishop_moves(bishop, Square::new(4, 3), &board, &mut out);
        assert_eq!(out.len(), 13);
    }

    #[test]
    fn start_position_bishops_are_boxed_in() {
        let board = Board::standard();
        let c1 = Square::new(7, 2);
        let mut out = Vec::new();
        generate_bishop_moves(board.get(c1).expect("bishop"), c1, &board, &mut out);
        assert!(out.is_empty());
    }
}
