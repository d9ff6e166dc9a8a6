//! Knight move generation.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Piece, Square};
use crate::move_generation::legal_move_shared::push_step_moves;
use crate::moves::chess_move::ChessMove;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub fn generate_knight_moves(piece: Piece, from: Square, board: &Board, out: &mut Vec<ChessMove>) {
    push_step_moves(piece, from, board, &KNIGHT_OFFSETS, out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Color, PieceKind};

    #[test]
    fn corner_knight_has_two_moves() {
        let board = Board::empty();
        let knight = Piece::new(Color::White, PieceKind::Knight);
        let mut out = Vec::new();
        generate_knight_moves(knight, Square::new(7, 0), &board, &mut out);
        let ends: Vec<Square> = out.iter().map(|mv| mv.end()).collect();
        assert_eq!(ends, vec![Square::new(5, 1), Square::new(6, 2)]);
    }

    #[test]
    fn knight_jumps_over_but_never_onto_own_pieces() {
        let board = Board::standard();
        let g1 = Square::new(7, 6);
        let mut out = Vec::new();
        generate_knight_moves(board.get(g1).expect("knight"), g1, &board, &mut out);
        let ends: Vec<Square> = out.iter().map(|mv| mv.end()).collect();
        assert_eq!(ends, vec![Square::new(5, 5), Square::new(5, 7)]);
    }
}
