//! King move generation. No castling.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Piece, Square};
use crate::move_generation::legal_move_shared::push_step_moves;
use crate::moves::chess_move::ChessMove;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub fn generate_king_moves(piece: Piece, from: Square, board: &Board, out: &mut Vec<ChessMove>) {
    push_step_moves(piece, from, board, &KING_OFFSETS, out);
}
