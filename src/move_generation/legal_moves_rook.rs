//! Rook move generation.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Piece, Square};
use crate::move_generation::legal_move_shared::{push_sliding_moves, ORTHOGONAL_DIRECTIONS};
use crate::moves::chess_move::ChessMove;

pub fn generate_rook_moves(piece: Piece, from: Square, board: &Board, out: &mut Vec<ChessMove>) {
    push_sliding_moves(piece, from, board, &ORTHOGONAL_DIRECTIONS, out);
}
