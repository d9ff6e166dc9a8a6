//! Queen move generation: rook lines first, then bishop diagonals.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Piece, Square};
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::chess_move::ChessMove;

pub fn generate_queen_moves(piece: Piece, from: Square, board: &Board, out: &mut Vec<ChessMove>) {
    generate_rook_moves(piece, from, board, out);
    generate_bishop_moves(piece, from, board, out);
}
