//! Pseudo-legal move generation: per-piece rules, ignoring king safety.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::chess_move::ChessMove;

/// Appends the pseudo-legal moves of `piece` standing on `from`.
pub fn generate_piece_moves(piece: Piece, from: Square, board: &Board, out: &mut Vec<ChessMove>) {
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(piece.color, from, board, out),
        PieceKind::Rook => generate_rook_moves(piece, from, board, out),
        PieceKind::Knight => generate_knight_moves(piece, from, board, out),
        PieceKind::Bishop => generate_bishop_moves(piece, from, board, out),
        PieceKind::Queen => generate_queen_moves(piece, from, board, out),
        PieceKind::King => generate_king_moves(piece, from, board, out),
    }
}

/// All pseudo-legal moves of `side`, in row-major board order and then
/// per-piece generator order.
pub fn generate_pseudo_legal_moves(board: &Board, side: Color) -> Vec<ChessMove> {
    let mut out = Vec::with_capacity(64);
    for (from, piece) in board.occupied_squares() {
        if piece.color == side {
            generate_piece_moves(piece, from, board, &mut out);
        }
    }
    out
}

impl GameState {
    /// Pseudo-legal moves for the side to move.
    pub fn pseudo_legal_moves(&self) -> Vec<ChessMove> {
        generate_pseudo_legal_moves(self.board(), self.side_to_move())
    }
}
