//! Canonical chess-rule constants.

use crate::game_state::chess_types::{PieceKind, Square};

/// Standard starting position. Only placement and side to move are
/// interpreted; castling and en passant fields are accepted but unused.
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1";

/// Piece kinds of a back rank from file `a` to file `h`.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

pub const WHITE_KING_START: Square = Square::new(7, 4);
pub const BLACK_KING_START: Square = Square::new(0, 4);
