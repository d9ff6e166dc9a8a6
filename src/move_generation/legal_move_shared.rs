//! Sliding and stepping helpers shared by the per-piece generators.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Piece, Square};
use crate::moves::chess_move::ChessMove;

/// Up, left, down, right.
pub const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];
pub const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Walks each direction square by square, stopping at the edge, before an
/// own piece, or on an enemy piece (which is included as a capture).
pub fn push_sliding_moves(
    piece: Piece,
    from: Square,
    board: &Board,
    directions: &[(i8, i8)],
    out: &mut Vec<ChessMove>,
) {
    for &(d_row, d_col) in directions {
        let mut cursor = from;
        while let Some(to) = cursor.offset(d_row, d_col) {
            match board.get(to) {
                None => out.push(ChessMove::new(from, to, piece, None)),
                Some(target) if target.color != piece.color => {
                    out.push(ChessMove::new(from, to, piece, Some(target)));
                    break;
                }
                Some(_) => break,
            }
            cursor = to;
        }
    }
}

/// Fixed-offset destinations that are on the board and not held by an own piece.
pub fn push_step_moves(
    piece: Piece,
    from: Square,
    board: &Board,
    offsets: &[(i8, i8)],
    out: &mut Vec<ChessMove>,
) {
    for &(d_row, d_col) in offsets {
        let Some(to) = from.offset(d_row, d_col) else {
            continue;
        };
        let target = board.get(to);
        if target.map_or(true, |occupant| occupant.color != piece.color) {
            out.push(ChessMove::new(from, to, piece, target));
        }
    }
}
