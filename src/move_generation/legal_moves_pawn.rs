//! Pawn move generation.
//!
//! Single and double advances onto empty squares, diagonal captures onto
//! enemy pieces. No en passant and no promotion: a pawn on the far rank
//! has no moves.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
use crate::moves::chess_move::ChessMove;

pub fn generate_pawn_moves(color: Color, from: Square, board: &Board, out: &mut Vec<ChessMove>) {
    let piece = Piece::new(color, PieceKind::Pawn);
    let forward = color.pawn_direction();

    if let Some(one_step) = from.offset(forward, 0) {
        if board.is_empty_square(one_step) {
            out.push(ChessMove::new(from, one_step, piece, None));

            if from.row() == color.pawn_home_row() {
                if let Some(two_step) = from.offset(2 * forward, 0) {
                    if board.is_empty_square(two_step) {
                        out.push(ChessMove::new(from, two_step, piece, None));
                    }
                }
            }
        }
    }

    for d_col in [-1i8, 1i8] {
        let Some(to) = from.offset(forward, d_col) else {
            continue;
        };
        if let Some(target) = board.get(to) {
            if target.color != color {
                out.push(ChessMove::new(from, to, piece, Some(target)));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::game_state::GameState;

    fn pawn_moves(fen: &str, from: Square) -> Vec<ChessMove> {
        let state = GameState::from_fen(fen).expect("fen should parse");
        let pawn = state.board().get(from).expect("pawn on square");
        let mut out = Vec::new();
        generate_pawn_moves(pawn.color, from, state.board(), &mut out);
        out
    }

    #[test]
    fn home_rank_pawn_advances_one_or_two() {
        let moves = pawn_moves("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1", Square::new(6, 4));
        let ends: Vec<Square> = moves.iter().map(|mv| mv.end()).collect();
        assert_eq!(ends, vec![Square::new(5, 4), Square::new(4, 4)]);
    }

    #[test]
    fn blocked_pawn_has_no_forward_moves_or_double_step() {
        let moves = pawn_moves("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1", Square::new(6, 4));
        assert!(moves.is_empty());
    }

    #[test]
    fn double_step_needs_empty_destination() {
        let moves = pawn_moves("4k3/8/8/8/4n3/8/4P3/4K3 w - - 0 1", Square::new(6, 4));
        let ends: Vec<Square> = moves.iter().map(|mv| mv.end()).collect();
        assert_eq!(ends, vec![Square::new(5, 4)]);
    }

    #[test]
    fn edge_file_pawns_only_capture_inward() {
        let a_pawn = pawn_moves("4k3/8/8/8/8/1p6/P7/4K3 w - - 0 1", Square::new(6, 0));
        let captures: Vec<Square> = a_pawn.iter().filter(|mv| mv.is_capture()).map(|mv| mv.end()).collect();
        assert_eq!(captures, vec![Square::new(5, 1)]);

        let h_pawn = pawn_moves("4k3/7p/6P1/8/8/8/8/4K3 b - - 0 1", Square::new(1, 7));
        let captures: Vec<Square> = h_pawn.iter().filter(|mv| mv.is_capture()).map(|mv| mv.end()).collect();
        assert_eq!(captures, vec![Square::new(2, 6)]);
    }

    #[test]
    fn pawn_never_moves_diagonally_onto_empty_or_own_squares() {
        let moves = pawn_moves("4k3/8/8/8/8/3P4/4P3/4K3 w - - 0 1", Square::new(6, 4));
        assert!(moves.iter().all(|mv| mv.end().col() == 4));
    }

    #[test]
    fn pawn_on_last_rank_is_stuck() {
        let moves = pawn_moves("P3k3/8/8/8/8/8/8/4K3 w - - 0 1", Square::new(0, 0));
        assert!(moves.is_empty());
    }
}
