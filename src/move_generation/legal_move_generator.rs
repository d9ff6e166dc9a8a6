//! Full legal move generation pipeline.
//!
//! Generates pseudo-legal moves for the side to move, applies each
//! candidate speculatively, discards those that leave the mover's king
//! attacked, and records checkmate/stalemate when nothing survives.

use log::{debug, trace};

use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::game_state::speculative_move::SpeculativeMove;
use crate::moves::chess_move::ChessMove;

impl GameState {
    /// Legal moves for the side to move, in generation order.
    ///
    /// Refreshes `in_checkmate`/`in_stalemate`. The board, side to move and
    /// move log are identical before and after the call.
    pub fn legal_moves(&mut self) -> Vec<ChessMove> {
        let mover = self.side_to_move();
        let pseudo = self.pseudo_legal_moves();
        let pseudo_count = pseudo.len();

        let mut legal = Vec::with_capacity(pseudo_count);
        for mv in pseudo {
            if !leaves_king_attacked(self, mv, mover) {
                legal.push(mv);
            }
        }
        trace!(
            "{mover}: {pseudo_count} pseudo-legal, {} legal after king-safety filter",
            legal.len()
        );

        if legal.is_empty() {
            let in_check = self.is_in_check(mover);
            self.set_terminal_flags(in_check, !in_check);
            if in_check {
                debug!("{mover} is checkmated after {} plies", self.move_log().len());
            } else {
                debug!("{mover} is stalemated after {} plies", self.move_log().len());
            }
        } else {
            self.set_terminal_flags(false, false);
        }

        legal
    }
}

fn leaves_king_attacked(game_state: &mut GameState, mv: ChessMove, mover: Color) -> bool {
    let trial = SpeculativeMove::apply(game_state, mv);
    trial.is_in_check(mover)
}
