//! Scoped make/unmake.
//!
//! `SpeculativeMove` applies a move on construction and undoes it when
//! dropped, so a look at the resulting position can never leak into the
//! move log, whichever way the calling code exits.

use std::ops::{Deref, DerefMut};

use crate::game_state::game_state::GameState;
use crate::moves::chess_move::ChessMove;

pub struct SpeculativeMove<'a> {
    game_state: &'a mut GameState,
    log_len: usize,
}

impl<'a> SpeculativeMove<'a> {
    pub fn apply(game_state: &'a mut GameState, mv: ChessMove) -> Self {
        let log_len = game_state.move_log().len();
        game_state.apply_move(mv);
        Self {
            game_state,
            log_len,
        }
    }
}

impl Deref for SpeculativeMove<'_> {
    type Target = GameState;

    fn deref(&self) -> &GameState {
        &*self.game_state
    }
}

/// Nested apply/undo through the guard must be balanced before it drops.
impl DerefMut for SpeculativeMove<'_> {
    fn deref_mut(&mut self) -> &mut GameState {
        &mut *self.game_state
    }
}

impl Drop for SpeculativeMove<'_> {
    fn drop(&mut self) {
        debug_assert_eq!(
            self.game_state.move_log().len(),
            self.log_len + 1,
            "unbalanced apply/undo under a speculative move"
        );
        self.game_state.undo_last();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Color, Square};

    #[test]
    fn guard_undoes_on_drop() {
        let mut state = GameState::new_game();
        let before = state.clone();
        let e4 = ChessMove::from_board(Square::new(6, 4), Square::new(4, 4), state.board())
            .expect("e2 holds a pawn");

        {
            let trial = SpeculativeMove::apply(&mut state, e4);
            assert_eq!(trial.side_to_move(), Color::Black);
            assert_eq!(trial.move_log().len(), 1);
        }

        assert_eq!(state, before);
    }
}
