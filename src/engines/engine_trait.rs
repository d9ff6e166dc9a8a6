//! Engine abstraction for automated move selection.
//!
//! An engine only chooses; applying the chosen move is left to the caller
//! so human and automated players go through the same path.

use crate::game_state::game_state::GameState;
use crate::moves::chess_move::ChessMove;

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    /// Picks one of the legal moves of the side to move, or `None` when
    /// there are none. Board, turn and move log are left as they were found;
    /// the checkmate/stalemate flags are refreshed as a side effect.
    fn choose_move(&mut self, game_state: &mut GameState) -> Option<ChessMove>;
}
