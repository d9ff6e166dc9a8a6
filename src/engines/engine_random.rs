//! Random-move engine.
//!
//! Selects uniformly from legal moves. Used as the automated opponent of
//! the terminal session and to drive random games in tests.

use log::debug;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::Engine;
use crate::game_state::game_state::GameState;
use crate::moves::chess_move::ChessMove;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic engine for reproducible games.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Random"
    }

    fn choose_move(&mut self, game_state: &mut GameState) -> Option<ChessMove> {
        let legal_moves = game_state.legal_moves();
        let picked = legal_moves.choose(&mut self.rng).copied();
        debug!(
            "random engine picked {:?} out of {} legal moves",
            picked.map(|mv| mv.to_notation()),
            legal_moves.len()
        );
        picked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Color;

    #[test]
    fn picks_a_legal_move() {
        let mut game = GameState::new_game();
        let mut engine = RandomEngine::with_seed(7);
        let picked = engine.choose_move(&mut game).expect("start position has moves");
        assert!(game.legal_moves().contains(&picked));
        assert!(game.move_log().is_empty());
    }

    #[test]
    fn same_seed_same_choices() {
        let mut first = RandomEngine::with_seed(42);
        let mut second = RandomEngine::with_seed(42);
        let mut game = GameState::new_game();
        for _ in 0..6 {
            let a = first.choose_move(&mut game).expect("moves available");
            let b = second.choose_move(&mut game).expect("moves available");
            assert_eq!(a, b);
            game.apply_move(a);
        }
    }

    #[test]
    fn returns_none_without_legal_moves() {
        let mut game = GameState::from_fen("8/8/8/8/8/kq6/8/K7 w - - 0 1").expect("fen should parse");
        assert_eq!(RandomEngine::with_seed(1).choose_move(&mut game), None);
        assert!(game.in_stalemate());
    }

    #[test]
    fn choosing_keeps_the_position_but_refreshes_flags() {
        let mut game = GameState::from_fen("8/8/8/8/8/kq6/8/K7 w - - 0 1").expect("fen should parse");
        let before_board = game.board().clone();
        assert!(!game.in_stalemate());

        assert_eq!(RandomEngine::with_seed(3).choose_move(&mut game), None);
        assert!(game.in_stalemate());
        assert_eq!(game.board(), &before_board);
        assert_eq!(game.side_to_move(), Color::White);
        assert!(game.move_log().is_empty());
    }
}
