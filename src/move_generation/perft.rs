//! Perft: leaf-node counting over the legal move tree.
//!
//! Used as a correctness check for move generation and as the workload of
//! the criterion benchmark. The tree is walked in place with scoped
//! apply/undo, so the state is unchanged when the count returns (apart from
//! the checkmate/stalemate flags, which reflect the last generation).

use crate::game_state::game_state::GameState;
use crate::game_state::speculative_move::SpeculativeMove;
use crate::moves::chess_move::ChessMove;

pub fn perft(game_state: &mut GameState, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = game_state.legal_moves();
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for mv in moves {
        let mut child = SpeculativeMove::apply(game_state, mv);
        nodes += perft(&mut child, depth - 1);
    }
    nodes
}

/// Per-root-move node counts, in generation order.
pub fn perft_divide(game_state: &mut GameState, depth: u8) -> Vec<(ChessMove, u64)> {
    if depth == 0 {
        return Vec::new();
    }

    let moves = game_state.legal_moves();
    let mut out = Vec::with_capacity(moves.len());
    for mv in moves {
        let mut child = SpeculativeMove::apply(game_state, mv);
        out.push((mv, perft(&mut child, depth - 1)));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_position_node_counts() {
        let mut game = GameState::new_game();
        assert_eq!(perft(&mut game, 0), 1);
        assert_eq!(perft(&mut game, 1), 20);
        assert_eq!(perft(&mut game, 2), 400);
        assert_eq!(perft(&mut game, 3), 8_902);
    }

    #[test]
    fn perft_leaves_the_position_unchanged() {
        let mut game = GameState::new_game();
        let before = game.clone();
        perft(&mut game, 2);
        assert_eq!(game.board(), before.board());
        assert_eq!(game.move_log(), before.move_log());
        assert_eq!(game.side_to_move(), before.side_to_move());
    }

    #[test]
    fn divide_sums_to_perft() {
        let mut game = GameState::new_game();
        let divided = perft_divide(&mut game, 2);
        assert_eq!(divided.len(), 20);
        assert!(divided.iter().all(|(_, nodes)| *nodes == 20));
        assert_eq!(divided.iter().map(|(_, nodes)| nodes).sum::<u64>(), 400);
    }
}
