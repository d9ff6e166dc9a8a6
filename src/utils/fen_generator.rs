//! GameState-to-FEN serializer.

use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;

/// Placement and side to move, padded with `- - 0 1` for the rule fields
/// the engine does not track.
pub fn generate_fen(game_state: &GameState) -> String {
    let mut out = String::with_capacity(64);

    for (row, rank) in game_state.board().rows().iter().enumerate() {
        if row > 0 {
            out.push('/');
        }
        let mut empty_run = 0u8;
        for occupant in rank {
            match occupant {
                Some(piece) => {
                    if empty_run > 0 {
                        out.push(char::from(b'0' + empty_run));
                        empty_run = 0;
                    }
                    out.push(piece.to_fen_char());
                }
                None => empty_run += 1,
            }
        }
        if empty_run > 0 {
            out.push(char::from(b'0' + empty_run));
        }
    }

    out.push(' ');
    out.push(match game_state.side_to_move() {
        Color::White => 'w',
        Color::Black => 'b',
    });
    out.push_str(" - - 0 1");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;

    #[test]
    fn new_game_serializes_to_starting_fen() {
        assert_eq!(generate_fen(&GameState::new_game()), STARTING_POSITION_FEN);
    }

    #[test]
    fn side_and_gaps_are_written() {
        let fen = "r3k3/8/8/3pP3/8/8/8/4K2R b - - 0 1";
        let state = GameState::from_fen(fen).expect("fen should parse");
        assert_eq!(generate_fen(&state), fen);
    }
}
