//! PGN export of the move log.
//!
//! Movetext uses the engine's coordinate notation (`e2e4`). The starting
//! position is recovered by unwinding the log on a copy of the state; a
//! non-standard start is recorded with `SetUp`/`FEN` headers.

use std::collections::BTreeMap;

use chrono::Local;

use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::{GameState, GameStatus};

/// Result token for the state's terminal flags (see [`GameState::status`]).
pub fn result_token(game_state: &GameState) -> &'static str {
    match game_state.status() {
        GameStatus::Ongoing => "*",
        GameStatus::Checkmate {
            winner: Color::White,
        } => "1-0",
        GameStatus::Checkmate {
            winner: Color::Black,
        } => "0-1",
        GameStatus::Stalemate => "1/2-1/2",
    }
}

pub fn write_pgn(game_state: &GameState, white: &str, black: &str) -> String {
    let mut headers = BTreeMap::<String, String>::new();
    headers.insert("Event".to_owned(), "Casual Game".to_owned());
    headers.insert("Site".to_owned(), "Local".to_owned());
    headers.insert("Date".to_owned(), Local::now().format("%Y.%m.%d").to_string());
    headers.insert("Round".to_owned(), "-".to_owned());
    headers.insert("White".to_owned(), white.to_owned());
    headers.insert("Black".to_owned(), black.to_owned());
    write_pgn_with_headers(game_state, &headers)
}

pub fn write_pgn_with_headers(game_state: &GameState, headers: &BTreeMap<String, String>) -> String {
    let mut headers = headers.clone();
    let result = result_token(game_state);
    headers.insert("Result".to_owned(), result.to_owned());

    let initial = initial_position(game_state);
    let initial_fen = initial.to_fen();
    if initial_fen != STARTING_POSITION_FEN {
        headers.insert("SetUp".to_owned(), "1".to_owned());
        headers.insert("FEN".to_owned(), initial_fen);
    }

    let mut out = String::new();
    for (key, value) in &headers {
        out.push_str(&format!("[{} \"{}\"]\n", key, escape_pgn_value(value)));
    }
    out.push('\n');

    let mut movetext_parts = Vec::<String>::with_capacity(game_state.move_log().len() + 1);
    let black_first = initial.side_to_move() == Color::Black;
    for (index, mv) in game_state.move_log().iter().enumerate() {
        let ply = index + usize::from(black_first);
        let number = ply / 2 + 1;
        if ply % 2 == 0 {
            movetext_parts.push(format!("{number}. {mv}"));
        } else if index == 0 {
            movetext_parts.push(format!("{number}... {mv}"));
        } else {
            movetext_parts.push(mv.to_string());
        }
    }
    movetext_parts.push(result.to_owned());
    out.push_str(&movetext_parts.join(" "));
    out.push('\n');

    out
}

fn initial_position(game_state: &GameState) -> GameState {
    let mut initial = game_state.clone();
    while initial.undo_last().is_some() {}
    initial
}

fn escape_pgn_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::algebraic::parse_coordinate_move;

    fn play(game: &mut GameState, moves: &[&str]) {
        for text in moves {
            let typed = parse_coordinate_move(text, game.board()).expect("move should parse");
            let legal = game.legal_moves();
            let mv = legal
                .into_iter()
                .find(|candidate| *candidate == typed)
                .expect("move should be legal");
            game.apply_move(mv);
        }
        game.legal_moves();
    }

    fn fixed_headers() -> BTreeMap<String, String> {
        let mut headers = BTreeMap::new();
        headers.insert("Event".to_owned(), "Test".to_owned());
        headers
    }

    #[test]
    fn fools_mate_movetext() {
        let mut game = GameState::new_game();
        play(&mut game, &["f2f3", "e7e5", "g2g4", "d8h4"]);
        let pgn = write_pgn_with_headers(&game, &fixed_headers());
        assert_eq!(
            pgn,
            "[Event \"Test\"]\n[Result \"0-1\"]\n\n1. f2f3 e7e5 2. g2g4 d8h4 0-1\n"
        );
    }

    #[test]
    fn custom_start_records_setup_headers() {
        let mut game = GameState::from_fen("4k3/8/8/8/8/8/4P3/4K3 b - - 0 1").expect("fen should parse");
        play(&mut game, &["e8d8", "e2e4"]);
        let pgn = write_pgn_with_headers(&game, &fixed_headers());
        assert!(pgn.contains("[SetUp \"1\"]"));
        assert!(pgn.contains("[FEN \"4k3/8/8/8/8/8/4P3/4K3 b - - 0 1\"]"));
        assert!(pgn.ends_with("1... e8d8 2. e2e4 *\n"));
    }

    #[test]
    fn write_pgn_fills_standard_headers() {
        let game = GameState::new_game();
        let pgn = write_pgn(&game, "Alice", "Random");
        assert!(pgn.contains("[White \"Alice\"]"));
        assert!(pgn.contains("[Black \"Random\"]"));
        assert!(pgn.contains("[Date \""));
        assert!(pgn.ends_with("\n*\n"));
    }
}
