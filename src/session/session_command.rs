//! Text commands accepted by the terminal game session.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Square;
use crate::utils::algebraic::algebraic_to_square;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// Coordinate move such as `e2e4`.
    Move(String),
    Undo,
    Restart,
    /// Legal moves, optionally only those leaving one square.
    Moves(Option<Square>),
    Board,
    Fen,
    Pgn,
    Help,
    Quit,
}

impl SessionCommand {
    /// Parses one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> ChessResult<Option<Self>> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        let lowered = trimmed.to_ascii_lowercase();
        if let Some(square) = lowered.strip_prefix("moves ") {
            let from = algebraic_to_square(square.trim())?;
            return Ok(Some(SessionCommand::Moves(Some(from))));
        }

        let command = match lowered.as_str() {
            "undo" | "z" => SessionCommand::Undo,
            "restart" | "r" => SessionCommand::Restart,
            "moves" => SessionCommand::Moves(None),
            "board" => SessionCommand::Board,
            "fen" => SessionCommand::Fen,
            "pgn" => SessionCommand::Pgn,
            "help" | "?" => SessionCommand::Help,
            "quit" | "exit" | "q" => SessionCommand::Quit,
            other if looks_like_coordinate_move(other) => SessionCommand::Move(other.to_owned()),
            _ => return Err(ChessError::UnknownCommand(trimmed.to_owned())),
        };
        Ok(Some(command))
    }
}

fn looks_like_coordinate_move(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() == 4
        && bytes[0].is_ascii_alphabetic()
        && bytes[1].is_ascii_digit()
        && bytes[2].is_ascii_alphabetic()
        && bytes[3].is_ascii_digit()
}

pub const HELP_TEXT: &str = "\
commands:
  e2e4      move a piece from one square to another
  undo, z   take back the last move (and the engine reply)
  restart   start a new game
  moves     list legal moves
  moves e2  list legal moves of the piece on e2
  board     show the board
  fen       print the position as FEN
  pgn       print the game record
  quit      leave";
