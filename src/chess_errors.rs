//! Errors used at the parsing and driver boundaries of the engine.
//!
//! Core rule operations (apply, undo, generation, attack queries) are total
//! and never return errors. `ChessError` covers the places where outside
//! input enters the crate: algebraic squares and moves typed by a user,
//! FEN position setup, and session commands that the current position
//! cannot accept.

use thiserror::Error;

use crate::game_state::chess_types::{Color, Square};

pub type ChessResult<T> = Result<T, ChessError>;

/// Unified error type for the chess engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    /// A square written as file letter + rank digit could not be parsed.
    #[error("invalid algebraic square '{0}'")]
    InvalidAlgebraicSquare(String),

    /// A coordinate move (for example `e2e4`) was malformed.
    #[error("invalid coordinate move '{0}'")]
    InvalidCoordinateMove(String),

    /// A FEN string was structurally invalid.
    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    /// The position does not hold exactly one king of `color`.
    #[error("expected exactly one {color} king, found {found}")]
    KingCountViolation { color: Color, found: usize },

    /// The side that just moved is in check, so its king could be captured.
    #[error("{color} king on {square} is in check but it is not {color}'s turn")]
    OpponentInCheck { color: Color, square: Square },

    /// A move was requested from a square with no piece on it.
    #[error("no piece on start square {0}")]
    EmptyStartSquare(Square),

    /// The requested move is not among the legal moves of the position.
    #[error("illegal move {0}")]
    IllegalMove(String),

    /// The game has ended; only undo/restart are accepted.
    #[error("game is over ({0})")]
    GameOver(String),

    /// An unknown session command was entered.
    #[error("unknown command '{0}'")]
    UnknownCommand(String),
}
