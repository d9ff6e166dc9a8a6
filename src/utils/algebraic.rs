//! Rank/file coordinate conversions.
//!
//! Maps board coordinates to human-readable squares (`e4`) through fixed
//! lookup tables, and parses coordinate moves (`e2e4`) typed by a user.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;
use crate::moves::chess_move::ChessMove;

/// Row index to rank digit. Row 0 is rank 8.
pub const ROWS_TO_RANKS: [char; 8] = ['8', '7', '6', '5', '4', '3', '2', '1'];
/// Column index to file letter.
pub const COLS_TO_FILES: [char; 8] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    let mut out = String::with_capacity(2);
    out.push(COLS_TO_FILES[square.col() as usize]);
    out.push(ROWS_TO_RANKS[square.row() as usize]);
    out
}

pub fn algebraic_to_square(text: &str) -> ChessResult<Square> {
    let mut chars = text.chars();
    let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(ChessError::InvalidAlgebraicSquare(text.to_owned()));
    };

    let col = COLS_TO_FILES.iter().position(|&f| f == file.to_ascii_lowercase());
    let row = ROWS_TO_RANKS.iter().position(|&r| r == rank);
    match (row, col) {
        (Some(row), Some(col)) => Ok(Square::new(row as u8, col as u8)),
        _ => Err(ChessError::InvalidAlgebraicSquare(text.to_owned())),
    }
}

/// Parses `e2e4` into a move built from `board`. Legality is not checked.
pub fn parse_coordinate_move(text: &str, board: &Board) -> ChessResult<ChessMove> {
    let text = text.trim();
    if text.len() != 4 || !text.is_ascii() {
        return Err(ChessError::InvalidCoordinateMove(text.to_owned()));
    }

    let start = algebraic_to_square(&text[0..2])?;
    let end = algebraic_to_square(&text[2..4])?;
    ChessMove::from_board(start, end, board)
}
