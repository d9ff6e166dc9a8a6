//! Single-ply move record.
//!
//! A `ChessMove` remembers the piece that moved and the occupant of the
//! destination before the move so it can be undone. Equality and hashing
//! only look at the start/end coordinates: a move typed by a user compares
//! equal to the engine-generated move between the same squares.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Piece, Square};
use crate::utils::algebraic::square_to_algebraic;

#[derive(Debug, Clone, Copy)]
pub struct ChessMove {
    start: Square,
    end: Square,
    piece_moved: Piece,
    piece_captured: Option<Piece>,
}

impl ChessMove {
    #[inline]
    pub(crate) fn new(
        start: Square,
        end: Square,
        piece_moved: Piece,
        piece_captured: Option<Piece>,
    ) -> Self {
        Self {
            start,
            end,
            piece_moved,
            piece_captured,
        }
    }

    /// Builds a move between two squares, reading the moved and captured
    /// pieces from `board`. Does not check that the move is legal.
    pub fn from_board(start: Square, end: Square, board: &Board) -> ChessResult<Self> {
        let piece_moved = board
            .get(start)
            .ok_or(ChessError::EmptyStartSquare(start))?;
        Ok(Self::new(start, end, piece_moved, board.get(end)))
    }

    #[inline]
    pub fn start(&self) -> Square {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Square {
        self.end
    }

    #[inline]
    pub fn piece_moved(&self) -> Piece {
        self.piece_moved
    }

    /// Occupant of the destination before the move.
    #[inline]
    pub fn piece_captured(&self) -> Option<Piece> {
        self.piece_captured
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.piece_captured.is_some()
    }

    /// Packs the coordinates as `start_row start_col end_row end_col` decimal digits.
    pub fn move_id(&self) -> u16 {
        self.start.row() as u16 * 1000
            + self.start.col() as u16 * 100
            + self.end.row() as u16 * 10
            + self.end.col() as u16
    }

    /// Rank/file notation of start followed by end, e.g. `e2e4`.
    pub fn to_notation(&self) -> String {
        let mut out = square_to_algebraic(self.start);
        out.push_str(&square_to_algebraic(self.end));
        out
    }
}

impl PartialEq for ChessMove {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end
    }
}

impl Eq for ChessMove {}

impl Hash for ChessMove {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.start.hash(state);
        self.end.hash(state);
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_notation())
    }
}
