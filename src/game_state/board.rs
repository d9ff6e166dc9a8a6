//! 8x8 mailbox board.
//!
//! `squares[row][col]` holds the occupant of each square, with row 0 being
//! black's back rank (rank 8) and column 0 being file `a`.

use crate::game_state::chess_rules::BACK_RANK;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

pub const BOARD_SIZE: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    squares: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Standard initial setup.
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for (col, kind) in BACK_RANK.iter().enumerate() {
            board.squares[0][col] = Some(Piece::new(Color::Black, *kind));
            board.squares[1][col] = Some(Piece::new(Color::Black, PieceKind::Pawn));
            board.squares[6][col] = Some(Piece::new(Color::White, PieceKind::Pawn));
            board.squares[7][col] = Some(Piece::new(Color::White, *kind));
        }
        board
    }

    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.squares[square.row() as usize][square.col() as usize]
    }

    #[inline]
    pub fn set(&mut self, square: Square, occupant: Option<Piece>) {
        self.squares[square.row() as usize][square.col() as usize] = occupant;
    }

    #[inline]
    pub fn is_empty_square(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    /// Raw rows, top (rank 8) first.
    pub fn rows(&self) -> &[[Option<Piece>; BOARD_SIZE]; BOARD_SIZE] {
        &self.squares
    }

    /// Occupied squares in row-major scan order.
    pub fn occupied_squares(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares.iter().enumerate().flat_map(|(row, rank)| {
            rank.iter().enumerate().filter_map(move |(col, occupant)| {
                occupant.map(|piece| (Square::new(row as u8, col as u8), piece))
            })
        })
    }

    pub fn find_pieces(&self, piece: Piece) -> Vec<Square> {
        self.occupied_squares()
            .filter(|(_, occupant)| *occupant == piece)
            .map(|(square, _)| square)
            .collect()
    }
}
