//! Aggregate game state: board, turn, king locations and the move log.
//!
//! `GameState` is the central model for the engine. Moves are applied and
//! undone in O(1) through the log; legality is decided elsewhere
//! (`move_generation::legal_move_generator`) and `apply_move` trusts its
//! caller.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{BLACK_KING_START, WHITE_KING_START};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::moves::chess_move::ChessMove;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

/// Terminal classification of the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Checkmate { winner: Color },
    Stalemate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    side_to_move: Color,
    // [white, black]
    king_squares: [Square; 2],
    move_log: Vec<ChessMove>,
    in_checkmate: bool,
    in_stalemate: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Standard initial position, white to move.
    pub fn new_game() -> Self {
        Self {
            board: Board::standard(),
            side_to_move: Color::White,
            king_squares: [WHITE_KING_START, BLACK_KING_START],
            move_log: Vec::new(),
            in_checkmate: false,
            in_stalemate: false,
        }
    }

    /// Builds a state from an arbitrary board. Each color must have exactly
    /// one king, and the side not to move must not be in check.
    pub fn from_board(board: Board, side_to_move: Color) -> ChessResult<Self> {
        let white_king = single_king(&board, Color::White)?;
        let black_king = single_king(&board, Color::Black)?;

        let waiting = side_to_move.opposite();
        let waiting_king = match waiting {
            Color::White => white_king,
            Color::Black => black_king,
        };
        if is_square_attacked(&board, waiting_king, side_to_move) {
            return Err(ChessError::OpponentInCheck {
                color: waiting,
                square: waiting_king,
            });
        }

        Ok(Self {
            board,
            side_to_move,
            king_squares: [white_king, black_king],
            move_log: Vec::new(),
            in_checkmate: false,
            in_stalemate: false,
        })
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn to_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.index()]
    }

    /// Applied moves in chronological order.
    #[inline]
    pub fn move_log(&self) -> &[ChessMove] {
        &self.move_log
    }

    #[inline]
    pub fn last_move(&self) -> Option<&ChessMove> {
        self.move_log.last()
    }

    /// Only valid immediately after [`GameState::legal_moves`]; not refreshed
    /// by `apply_move` or `undo_last`.
    #[inline]
    pub fn in_checkmate(&self) -> bool {
        self.in_checkmate
    }

    /// Same freshness contract as [`GameState::in_checkmate`].
    #[inline]
    pub fn in_stalemate(&self) -> bool {
        self.in_stalemate
    }

    /// Classification derived from the checkmate/stalemate flags, with the
    /// same freshness contract.
    pub fn status(&self) -> GameStatus {
        if self.in_checkmate {
            GameStatus::Checkmate {
                winner: self.side_to_move.opposite(),
            }
        } else if self.in_stalemate {
            GameStatus::Stalemate
        } else {
            GameStatus::Ongoing
        }
    }

    /// Executes `mv` without validating it.
    ///
    /// Precondition: `mv` came from `legal_moves()` for the current position.
    pub fn apply_move(&mut self, mv: ChessMove) {
        debug_assert_eq!(
            self.board.get(mv.start()),
            Some(mv.piece_moved()),
            "move {mv} does not match the board"
        );
        debug_assert!(
            mv.piece_captured()
                .map_or(true, |captured| captured.kind != PieceKind::King),
            "move {mv} captures a king"
        );

        let moved = mv.piece_moved();
        self.board.set(mv.start(), None);
        self.board.set(mv.end(), Some(moved));
        if moved.kind == PieceKind::King {
            self.king_squares[moved.color.index()] = mv.end();
        }
        self.side_to_move = self.side_to_move.opposite();
        self.move_log.push(mv);
    }

    /// Reverts the most recent move and returns it. No-op on an empty log.
    pub fn undo_last(&mut self) -> Option<ChessMove> {
        let mv = self.move_log.pop()?;

        let moved = mv.piece_moved();
        self.board.set(mv.start(), Some(moved));
        self.board.set(mv.end(), mv.piece_captured());
        if moved.kind == PieceKind::King {
            self.king_squares[moved.color.index()] = mv.start();
        }
        self.side_to_move = self.side_to_move.opposite();
        Some(mv)
    }

    pub(crate) fn set_terminal_flags(&mut self, in_checkmate: bool, in_stalemate: bool) {
        self.in_checkmate = in_checkmate;
        self.in_stalemate = in_stalemate;
    }
}

fn single_king(board: &Board, color: Color) -> ChessResult<Square> {
    let kings = board.find_pieces(Piece::new(color, PieceKind::King));
    match kings.as_slice() {
        [square] => Ok(*square),
        _ => Err(ChessError::KingCountViolation {
            color,
            found: kings.len(),
        }),
    }
}
