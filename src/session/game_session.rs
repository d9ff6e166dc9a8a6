//! Terminal game session and command loop.
//!
//! Owns the game state and the cached legal moves of the current position,
//! routes typed moves through set-membership against that cache, and lets
//! the random engine answer when it is an engine side's turn.

use std::io::{self, BufRead, Write};

use log::info;

use crate::chess_errors::{ChessError, ChessResult};
use crate::engines::engine_random::RandomEngine;
use crate::engines::engine_trait::Engine;
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::{GameState, GameStatus};
use crate::moves::chess_move::ChessMove;
use crate::session::session_command::{SessionCommand, HELP_TEXT};
use crate::utils::algebraic::parse_coordinate_move;
use crate::utils::pgn::write_pgn;
use crate::utils::render_game_state::render_game_state;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerKind {
    Human,
    RandomEngine,
}

#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub white: PlayerKind,
    pub black: PlayerKind,
    /// Seed for the engine; OS entropy when `None`.
    pub seed: Option<u64>,
    /// Starting position; the standard setup when `None`.
    pub start_fen: Option<String>,
}

impl SessionConfig {
    pub fn two_player() -> Self {
        Self {
            white: PlayerKind::Human,
            black: PlayerKind::Human,
            seed: None,
            start_fen: None,
        }
    }

    pub fn vs_random(human: Color) -> Self {
        let (white, black) = match human {
            Color::White => (PlayerKind::Human, PlayerKind::RandomEngine),
            Color::Black => (PlayerKind::RandomEngine, PlayerKind::Human),
        };
        Self {
            white,
            black,
            seed: None,
            start_fen: None,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::two_player()
    }
}

pub struct GameSession {
    config: SessionConfig,
    initial_state: GameState,
    game_state: GameState,
    legal_moves: Vec<ChessMove>,
    engine: RandomEngine,
}

impl GameSession {
    pub fn new(config: SessionConfig) -> ChessResult<Self> {
        let initial_state = match &config.start_fen {
            Some(fen) => GameState::from_fen(fen)?,
            None => GameState::new_game(),
        };
        let engine = config
            .seed
            .map_or_else(RandomEngine::new, RandomEngine::with_seed);

        let mut session = Self {
            config,
            game_state: initial_state.clone(),
            initial_state,
            legal_moves: Vec::new(),
            engine,
        };
        session.refresh();
        info!(
            "new session: white={:?} black={:?} fen={}",
            session.config.white,
            session.config.black,
            session.game_state.to_fen()
        );
        Ok(session)
    }

    #[inline]
    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    /// Legal moves of the current position, recomputed after every change.
    #[inline]
    pub fn legal_moves(&self) -> &[ChessMove] {
        &self.legal_moves
    }

    pub fn is_game_over(&self) -> bool {
        self.game_state.status() != GameStatus::Ongoing
    }

    pub fn player(&self, color: Color) -> PlayerKind {
        match color {
            Color::White => self.config.white,
            Color::Black => self.config.black,
        }
    }

    pub fn is_engine_turn(&self) -> bool {
        self.player(self.game_state.side_to_move()) == PlayerKind::RandomEngine
    }

    /// Plays a coordinate move typed by a human. Rejected input leaves the
    /// position untouched.
    pub fn play_human_move(&mut self, text: &str) -> ChessResult<ChessMove> {
        if self.is_game_over() {
            return Err(ChessError::GameOver(self.status_line()));
        }
        if self.is_engine_turn() {
            return Err(ChessError::IllegalMove(format!(
                "{text}: {} is played by the engine",
                self.game_state.side_to_move()
            )));
        }

        let typed = parse_coordinate_move(text, self.game_state.board())?;
        let mv = self
            .legal_moves
            .iter()
            .copied()
            .find(|legal| *legal == typed)
            .ok_or_else(|| ChessError::IllegalMove(typed.to_notation()))?;

        self.game_state.apply_move(mv);
        self.refresh();
        Ok(mv)
    }

    /// Lets the engine move if the side to move is engine-controlled and the
    /// game is still running. Plays at most one ply.
    pub fn play_engine_turn(&mut self) -> Option<ChessMove> {
        if self.is_game_over() || !self.is_engine_turn() {
            return None;
        }

        let mv = self.engine.choose_move(&mut self.game_state)?;
        self.game_state.apply_move(mv);
        self.refresh();
        Some(mv)
    }

    /// Takes back the last ply, and keeps going while an engine is to move so
    /// a human gets the turn back. Returns the number of plies undone.
    pub fn undo(&mut self) -> usize {
        let mut undone = 0;
        if self.game_state.undo_last().is_some() {
            undone += 1;
            while self.is_engine_turn() && self.game_state.undo_last().is_some() {
                undone += 1;
            }
        }
        self.refresh();
        undone
    }

    pub fn restart(&mut self) {
        self.game_state = self.initial_state.clone();
        self.engine.new_game();
        self.refresh();
        info!("game restarted");
    }

    pub fn status_line(&self) -> String {
        let side = self.game_state.side_to_move();
        match self.game_state.status() {
            GameStatus::Checkmate { winner } => format!("checkmate, {winner} wins"),
            GameStatus::Stalemate => "stalemate".to_owned(),
            GameStatus::Ongoing if self.game_state.is_in_check(side) => {
                format!("{side} to move, in check")
            }
            GameStatus::Ongoing => format!("{side} to move"),
        }
    }

    /// Greets the user and lets an engine playing white open the game.
    pub fn start(&mut self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "type 'help' for commands")?;
        self.write_engine_reply(out)?;
        self.write_position(out)
    }

    /// Handles one input line. Returns `true` when the session should end.
    pub fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let command = match SessionCommand::parse(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(false),
            Err(err) => {
                writeln!(out, "error: {err}")?;
                return Ok(false);
            }
        };

        match command {
            SessionCommand::Move(text) => match self.play_human_move(&text) {
                Ok(mv) => {
                    writeln!(out, "{} plays {mv}", mv.piece_moved().color)?;
                    self.write_engine_reply(out)?;
                    self.write_position(out)?;
                }
                Err(err) => writeln!(out, "error: {err}")?,
            },
            SessionCommand::Undo => {
                if self.undo() == 0 {
                    writeln!(out, "nothing to undo")?;
                } else {
                    self.write_engine_reply(out)?;
                    self.write_position(out)?;
                }
            }
            SessionCommand::Restart => {
                self.restart();
                writeln!(out, "new game")?;
                self.write_engine_reply(out)?;
                self.write_position(out)?;
            }
            SessionCommand::Moves(from) => {
                let listed: Vec<String> = self
                    .legal_moves
                    .iter()
                    .filter(|mv| from.map_or(true, |square| mv.start() == square))
                    .map(ChessMove::to_notation)
                    .collect();
                writeln!(out, "{} legal: {}", listed.len(), listed.join(" "))?;
            }
            SessionCommand::Board => self.write_position(out)?,
            SessionCommand::Fen => writeln!(out, "{}", self.game_state.to_fen())?,
            SessionCommand::Pgn => {
                let white = self.player_name(Color::White);
                let black = self.player_name(Color::Black);
                write!(out, "{}", write_pgn(&self.game_state, &white, &black))?;
            }
            SessionCommand::Help => writeln!(out, "{HELP_TEXT}")?,
            SessionCommand::Quit => return Ok(true),
        }

        Ok(false)
    }

    fn refresh(&mut self) {
        self.legal_moves = self.game_state.legal_moves();
        if self.is_game_over() {
            info!("game over: {}", self.status_line());
        }
    }

    fn player_name(&self, color: Color) -> String {
        match self.player(color) {
            PlayerKind::Human => "Human".to_owned(),
            PlayerKind::RandomEngine => self.engine.name().to_owned(),
        }
    }

    fn write_engine_reply(&mut self, out: &mut impl Write) -> io::Result<()> {
        if let Some(mv) = self.play_engine_turn() {
            writeln!(
                out,
                "{} ({}) plays {mv}",
                mv.piece_moved().color,
                self.engine.name()
            )?;
        }
        Ok(())
    }

    fn write_position(&self, out: &mut impl Write) -> io::Result<()> {
        write!(out, "{}", render_game_state(&self.game_state))?;
        writeln!(out, "{}", self.status_line())
    }
}

pub fn run_stdio_loop(session: &mut GameSession) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    session.start(&mut stdout)?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = session.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}
