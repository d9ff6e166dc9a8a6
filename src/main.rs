use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use sq_chess::game_state::chess_types::Color;
use sq_chess::session::game_session::{run_stdio_loop, GameSession, SessionConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Both sides are entered at the keyboard.
    TwoPlayer,
    /// One side is played by the random-move engine.
    VsRandom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SideArg {
    White,
    Black,
}

impl From<SideArg> for Color {
    fn from(side: SideArg) -> Self {
        match side {
            SideArg::White => Color::White,
            SideArg::Black => Color::Black,
        }
    }
}

/// Play chess in the terminal.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    #[arg(long, value_enum, default_value_t = Mode::TwoPlayer)]
    mode: Mode,

    /// Side played at the keyboard in vs-random mode.
    #[arg(long, value_enum, default_value_t = SideArg::White)]
    human_color: SideArg,

    /// Seed for the random engine.
    #[arg(long)]
    seed: Option<u64>,

    /// Start from this position instead of the standard setup.
    #[arg(long)]
    fen: Option<String>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let mut config = match args.mode {
        Mode::TwoPlayer => SessionConfig::two_player(),
        Mode::VsRandom => SessionConfig::vs_random(args.human_color.into()),
    };
    config.seed = args.seed;
    config.start_fen = args.fen;

    let mut session = match GameSession::new(config) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = run_stdio_loop(&mut session) {
        eprintln!("error: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
