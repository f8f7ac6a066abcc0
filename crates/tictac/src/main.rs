//! Tictac - terminal tic-tac-toe
//!
//! Play, ask for a hint, or watch the computer play itself.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::Path;
use std::time::Duration;
use tictac::players::{ComputerPlayer, HumanPlayer};
use tictac::{Orchestrator, TictacConfig, simulate};
use tictac_engine::decision::minimax;
use tictac_engine::{Board, Difficulty, GameMode, GameSession, Player, select_move};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            mode,
            difficulty,
            delay_ms,
            seed,
        } => run_play(&config, mode, difficulty, delay_ms, seed),
        Command::Hint {
            board,
            side,
            difficulty,
            seed,
        } => run_hint(board, side, difficulty, seed),
        Command::Simulate { games, x, o, seed } => run_simulate(games, x, o, seed),
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Run an interactive game on stdin/stdout
#[instrument(skip_all, fields(config_path = %config_path.display()))]
fn run_play(
    config_path: &Path,
    mode: Option<GameMode>,
    difficulty: Option<Difficulty>,
    delay_ms: Option<u64>,
    seed: Option<u64>,
) -> Result<()> {
    let config = TictacConfig::load_or_default(config_path)?
        .with_overrides(mode, difficulty, delay_ms, seed);
    info!(?config, "Starting game");

    let session = GameSession::new(*config.mode(), *config.difficulty());
    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout();

    let mut orchestrator = match config.mode() {
        GameMode::PlayerVsPlayer => {
            let players = HumanPlayer::new("Players", stdin);
            Orchestrator::hot_seat(session, Box::new(players), stdout)
        }
        GameMode::PlayerVsComputer => {
            let human = HumanPlayer::new("You", stdin);
            let computer = ComputerPlayer::following_session(
                format!("Computer ({})", config.difficulty()),
                make_rng(*config.seed()),
            );
            Orchestrator::versus(session, Box::new(human), Box::new(computer), stdout)
                .with_think_delay(Duration::from_millis(*config.think_delay_ms()))
        }
    };

    orchestrator.run()?;
    Ok(())
}

/// Print the engine's view of a position
#[instrument(skip(board))]
fn run_hint(
    board: Board,
    side: Option<Player>,
    difficulty: Difficulty,
    seed: Option<u64>,
) -> Result<()> {
    let me = side.unwrap_or_else(|| board.to_move());
    println!("{}\n", board);

    let choice = select_move(&board, me, difficulty, &mut make_rng(seed))?;
    for (position, score) in minimax::score_moves(&board, me) {
        let verdict = match score {
            minimax::WIN => "win",
            minimax::DRAW => "draw",
            _ => "loss",
        };
        println!("{:>2} {:<14} {}", position.to_index() + 1, position.label(), verdict);
    }
    println!("\n{} ({}) plays {} ({})", me, difficulty, choice.to_index() + 1, choice);
    Ok(())
}

/// Run a computer-vs-computer match
#[instrument]
fn run_simulate(games: u32, x: Difficulty, o: Difficulty, seed: u64) -> Result<()> {
    let scores = simulate(games, x, o, seed)?;
    println!("X ({}) vs O ({}) over {} games", x, o, games);
    println!("{}", scores);
    Ok(())
}
