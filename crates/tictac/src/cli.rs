//! Command-line interface for tictac.

use clap::{Parser, Subcommand};
use tictac_engine::{Board, Difficulty, GameMode, Player};

/// Tictac - tic-tac-toe against a friend or the computer
#[derive(Parser, Debug)]
#[command(name = "tictac")]
#[command(about = "Tic-tac-toe against a friend or the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Path to settings file
        #[arg(short, long, default_value = "tictac.toml")]
        config: std::path::PathBuf,

        /// "pvp" or "ai"
        #[arg(short, long)]
        mode: Option<GameMode>,

        /// "easy", "medium" or "hard"
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Milliseconds the computer pauses before answering
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Seed for the computer's random choices
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show the computer's choice and the minimax score of every empty square
    Hint {
        /// Nine cells of X, O or _ in row-major order, e.g. "X_O_X____"
        #[arg(short, long)]
        board: Board,

        /// Side to move (inferred from mark counts if omitted)
        #[arg(long = "as", value_parser = parse_player)]
        side: Option<Player>,

        /// Policy used for the suggested move
        #[arg(short, long, default_value = "hard")]
        difficulty: Difficulty,

        /// Seed for easy and medium choices
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Play computer against computer and print the tally
    Simulate {
        /// Number of games
        #[arg(short, long, default_value = "100")]
        games: u32,

        /// Difficulty for X
        #[arg(short, long, default_value = "hard")]
        x: Difficulty,

        /// Difficulty for O
        #[arg(short, long, default_value = "hard")]
        o: Difficulty,

        /// Seed for both players' random choices
        #[arg(long, default_value = "0")]
        seed: u64,
    },
}

fn parse_player(s: &str) -> Result<Player, String> {
    match s.trim() {
        "X" | "x" => Ok(Player::X),
        "O" | "o" => Ok(Player::O),
        other => Err(format!("expected X or O, got {:?}", other)),
    }
}
