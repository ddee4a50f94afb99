//! Command-line interface for the arena.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_tictactoe::Player;
use strictly_tictactoe_ai::{DEFAULT_MAX_MOVES, Difficulty};

/// Arena - pit tic-tac-toe AIs against each other or time them
#[derive(Parser, Debug)]
#[command(name = "arena")]
#[command(about = "Simulate and benchmark tic-tac-toe AIs", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play AI-vs-AI games and print the tally
    Simulate {
        /// Difficulty playing X
        #[arg(long)]
        x: Difficulty,

        /// Difficulty playing O
        #[arg(long)]
        o: Difficulty,

        /// Number of games
        #[arg(short, long, default_value = "1")]
        games: usize,

        /// Move cap per game
        #[arg(long, default_value_t = DEFAULT_MAX_MOVES)]
        max_moves: usize,

        /// Print each game report as a JSON line
        #[arg(long)]
        json: bool,

        /// AI config file; thinking delays are skipped when omitted
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Time one difficulty over the standard positions
    Benchmark {
        /// Difficulty to time
        #[arg(short, long)]
        difficulty: Difficulty,

        /// Mark the AI plays
        #[arg(short, long, default_value = "o")]
        mark: Player,

        /// AI config file; thinking delays are skipped when omitted
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}
