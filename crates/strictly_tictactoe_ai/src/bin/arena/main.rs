//! Arena - batch runner for the tic-tac-toe AIs.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::path::PathBuf;
use strictly_tictactoe::Player;
use strictly_tictactoe_ai::{
    AiConfig, Difficulty, benchmark, simulate_game, standard_positions,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Simulate {
            x,
            o,
            games,
            max_moves,
            json,
            config,
        } => run_simulate(x, o, games, max_moves, json, config).await,
        Command::Benchmark {
            difficulty,
            mark,
            config,
        } => run_benchmark(difficulty, mark, config).await,
    }
}

/// Loads the config file, or the delay-free defaults when none is given.
fn load_config(path: Option<PathBuf>) -> Result<AiConfig> {
    match path {
        Some(path) => {
            info!(path = %path.display(), "Loading AI config");
            Ok(AiConfig::from_file(&path)?)
        }
        None => Ok(AiConfig::headless()),
    }
}

/// Plays `games` games and prints each result plus the tally.
#[instrument(skip(config_path))]
async fn run_simulate(
    x: Difficulty,
    o: Difficulty,
    games: usize,
    max_moves: usize,
    json: bool,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config(config_path)?;
    let (mut x_wins, mut o_wins, mut draws, mut unfinished) = (0, 0, 0, 0);

    for game in 1..=games {
        let report = simulate_game(x, o, max_moves, &config).await?;
        let outcome = match (report.winner, report.is_draw) {
            (Some(Player::X), _) => {
                x_wins += 1;
                "X wins"
            }
            (Some(Player::O), _) => {
                o_wins += 1;
                "O wins"
            }
            (None, true) => {
                draws += 1;
                "Draw"
            }
            (None, false) => {
                unfinished += 1;
                "Move cap reached"
            }
        };
        if json {
            println!("{}", serde_json::to_string(&report)?);
        } else {
            println!(
                "Game {game}: {outcome} after {} moves ({})",
                report.total_moves,
                report.final_board.to_compact()
            );
        }
    }

    println!("{x} (X) vs {o} (O) over {games} games");
    println!("  X wins:     {x_wins}");
    println!("  O wins:     {o_wins}");
    println!("  Draws:      {draws}");
    if unfinished > 0 {
        println!("  Unfinished: {unfinished}");
    }
    Ok(())
}

/// Times one difficulty over the standard positions and prints each answer.
#[instrument(skip(config_path))]
async fn run_benchmark(
    difficulty: Difficulty,
    mark: Player,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config(config_path)?;
    let positions = standard_positions();
    let report = benchmark(difficulty, &positions, mark, &config).await?;

    for (board, result) in positions.iter().zip(&report.results) {
        println!(
            "{} -> {} ({:.1}, {})",
            board.to_compact(),
            result.cell,
            result.confidence,
            result.reasoning
        );
    }
    println!(
        "{} positions: total {:?}, average {:?}",
        positions.len(),
        report.total_time,
        report.average_time
    );
    Ok(())
}
