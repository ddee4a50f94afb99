//! Batch utilities: timing a tier over positions and AI-vs-AI games.

use crate::config::AiConfig;
use crate::difficulty::Difficulty;
use crate::error::AiError;
use crate::manager::AiManager;
use crate::player::AiMoveResult;
use serde::Serialize;
use std::time::{Duration, Instant};
use strictly_tictactoe::{Board, Player, apply_move, available_moves, check_winner};
use tracing::{debug, info, instrument};

/// Default move cap for [`simulate_game`].
pub const DEFAULT_MAX_MOVES: usize = 20;

/// Timings and answers from [`benchmark`].
#[derive(Debug, Clone)]
pub struct BenchmarkReport {
    /// Wall time for all positions, delays included.
    pub total_time: Duration,
    /// `total_time` divided by the number of positions; zero when empty.
    pub average_time: Duration,
    /// One result per position, in input order.
    pub results: Vec<AiMoveResult>,
}

/// One move played during [`simulate_game`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulatedMove {
    /// Mark that moved.
    pub player: Player,
    /// Cell played.
    pub cell: usize,
    /// The AI's stated reason.
    pub reasoning: String,
}

/// Outcome of [`simulate_game`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationReport {
    /// Winning mark, if any.
    pub winner: Option<Player>,
    /// True when the board filled without a winner.
    pub is_draw: bool,
    /// Moves in play order.
    pub moves: Vec<SimulatedMove>,
    /// Board when the game stopped.
    pub final_board: Board,
    /// Number of moves played.
    pub total_moves: usize,
}

/// Asks a fresh `difficulty` AI playing `mark` for a move on each position.
///
/// Stops at the first position the AI cannot answer.
#[instrument(skip(positions, config), fields(positions = positions.len()))]
pub async fn benchmark(
    difficulty: Difficulty,
    positions: &[Board],
    mark: Player,
    config: &AiConfig,
) -> Result<BenchmarkReport, AiError> {
    let mut manager = AiManager::with_config(config.clone());
    manager.set_ai(difficulty, mark);

    let start = Instant::now();
    let mut results = Vec::with_capacity(positions.len());
    for board in positions {
        results.push(manager.make_ai_move(board, mark).await?);
    }
    let total_time = start.elapsed();

    let average_time = u32::try_from(positions.len())
        .ok()
        .filter(|&n| n > 0)
        .map_or(Duration::ZERO, |n| total_time / n);

    info!(
        total_ms = total_time.as_millis() as u64,
        average_ms = average_time.as_millis() as u64,
        "Benchmark complete"
    );
    Ok(BenchmarkReport {
        total_time,
        average_time,
        results,
    })
}

/// Plays `x` against `o` from an empty board, X first.
///
/// Ends on a win, a full board or after `max_moves` moves.
#[instrument(skip(config))]
pub async fn simulate_game(
    x: Difficulty,
    o: Difficulty,
    max_moves: usize,
    config: &AiConfig,
) -> Result<SimulationReport, AiError> {
    let mut x_manager = AiManager::with_config(config.clone());
    let mut o_manager = AiManager::with_config(config.clone());
    x_manager.set_ai(x, Player::X);
    o_manager.set_ai(o, Player::O);

    let mut board = Board::new();
    let mut current = Player::X;
    let mut moves = Vec::new();
    let mut winner = None;

    while moves.len() < max_moves && !available_moves(&board).is_empty() {
        let manager = match current {
            Player::X => &x_manager,
            Player::O => &o_manager,
        };
        let result = manager.make_ai_move(&board, current).await?;
        board = apply_move(&board, result.cell, current)?;
        debug!(player = %current, cell = result.cell, "Simulated move");
        moves.push(SimulatedMove {
            player: current,
            cell: result.cell,
            reasoning: result.reasoning,
        });

        winner = check_winner(&board);
        if winner.is_some() {
            break;
        }
        current = current.opponent();
    }

    let is_draw = winner.is_none() && available_moves(&board).is_empty();
    info!(?winner, is_draw, total_moves = moves.len(), "Simulation finished");
    Ok(SimulationReport {
        winner,
        is_draw,
        total_moves: moves.len(),
        final_board: board,
        moves,
    })
}

/// Opening and midgame positions used by the `arena benchmark` command.
pub fn standard_positions() -> Vec<Board> {
    [
        ".........",
        "....X....",
        "X........",
        "X...O....",
        "XX..O....",
        "X...O...X",
        "XO..X...O",
        "XOX.O....",
    ]
    .iter()
    .filter_map(|s| s.parse().ok())
    .collect()
}
