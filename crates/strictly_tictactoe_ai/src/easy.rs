//! Easy AI: mostly random, sometimes notices wins and blocks.

use crate::config::{AiConfig, ThinkingDelay};
use crate::difficulty::Difficulty;
use crate::error::AiError;
use crate::evaluator::MoveEvaluator;
use crate::player::{AiMoveResult, AiPlayer, MoveChoice, think};
use rand::Rng;
use rand::seq::SliceRandom;
use strictly_tictactoe::{Board, Player};
use tracing::instrument;

/// Beatable opponent that misses tactics on purpose.
///
/// With probability `win_detection_rate` it looks for an immediate win;
/// failing that, with probability `block_detection_rate` it looks for a
/// block. Anything unresolved becomes a uniformly random cell.
#[derive(Debug, Clone)]
pub struct EasyAi {
    mark: Player,
    win_detection_rate: f64,
    block_detection_rate: f64,
    delay: ThinkingDelay,
}

impl EasyAi {
    /// Creates an easy AI for `mark`.
    #[instrument(skip(config))]
    pub fn new(mark: Player, config: &AiConfig) -> Self {
        Self {
            mark,
            win_detection_rate: *config.win_detection_rate(),
            block_detection_rate: *config.block_detection_rate(),
            delay: config.delay_for(Difficulty::Easy),
        }
    }

    /// Chooses a move without the thinking delay.
    #[instrument(skip(self, board, rng))]
    pub fn decide<R: Rng + ?Sized>(
        &self,
        board: &Board,
        mark: Player,
        rng: &mut R,
    ) -> Result<MoveChoice, AiError> {
        let moves = MoveEvaluator::open_moves(board)?;

        if rng.gen_range(0.0..1.0) >= self.win_detection_rate {
            return random_choice(&moves, rng, 0.1, "Random move (missed win)");
        }
        if let Some(cell) = first_where(&moves, |i| MoveEvaluator::is_winning_move(board, i, mark)) {
            return Ok(MoveChoice::new(cell, 0.9, "Found winning move"));
        }

        if rng.gen_range(0.0..1.0) >= self.block_detection_rate {
            return random_choice(&moves, rng, 0.2, "Random move (missed block)");
        }
        if let Some(cell) = first_where(&moves, |i| MoveEvaluator::is_blocking_move(board, i, mark)) {
            return Ok(MoveChoice::new(cell, 0.7, "Blocked opponent winning move"));
        }

        random_choice(&moves, rng, 0.3, "Random move")
    }
}

fn first_where(moves: &[usize], pred: impl Fn(usize) -> bool) -> Option<usize> {
    moves.iter().copied().find(|&i| pred(i))
}

fn random_choice<R: Rng + ?Sized>(
    moves: &[usize],
    rng: &mut R,
    confidence: f64,
    reasoning: &'static str,
) -> Result<MoveChoice, AiError> {
    moves
        .choose(rng)
        .map(|&cell| MoveChoice::new(cell, confidence, reasoning))
        .ok_or(AiError::NoAvailableMoves)
}

#[async_trait::async_trait]
impl AiPlayer for EasyAi {
    #[instrument(skip(self, board), fields(ai = "easy"))]
    async fn make_move(&self, board: &Board, mark: Player) -> Result<AiMoveResult, AiError> {
        think(self.delay, |rng| self.decide(board, mark, rng)).await
    }

    fn name(&self) -> &str {
        Difficulty::Easy.info().name
    }

    fn description(&self) -> &str {
        Difficulty::Easy.info().description
    }

    fn difficulty(&self) -> Difficulty {
        Difficulty::Easy
    }

    fn mark(&self) -> Player {
        self.mark
    }

    /// Piece count difference.
    fn evaluate_position(&self, board: &Board, mark: Player) -> Option<i32> {
        Some(board.count(mark) as i32 - board.count(mark.opponent()) as i32)
    }
}
