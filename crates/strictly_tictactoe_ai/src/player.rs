//! The capability every AI tier implements.

use crate::config::ThinkingDelay;
use crate::difficulty::Difficulty;
use crate::error::AiError;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use strictly_tictactoe::{Board, Player};
use tracing::debug;

/// A chosen cell with the AI's own account of why.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiMoveResult {
    /// Board index 0-8.
    pub cell: usize,
    /// How sure the AI is, from 0 to 1.
    pub confidence: f64,
    /// Short rationale.
    pub reasoning: String,
    /// Wall time spent deciding, thinking delay included.
    pub evaluation_time: Duration,
}

/// Decision before timing information is attached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveChoice {
    /// Board index 0-8.
    pub cell: usize,
    /// How sure the AI is, from 0 to 1.
    pub confidence: f64,
    /// Short rationale.
    pub reasoning: &'static str,
}

impl MoveChoice {
    pub(crate) fn new(cell: usize, confidence: f64, reasoning: &'static str) -> Self {
        Self {
            cell,
            confidence,
            reasoning,
        }
    }
}

/// An AI opponent.
#[async_trait::async_trait]
pub trait AiPlayer: Send + Sync {
    /// Picks a cell for `mark` on `board`.
    ///
    /// Fails with [`AiError::NoAvailableMoves`] on a full board and with
    /// [`AiError::GameDecided`] when a line is already complete.
    async fn make_move(&self, board: &Board, mark: Player) -> Result<AiMoveResult, AiError>;

    /// Display name.
    fn name(&self) -> &str;

    /// One-line description of the play style.
    fn description(&self) -> &str;

    /// The tier this player belongs to.
    fn difficulty(&self) -> Difficulty;

    /// The mark this player was created for.
    fn mark(&self) -> Player;

    /// Optional static score of a position for analysis.
    fn evaluate_position(&self, _board: &Board, _mark: Player) -> Option<i32> {
        None
    }
}

/// Runs the thinking delay, then `decide`, and stamps the elapsed time.
pub(crate) async fn think<F>(
    delay: ThinkingDelay,
    decide: F,
) -> Result<AiMoveResult, AiError>
where
    F: FnOnce(&mut StdRng) -> Result<MoveChoice, AiError> + Send,
{
    let start = Instant::now();
    delay.pause().await;

    let mut rng = StdRng::from_entropy();
    let choice = decide(&mut rng)?;
    let evaluation_time = start.elapsed();

    debug!(
        cell = choice.cell,
        confidence = choice.confidence,
        reasoning = choice.reasoning,
        elapsed_ms = evaluation_time.as_millis() as u64,
        "AI chose move"
    );

    Ok(AiMoveResult {
        cell: choice.cell,
        confidence: choice.confidence,
        reasoning: choice.reasoning.to_string(),
        evaluation_time,
    })
}
