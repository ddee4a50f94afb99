//! Owns the active AI and refuses overlapping move requests.

use crate::config::AiConfig;
use crate::difficulty::Difficulty;
use crate::error::AiError;
use crate::player::{AiMoveResult, AiPlayer};
use crate::strategy::{AiStrategy, create_ai};
use std::sync::atomic::{AtomicBool, Ordering};
use strictly_tictactoe::{Board, Player};
use tracing::{debug, info, instrument, warn};

/// Holds at most one AI player and tracks whether it is computing.
///
/// Build one per game session and share it by reference. Only one
/// `make_ai_move` may be in flight; a second concurrent call fails with
/// [`AiError::AlreadyThinking`] instead of waiting.
#[derive(Debug, Default)]
pub struct AiManager {
    ai: Option<AiStrategy>,
    thinking: AtomicBool,
    config: AiConfig,
}

/// Clears the thinking flag when the move future finishes or is dropped.
struct ThinkingGuard<'a>(&'a AtomicBool);

impl Drop for ThinkingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl AiManager {
    /// Manager with default settings and no AI.
    pub fn new() -> Self {
        Self::default()
    }

    /// Manager whose AIs are built from `config`.
    pub fn with_config(config: AiConfig) -> Self {
        Self {
            ai: None,
            thinking: AtomicBool::new(false),
            config,
        }
    }

    /// Settings used for new AIs.
    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    /// Replaces the active AI.
    #[instrument(skip(self))]
    pub fn set_ai(&mut self, difficulty: Difficulty, mark: Player) {
        self.ai = Some(create_ai(difficulty, mark, &self.config));
        info!(%difficulty, %mark, "AI configured");
    }

    /// Replaces the active AI from a difficulty name.
    #[instrument(skip(self))]
    pub fn set_ai_by_name(&mut self, name: &str, mark: Player) -> Result<(), AiError> {
        let difficulty = name.parse::<Difficulty>().map_err(|_| {
            warn!(name, "Unknown difficulty");
            AiError::UnknownDifficulty(name.to_string())
        })?;
        self.set_ai(difficulty, mark);
        Ok(())
    }

    /// The active AI, if any.
    pub fn ai(&self) -> Option<&AiStrategy> {
        self.ai.as_ref()
    }

    /// Whether a move computation is in flight.
    pub fn is_thinking(&self) -> bool {
        self.thinking.load(Ordering::Acquire)
    }

    /// Asks the active AI for a move.
    ///
    /// The thinking flag is released on success, on failure and if the
    /// returned future is dropped early.
    #[instrument(skip(self, board), fields(board = %board.to_compact()))]
    pub async fn make_ai_move(&self, board: &Board, mark: Player) -> Result<AiMoveResult, AiError> {
        let Some(ai) = self.ai.as_ref() else {
            warn!("Move requested without an AI");
            return Err(AiError::NotConfigured);
        };

        if self
            .thinking
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            warn!("Move requested while AI is thinking");
            return Err(AiError::AlreadyThinking);
        }
        let _guard = ThinkingGuard(&self.thinking);

        let result = ai.make_move(board, mark).await;
        match &result {
            Ok(r) => debug!(cell = r.cell, confidence = r.confidence, "AI move ready"),
            Err(e) => warn!(error = %e, "AI move failed"),
        }
        result
    }

    /// Name of the active AI, or "No AI".
    pub fn name(&self) -> &str {
        self.ai.as_ref().map_or("No AI", |ai| ai.name())
    }

    /// Description of the active AI, or "No AI configured".
    pub fn description(&self) -> &str {
        self.ai
            .as_ref()
            .map_or("No AI configured", |ai| ai.description())
    }

    /// Difficulty of the active AI.
    pub fn difficulty(&self) -> Option<Difficulty> {
        self.ai.as_ref().map(AiPlayer::difficulty)
    }

    /// The active AI's static score of `board`, if it offers one.
    pub fn evaluate_position(&self, board: &Board, mark: Player) -> Option<i32> {
        self.ai.as_ref()?.evaluate_position(board, mark)
    }
}
