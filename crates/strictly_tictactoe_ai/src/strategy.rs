//! Closed set of AI tiers behind one capability.

use crate::config::AiConfig;
use crate::difficulty::Difficulty;
use crate::easy::EasyAi;
use crate::error::AiError;
use crate::hard::HardAi;
use crate::medium::MediumAi;
use crate::player::{AiMoveResult, AiPlayer};
use strictly_tictactoe::{Board, Player};
use tracing::{info, instrument};

/// One of the three AI tiers.
#[derive(Debug, Clone, derive_more::From)]
pub enum AiStrategy {
    /// Random play with unreliable tactics.
    Easy(EasyAi),
    /// Rule chain.
    Medium(MediumAi),
    /// Minimax.
    Hard(HardAi),
}

impl AiStrategy {
    fn player(&self) -> &dyn AiPlayer {
        match self {
            AiStrategy::Easy(ai) => ai as &dyn AiPlayer,
            AiStrategy::Medium(ai) => ai,
            AiStrategy::Hard(ai) => ai,
        }
    }
}

/// Builds the strategy for `difficulty` playing `mark`.
#[instrument(skip(config))]
pub fn create_ai(difficulty: Difficulty, mark: Player, config: &AiConfig) -> AiStrategy {
    info!(%difficulty, %mark, "Creating AI player");
    match difficulty {
        Difficulty::Easy => EasyAi::new(mark, config).into(),
        Difficulty::Medium => MediumAi::new(mark, config).into(),
        Difficulty::Hard => HardAi::new(mark, config).into(),
    }
}

#[async_trait::async_trait]
impl AiPlayer for AiStrategy {
    async fn make_move(&self, board: &Board, mark: Player) -> Result<AiMoveResult, AiError> {
        self.player().make_move(board, mark).await
    }

    fn name(&self) -> &str {
        self.player().name()
    }

    fn description(&self) -> &str {
        self.player().description()
    }

    fn difficulty(&self) -> Difficulty {
        self.player().difficulty()
    }

    fn mark(&self) -> Player {
        self.player().mark()
    }

    fn evaluate_position(&self, board: &Board, mark: Player) -> Option<i32> {
        self.player().evaluate_position(board, mark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_factory_matches_difficulty() {
        let config = AiConfig::headless();
        for difficulty in Difficulty::iter() {
            let ai = create_ai(difficulty, Player::O, &config);
            assert_eq!(ai.difficulty(), difficulty);
            assert_eq!(ai.mark(), Player::O);
            assert_eq!(ai.name(), difficulty.info().name);
        }
    }

    #[tokio::test]
    async fn test_delegates_make_move() {
        let ai = create_ai(Difficulty::Hard, Player::X, &AiConfig::headless());
        let board: Board = "XX.OO....".parse().unwrap();
        let result = ai.make_move(&board, Player::X).await.unwrap();
        assert_eq!(result.cell, 2);
        assert_eq!(result.reasoning, "Found winning sequence");
    }
}
