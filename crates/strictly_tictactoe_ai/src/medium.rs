//! Medium AI: a fixed priority chain of tactical rules.

use crate::config::{AiConfig, ThinkingDelay};
use crate::difficulty::Difficulty;
use crate::error::AiError;
use crate::evaluator::MoveEvaluator;
use crate::player::{AiMoveResult, AiPlayer, MoveChoice, think};
use rand::Rng;
use rand::seq::SliceRandom;
use strictly_tictactoe::{Board, LINES, Player, Position, Square};
use tracing::{debug, instrument};

/// Rule-based opponent.
///
/// Rules are tried in order and the first that applies decides:
/// win, block, fork, block a fork, center, corner, edge, anything.
#[derive(Debug, Clone)]
pub struct MediumAi {
    mark: Player,
    delay: ThinkingDelay,
}

impl MediumAi {
    /// Creates a medium AI for `mark`.
    #[instrument(skip(config))]
    pub fn new(mark: Player, config: &AiConfig) -> Self {
        Self {
            mark,
            delay: config.delay_for(Difficulty::Medium),
        }
    }

    /// Chooses a move without the thinking delay.
    ///
    /// Only the corner, edge and last-resort rules consult `rng`.
    #[instrument(skip(self, board, rng))]
    pub fn decide<R: Rng + ?Sized>(
        &self,
        board: &Board,
        mark: Player,
        rng: &mut R,
    ) -> Result<MoveChoice, AiError> {
        let moves = MoveEvaluator::open_moves(board)?;

        if let Some(cell) = moves
            .iter()
            .copied()
            .find(|&i| MoveEvaluator::is_winning_move(board, i, mark))
        {
            return Ok(MoveChoice::new(cell, 1.0, "Winning move found"));
        }

        if let Some(cell) = moves
            .iter()
            .copied()
            .find(|&i| MoveEvaluator::is_blocking_move(board, i, mark))
        {
            return Ok(MoveChoice::new(cell, 0.9, "Blocked opponent win"));
        }

        if let Some(cell) = fork_moves(board, &moves, mark).first().copied() {
            return Ok(MoveChoice::new(cell, 0.8, "Created fork opportunity"));
        }

        if let Some(cell) = block_fork_move(board, &moves, mark) {
            return Ok(MoveChoice::new(cell, 0.75, "Blocked opponent fork"));
        }

        if board.is_empty(Position::CENTER) {
            return Ok(MoveChoice::new(Position::CENTER, 0.7, "Took center position"));
        }

        Ok(positional_move(board, &moves, mark, rng))
    }
}

/// Cells after which `mark` has at least two distinct winning replies.
fn fork_moves(board: &Board, moves: &[usize], mark: Player) -> Vec<usize> {
    moves
        .iter()
        .copied()
        .filter(|&i| {
            MoveEvaluator::place(board, i, mark)
                .is_some_and(|next| MoveEvaluator::winning_moves(&next, mark).len() >= 2)
        })
        .collect()
}

/// Answers the opponent's fork threats.
///
/// A single fork cell is simply occupied. With several, a non-fork cell
/// that makes our own two-in-a-row is played so the opponent has to
/// respond instead of forking.
fn block_fork_move(board: &Board, moves: &[usize], mark: Player) -> Option<usize> {
    let opponent = mark.opponent();
    let opponent_forks = fork_moves(board, moves, opponent);
    debug!(?opponent_forks, "Opponent fork cells");

    match opponent_forks.as_slice() {
        [] => None,
        [only] => Some(*only),
        _ => moves
            .iter()
            .copied()
            .filter(|i| !opponent_forks.contains(i))
            .find(|&i| {
                MoveEvaluator::place(board, i, mark)
                    .is_some_and(|next| creates_two_in_a_row(&next, mark, i))
            }),
    }
}

/// Whether some line through `last_move` holds two of `mark` and one empty.
fn creates_two_in_a_row(board: &Board, mark: Player, last_move: usize) -> bool {
    LINES
        .iter()
        .filter(|line| line.contains(&last_move))
        .any(|line| {
            let own = line
                .iter()
                .filter(|&&i| board.get(i) == Some(Square::Occupied(mark)))
                .count();
            let empty = line.iter().filter(|&&i| board.is_empty(i)).count();
            own == 2 && empty == 1
        })
}

/// Corner, then edge, then any cell.
fn positional_move<R: Rng + ?Sized>(
    board: &Board,
    moves: &[usize],
    mark: Player,
    rng: &mut R,
) -> MoveChoice {
    let priorities = MoveEvaluator::strategic_priorities(board);
    let opponent = Square::Occupied(mark.opponent());

    let facing_opponent = priorities.corners.iter().copied().find(|&corner| {
        Position::from_index(corner)
            .and_then(Position::opposite_corner)
            .is_some_and(|opposite| board.get(opposite.to_index()) == Some(opponent))
    });
    if let Some(cell) = facing_opponent {
        return MoveChoice::new(cell, 0.6, "Strategic corner play");
    }
    if let Some(&cell) = priorities.corners.choose(rng) {
        return MoveChoice::new(cell, 0.6, "Took corner position");
    }
    if let Some(&cell) = priorities.edges.choose(rng) {
        return MoveChoice::new(cell, 0.4, "Took edge position");
    }

    // Center, corners and edges cover the board, so this is a formality.
    let cell = moves.choose(rng).copied().unwrap_or(Position::CENTER);
    MoveChoice::new(cell, 0.3, "Random available move")
}

#[async_trait::async_trait]
impl AiPlayer for MediumAi {
    #[instrument(skip(self, board), fields(ai = "medium"))]
    async fn make_move(&self, board: &Board, mark: Player) -> Result<AiMoveResult, AiError> {
        think(self.delay, |rng| self.decide(board, mark, rng)).await
    }

    fn name(&self) -> &str {
        Difficulty::Medium.info().name
    }

    fn description(&self) -> &str {
        Difficulty::Medium.info().description
    }

    fn difficulty(&self) -> Difficulty {
        Difficulty::Medium
    }

    fn mark(&self) -> Player {
        self.mark
    }

    fn evaluate_position(&self, board: &Board, mark: Player) -> Option<i32> {
        Some(MoveEvaluator::evaluate_board(board, mark))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn decide(s: &str, mark: Player) -> MoveChoice {
        let board: Board = s.parse().unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        MediumAi::new(mark, &AiConfig::headless())
            .decide(&board, mark, &mut rng)
            .unwrap()
    }

    #[test]
    fn test_win_before_block() {
        let choice = decide("XX.OO....", Player::X);
        assert_eq!((choice.cell, choice.confidence), (2, 1.0));
    }

    #[test]
    fn test_block() {
        let choice = decide("X..OO...X", Player::X);
        assert_eq!((choice.cell, choice.confidence), (5, 0.9));
    }

    #[test]
    fn test_creates_fork() {
        // X on 0 and 4, O on 1 and 8: X at 3 threatens both 5 and 6
        let choice = decide("XO..X...O", Player::X);
        assert_eq!(choice.reasoning, "Created fork opportunity");
        assert_eq!(choice.cell, 3);
        let board: Board = "XO..X...O".parse().unwrap();
        let next = MoveEvaluator::place(&board, choice.cell, Player::X).unwrap();
        assert!(MoveEvaluator::winning_moves(&next, Player::X).len() >= 2);
    }

    #[test]
    fn test_blocks_single_opponent_fork() {
        // X on 0 and 5, O in center: only X@2 forks, so O takes it
        let choice = decide("X...OX...", Player::O);
        assert_eq!(choice.reasoning, "Blocked opponent fork");
        assert_eq!((choice.cell, choice.confidence), (2, 0.75));
    }

    #[test]
    fn test_forces_response_against_double_fork() {
        // Classic opposite-corners trap: X on 0 and 8, O in center.
        // Corners 2 and 6 both fork for X, so O must play an edge.
        let choice = decide("X...O...X", Player::O);
        assert_eq!(choice.reasoning, "Blocked opponent fork");
        assert!(Position::EDGES.contains(&choice.cell));
        assert_eq!(choice.cell, 1);
    }

    #[test]
    fn test_takes_center() {
        let choice = decide(".........", Player::X);
        assert_eq!((choice.cell, choice.confidence), (4, 0.7));
    }

    #[test]
    fn test_corner_opposite_opponent() {
        // O on corner 8 and X in center: X prefers corner 0
        let choice = decide("....X...O", Player::X);
        assert_eq!(choice.cell, 0);
        assert_eq!(choice.reasoning, "Strategic corner play");
    }

    #[test]
    fn test_corner_opposite_last_corner() {
        // Opponent on corner 0 makes corner 8 the preferred reply
        let choice = decide("O...X....", Player::X);
        assert_eq!(choice.cell, 8);
    }

    #[test]
    fn test_full_board_fails() {
        let board: Board = "XOXXOOOXX".parse().unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let result = MediumAi::new(Player::X, &AiConfig::headless()).decide(&board, Player::X, &mut rng);
        assert_eq!(result, Err(AiError::NoAvailableMoves));
    }
}
