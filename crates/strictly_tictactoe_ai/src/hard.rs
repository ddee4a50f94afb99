//! Hard AI: depth-bounded minimax with alpha-beta pruning.

use crate::config::{AiConfig, ThinkingDelay};
use crate::difficulty::Difficulty;
use crate::error::AiError;
use crate::evaluator::MoveEvaluator;
use crate::player::{AiMoveResult, AiPlayer, MoveChoice, think};
use serde::{Deserialize, Serialize};
use strictly_tictactoe::{Board, LINES, Player, Square, available_moves};
use tracing::{debug, instrument};

/// Base score for a decided game; depth is subtracted to prefer quick wins.
const WIN_SCORE: i32 = 10;

/// Score and commentary for one candidate cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveAnalysis {
    /// Candidate cell.
    pub cell: usize,
    /// Minimax score after playing `cell`.
    pub score: i32,
    /// Reasoning string for the score band.
    pub reasoning: String,
}

/// Perfect-play opponent within its depth limit.
#[derive(Debug, Clone)]
pub struct HardAi {
    mark: Player,
    max_depth: usize,
    delay: ThinkingDelay,
}

impl HardAi {
    /// Creates a hard AI for `mark`.
    #[instrument(skip(config))]
    pub fn new(mark: Player, config: &AiConfig) -> Self {
        Self {
            mark,
            // The root always searches at least one ply
            max_depth: (*config.max_depth()).max(1),
            delay: config.delay_for(Difficulty::Hard),
        }
    }

    /// Search depth ceiling.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Best cell for `mark` and its score, or `None` on a full or already
    /// decided board.
    ///
    /// Ties keep the lowest index.
    #[instrument(skip(self, board))]
    pub fn best_move(&self, board: &Board, mark: Player) -> Option<(usize, i32)> {
        let (score, cell) = self.minimax(board, 0, mark, i32::MIN, i32::MAX, true);
        debug!(?cell, score, "Minimax result");
        cell.map(|c| (c, score))
    }

    /// Chooses a move without the thinking delay.
    #[instrument(skip(self, board))]
    pub fn decide(&self, board: &Board, mark: Player) -> Result<MoveChoice, AiError> {
        let move_count = MoveEvaluator::open_moves(board)?.len();
        let (cell, score) = self.best_move(board, mark).ok_or(AiError::NoAvailableMoves)?;
        Ok(MoveChoice::new(
            cell,
            confidence_for(score),
            reasoning_for(score, move_count),
        ))
    }

    /// Scores every available cell for `mark`, best first.
    ///
    /// Each candidate is played and the reply searched with a fresh window,
    /// so the scores are exact rather than pruning bounds.
    #[instrument(skip(self, board))]
    pub fn analyze_moves(&self, board: &Board, mark: Player) -> Vec<MoveAnalysis> {
        let moves = available_moves(board);
        let move_count = moves.len();
        let mut analysis: Vec<MoveAnalysis> = moves
            .into_iter()
            .filter_map(|cell| {
                let next = MoveEvaluator::place(board, cell, mark)?;
                let (score, _) = self.minimax(&next, 1, mark, i32::MIN, i32::MAX, false);
                Some(MoveAnalysis {
                    cell,
                    score,
                    reasoning: reasoning_for(score, move_count).to_string(),
                })
            })
            .collect();
        analysis.sort_by(|a, b| b.score.cmp(&a.score).then(a.cell.cmp(&b.cell)));
        analysis
    }

    /// Returns `(score, best cell)` from `mark`'s point of view.
    ///
    /// `maximizing` is true when `mark` is to move. Scores are `10 - depth`
    /// for a win, `depth - 10` for a loss and 0 for a draw; at the depth
    /// ceiling the line heuristic stands in.
    fn minimax(
        &self,
        board: &Board,
        depth: usize,
        mark: Player,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> (i32, Option<usize>) {
        let depth_score = i32::try_from(depth).unwrap_or(WIN_SCORE);
        match MoveEvaluator::check_winner(board) {
            Some(winner) if winner == mark => return (WIN_SCORE - depth_score, None),
            Some(_) => return (depth_score - WIN_SCORE, None),
            None => {}
        }

        let moves = available_moves(board);
        if moves.is_empty() {
            return (0, None);
        }
        if depth >= self.max_depth {
            return (line_heuristic(board, mark), None);
        }

        let to_move = if maximizing { mark } else { mark.opponent() };
        let mut best_cell = None;
        let mut best_score = if maximizing { i32::MIN } else { i32::MAX };

        for cell in moves {
            let Some(next) = MoveEvaluator::place(board, cell, to_move) else {
                continue;
            };
            let (score, _) = self.minimax(&next, depth + 1, mark, alpha, beta, !maximizing);

            if maximizing {
                if score > best_score {
                    best_score = score;
                    best_cell = Some(cell);
                }
                alpha = alpha.max(score);
            } else {
                if score < best_score {
                    best_score = score;
                    best_cell = Some(cell);
                }
                beta = beta.min(score);
            }

            if beta <= alpha {
                break;
            }
        }

        (best_score, best_cell)
    }
}

/// Sums a per-line score from `mark`'s point of view.
///
/// A decided board scores ±10. Otherwise lines holding both marks count 0,
/// two or one own marks score 10 or 1, and the opponent's score the
/// negation.
pub fn line_heuristic(board: &Board, mark: Player) -> i32 {
    match MoveEvaluator::check_winner(board) {
        Some(winner) if winner == mark => return WIN_SCORE,
        Some(_) => return -WIN_SCORE,
        None => {}
    }

    LINES
        .iter()
        .map(|line| {
            let (own, theirs) = line.iter().fold((0, 0), |(own, theirs), &i| match board.get(i) {
                Some(Square::Occupied(p)) if p == mark => (own + 1, theirs),
                Some(Square::Occupied(_)) => (own, theirs + 1),
                _ => (own, theirs),
            });
            match (own, theirs) {
                (0, n) => -weight(n),
                (n, 0) => weight(n),
                _ => 0,
            }
        })
        .sum()
}

fn weight(count: usize) -> i32 {
    match count {
        3 => 100,
        2 => 10,
        1 => 1,
        _ => 0,
    }
}

/// Maps a minimax score onto a confidence in `[0.3, 1.0]`.
pub fn confidence_for(score: i32) -> f64 {
    match score {
        s if s >= 8 => 1.0,
        s if s >= 4 => 0.9,
        s if s >= 1 => 0.8,
        0 => 0.7,
        s if s >= -1 => 0.6,
        s if s >= -4 => 0.5,
        s if s >= -8 => 0.4,
        _ => 0.3,
    }
}

/// Explains a minimax score; `move_count` is the number of legal moves.
pub fn reasoning_for(score: i32, move_count: usize) -> &'static str {
    match score {
        s if s >= 8 => "Found winning sequence",
        s if s >= 4 => "Strong tactical advantage",
        s if s >= 1 => "Favorable position",
        0 => "Balanced position, best available",
        s if s >= -1 => "Defensive move",
        s if s >= -4 => "Damage control",
        s if s >= -8 => "Preventing immediate loss",
        _ if move_count == 1 => "Only move available",
        _ => "Minimizing opponent advantage",
    }
}

#[async_trait::async_trait]
impl AiPlayer for HardAi {
    #[instrument(skip(self, board), fields(ai = "hard"))]
    async fn make_move(&self, board: &Board, mark: Player) -> Result<AiMoveResult, AiError> {
        think(self.delay, |_| self.decide(board, mark)).await
    }

    fn name(&self) -> &str {
        Difficulty::Hard.info().name
    }

    fn description(&self) -> &str {
        Difficulty::Hard.info().description
    }

    fn difficulty(&self) -> Difficulty {
        Difficulty::Hard
    }

    fn mark(&self) -> Player {
        self.mark
    }

    fn evaluate_position(&self, board: &Board, mark: Player) -> Option<i32> {
        Some(line_heuristic(board, mark))
    }
}
