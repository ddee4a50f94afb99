//! Whole-board evaluation: who won, on which line, or whether it's a draw.

use super::win::{Line, winning_line};
use crate::types::{BOARD_SIZE, Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Result of evaluating a board after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEvaluation {
    /// Owner of the first completed line, if any.
    pub winner: Option<Player>,
    /// The completed line itself.
    pub winning_line: Option<Line>,
    /// No winner and all nine moves played.
    pub is_draw: bool,
    /// Either a win or a draw.
    pub is_game_over: bool,
}

/// Evaluates `board` given how many moves have been made.
///
/// Lines are scanned in fixed order and the first complete one wins.
/// Without a winner the game is drawn exactly when `move_count` is 9.
#[instrument(skip(board))]
pub fn evaluate_game_state(board: &Board, move_count: usize) -> GameEvaluation {
    if let Some((winner, line)) = winning_line(board) {
        return GameEvaluation {
            winner: Some(winner),
            winning_line: Some(line),
            is_draw: false,
            is_game_over: true,
        };
    }

    let is_draw = move_count == BOARD_SIZE;
    GameEvaluation {
        winner: None,
        winning_line: None,
        is_draw,
        is_game_over: is_draw,
    }
}
