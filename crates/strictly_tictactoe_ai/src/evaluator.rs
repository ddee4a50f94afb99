//! Stateless move checks shared by every AI tier.

use crate::error::AiError;
use strictly_tictactoe::{Board, CellKind, Player, Position, Square, available_moves};
use tracing::instrument;

/// Empty cells grouped by structural value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategicPriorities {
    /// The center, when empty.
    pub center: Option<usize>,
    /// Empty corners in index order.
    pub corners: Vec<usize>,
    /// Empty edges in index order.
    pub edges: Vec<usize>,
}

/// Move probing and static board scoring.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveEvaluator;

impl MoveEvaluator {
    /// Whether placing `mark` at the empty cell `index` completes a line.
    pub fn is_winning_move(board: &Board, index: usize, mark: Player) -> bool {
        Self::place(board, index, mark)
            .is_some_and(|next| Self::check_winner(&next) == Some(mark))
    }

    /// Whether the opponent would complete a line at `index`, so `mark`
    /// has to take it.
    pub fn is_blocking_move(board: &Board, index: usize, mark: Player) -> bool {
        Self::is_winning_move(board, index, mark.opponent())
    }

    /// Owner of a completed line, if any.
    pub fn check_winner(board: &Board) -> Option<Player> {
        strictly_tictactoe::check_winner(board)
    }

    /// Every empty cell that wins immediately for `mark`, ascending.
    pub fn winning_moves(board: &Board, mark: Player) -> Vec<usize> {
        available_moves(board)
            .into_iter()
            .filter(|&i| Self::is_winning_move(board, i, mark))
            .collect()
    }

    /// Static score from `mark`'s point of view.
    ///
    /// A decided board scores ±10. Otherwise the center is worth 3, each
    /// corner 2 and each edge 1, positive for `mark` and negative for the
    /// opponent.
    #[instrument(skip(board))]
    pub fn evaluate_board(board: &Board, mark: Player) -> i32 {
        match Self::check_winner(board) {
            Some(winner) if winner == mark => return 10,
            Some(_) => return -10,
            None => {}
        }

        Position::ALL
            .iter()
            .map(|&pos| {
                let weight = match pos.kind() {
                    CellKind::Center => 3,
                    CellKind::Corner => 2,
                    CellKind::Edge => 1,
                };
                match board.get(pos.to_index()) {
                    Some(Square::Occupied(p)) if p == mark => weight,
                    Some(Square::Occupied(_)) => -weight,
                    _ => 0,
                }
            })
            .sum()
    }

    /// Empty center, corners and edges.
    pub fn strategic_priorities(board: &Board) -> StrategicPriorities {
        let empty = |indices: &[usize]| -> Vec<usize> {
            indices.iter().copied().filter(|&i| board.is_empty(i)).collect()
        };
        StrategicPriorities {
            center: board.is_empty(Position::CENTER).then_some(Position::CENTER),
            corners: empty(&Position::CORNERS),
            edges: empty(&Position::EDGES),
        }
    }

    /// Empty cells of an undecided board, ascending.
    ///
    /// Fails with [`AiError::GameDecided`] once a line is complete and with
    /// [`AiError::NoAvailableMoves`] on a full board.
    pub fn open_moves(board: &Board) -> Result<Vec<usize>, AiError> {
        if Self::check_winner(board).is_some() {
            return Err(AiError::GameDecided);
        }
        let moves = available_moves(board);
        if moves.is_empty() {
            return Err(AiError::NoAvailableMoves);
        }
        Ok(moves)
    }

    /// Copy of `board` with `mark` at `index`, or `None` if the cell is taken.
    pub(crate) fn place(board: &Board, index: usize, mark: Player) -> Option<Board> {
        strictly_tictactoe::apply_move(board, index, mark).ok()
    }
}
