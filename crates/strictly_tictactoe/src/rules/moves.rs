//! Move legality, application and description.

use crate::error::MoveError;
use crate::position::Position;
use crate::types::{BOARD_SIZE, Board, Player, Square};
use tracing::instrument;

/// Checks whether `index` may be played on `board`.
///
/// Checks run in order: bounds, game over, occupancy.
#[instrument(skip(board))]
pub fn validate_move(board: &Board, index: usize, is_game_over: bool) -> Result<(), MoveError> {
    if index >= BOARD_SIZE {
        return Err(MoveError::OutOfBounds(index));
    }
    if is_game_over {
        return Err(MoveError::GameOver);
    }
    if !board.is_empty(index) {
        return Err(MoveError::CellOccupied(index));
    }
    Ok(())
}

/// Returns a copy of `board` with `player` placed at `index`.
///
/// The input board is left untouched. Placing onto an occupied cell is a
/// caller bug; validate first.
pub fn apply_move(board: &Board, index: usize, player: Player) -> Result<Board, MoveError> {
    if index >= BOARD_SIZE {
        return Err(MoveError::OutOfBounds(index));
    }
    if !board.is_empty(index) {
        return Err(MoveError::CellOccupied(index));
    }
    let mut next = *board;
    next.set(index, Square::Occupied(player))?;
    Ok(next)
}

/// Empty cell indices in ascending order.
pub fn available_moves(board: &Board) -> Vec<usize> {
    (0..BOARD_SIZE).filter(|&i| board.is_empty(i)).collect()
}

/// The player who moves after `player`.
pub fn next_player(player: Player) -> Player {
    player.opponent()
}

/// The other mark.
pub fn opponent(player: Player) -> Player {
    player.opponent()
}

/// Human-readable history entry, e.g. `X -> Row 1, Col 2 (1)`.
#[instrument]
pub fn describe_move(index: usize, player: Player) -> String {
    match Position::from_index(index) {
        Some(pos) => format!(
            "{} -> Row {}, Col {} ({})",
            player,
            pos.row() + 1,
            pos.col() + 1,
            index
        ),
        None => format!("{} -> ({})", player, index),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_move_order_of_checks() {
        let board: Board = "X........".parse().unwrap();
        assert_eq!(validate_move(&board, 9, true), Err(MoveError::OutOfBounds(9)));
        assert_eq!(validate_move(&board, 0, true), Err(MoveError::GameOver));
        assert_eq!(validate_move(&board, 0, false), Err(MoveError::CellOccupied(0)));
        assert_eq!(validate_move(&board, 1, false), Ok(()));
    }

    #[test]
    fn test_apply_move_returns_new_board() {
        let board = Board::new();
        let next = apply_move(&board, 4, Player::X).unwrap();
        assert!(board.is_empty(4));
        assert_eq!(next.get(4), Some(Square::Occupied(Player::X)));
    }

    #[test]
    fn test_apply_move_rejects_occupied() {
        let board: Board = "....O....".parse().unwrap();
        assert_eq!(apply_move(&board, 4, Player::X), Err(MoveError::CellOccupied(4)));
    }

    #[test]
    fn test_available_moves_ascending() {
        let board: Board = "X...O...X".parse().unwrap();
        assert_eq!(available_moves(&board), vec![1, 2, 3, 5, 6, 7]);
    }

    #[test]
    fn test_describe_move() {
        assert_eq!(describe_move(0, Player::X), "X -> Row 1, Col 1 (0)");
        assert_eq!(describe_move(5, Player::O), "O -> Row 2, Col 3 (5)");
    }

    #[test]
    fn test_players_toggle() {
        assert_eq!(next_player(Player::X), Player::O);
        assert_eq!(opponent(Player::O), Player::X);
    }
}
