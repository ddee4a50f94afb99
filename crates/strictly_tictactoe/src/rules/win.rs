//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Player, Square};

/// Three cell indices forming a row, column or diagonal.
pub type Line = [usize; 3];

/// The eight winning lines: rows, then columns, then diagonals.
pub const LINES: [Line; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the first completed line in [`LINES`] order with its owner.
pub fn winning_line(board: &Board) -> Option<(Player, Line)> {
    LINES.into_iter().find_map(|line| {
        let [a, b, c] = line;
        match board.get(a) {
            Some(Square::Occupied(player))
                if board.get(b) == Some(Square::Occupied(player))
                    && board.get(c) == Some(Square::Occupied(player)) =>
            {
                Some((player, line))
            }
            _ => None,
        }
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|(player, _)| player)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        assert_eq!(
            winning_line(&board("XXXOO....")),
            Some((Player::X, [0, 1, 2]))
        );
    }

    #[test]
    fn test_winner_diagonal() {
        assert_eq!(
            winning_line(&board("O.X.OX..O")),
            Some((Player::O, [0, 4, 8]))
        );
    }

    #[test]
    fn test_winner_anti_diagonal_and_column() {
        assert_eq!(winning_line(&board("..X.X.X..")), Some((Player::X, [2, 4, 6])));
        assert_eq!(winning_line(&board(".O..O..O.")), Some((Player::O, [1, 4, 7])));
    }

    #[test]
    fn test_no_winner_incomplete() {
        assert_eq!(check_winner(&board("XX.......")), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        assert_eq!(check_winner(&board("XOX......")), None);
    }
}
