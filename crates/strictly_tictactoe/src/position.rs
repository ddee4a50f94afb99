//! Named board positions and their row/column geometry.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Structural category of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellKind {
    /// The middle cell (4).
    Center,
    /// Cells 0, 2, 6 and 8.
    Corner,
    /// Cells 1, 3, 5 and 7.
    Edge,
}

/// A position on the tic-tac-toe board (0-8).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (position 0)
    TopLeft,
    /// Top-center (position 1)
    TopCenter,
    /// Top-right (position 2)
    TopRight,
    /// Middle-left (position 3)
    MiddleLeft,
    /// Center (position 4)
    Center,
    /// Middle-right (position 5)
    MiddleRight,
    /// Bottom-left (position 6)
    BottomLeft,
    /// Bottom-center (position 7)
    BottomCenter,
    /// Bottom-right (position 8)
    BottomRight,
}

impl Position {
    /// All 9 positions in index order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// The four corners, in index order.
    pub const CORNERS: [usize; 4] = [0, 2, 6, 8];

    /// The four edges, in index order.
    pub const EDGES: [usize; 4] = [1, 3, 5, 7];

    /// Index of the center cell.
    pub const CENTER: usize = 4;

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Creates position from board index.
    #[instrument]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates position from zero-based row and column.
    #[instrument]
    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row >= 3 || col >= 3 {
            return None;
        }
        Self::from_index(row * 3 + col)
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Zero-based row.
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Zero-based column.
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// Whether this is the center, a corner or an edge.
    pub fn kind(self) -> CellKind {
        match self {
            Position::Center => CellKind::Center,
            Position::TopLeft
            | Position::TopRight
            | Position::BottomLeft
            | Position::BottomRight => CellKind::Corner,
            _ => CellKind::Edge,
        }
    }

    /// The corner diagonally across the board, for corners only.
    pub fn opposite_corner(self) -> Option<Self> {
        match self {
            Position::TopLeft => Some(Position::BottomRight),
            Position::TopRight => Some(Position::BottomLeft),
            Position::BottomLeft => Some(Position::TopRight),
            Position::BottomRight => Some(Position::TopLeft),
            _ => None,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_index_round_trip() {
        for pos in Position::iter() {
            assert_eq!(Position::from_index(pos.to_index()), Some(pos));
            assert_eq!(Position::from_row_col(pos.row(), pos.col()), Some(pos));
        }
        assert_eq!(Position::from_index(9), None);
        assert_eq!(Position::from_row_col(1, 3), None);
    }

    #[test]
    fn test_kinds_match_index_tables() {
        let corners: Vec<usize> = Position::iter()
            .filter(|p| p.kind() == CellKind::Corner)
            .map(Position::to_index)
            .collect();
        let edges: Vec<usize> = Position::iter()
            .filter(|p| p.kind() == CellKind::Edge)
            .map(Position::to_index)
            .collect();
        assert_eq!(corners, Position::CORNERS);
        assert_eq!(edges, Position::EDGES);
        assert_eq!(Position::Center.to_index(), Position::CENTER);
    }

    #[test]
    fn test_opposite_corners() {
        assert_eq!(
            Position::BottomRight.opposite_corner(),
            Some(Position::TopLeft)
        );
        assert_eq!(Position::TopRight.opposite_corner(), Some(Position::BottomLeft));
        assert_eq!(Position::Center.opposite_corner(), None);
    }
}
