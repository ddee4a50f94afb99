//! Structural validation of a board's contents.

use crate::types::{BOARD_SIZE, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// Outcome of [`validate_board_state`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardValidation {
    /// Every problem found, empty when the board is valid.
    pub errors: Vec<String>,
}

impl BoardValidation {
    /// True when no errors were found.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Checks cell count and piece parity.
///
/// X moves first, so X must hold as many cells as O or exactly one more.
/// Cell values are always valid here; unknown symbols are rejected when
/// a board is parsed from text.
#[instrument(skip(cells), fields(len = cells.len()))]
pub fn validate_board_state(cells: &[Square]) -> BoardValidation {
    let mut errors = Vec::new();

    if cells.len() != BOARD_SIZE {
        errors.push(format!(
            "Board must have exactly {} cells, got {}",
            BOARD_SIZE,
            cells.len()
        ));
    }

    let x_count = cells
        .iter()
        .filter(|&&s| s == Square::Occupied(Player::X))
        .count();
    let o_count = cells
        .iter()
        .filter(|&&s| s == Square::Occupied(Player::O))
        .count();

    if x_count < o_count || x_count > o_count + 1 {
        errors.push(format!(
            "Invalid piece count - X goes first (X: {}, O: {})",
            x_count, o_count
        ));
    }

    if !errors.is_empty() {
        warn!(?errors, "Board state invalid");
    }

    BoardValidation { errors }
}
