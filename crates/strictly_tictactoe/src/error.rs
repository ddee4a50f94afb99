//! Error types for the tic-tac-toe engine.

use derive_more::{Display, Error};
use tracing::instrument;

/// Error that can occur when validating, applying or undoing a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MoveError {
    /// The index is outside 0-8.
    #[display("Move index {} out of bounds", _0)]
    OutOfBounds(usize),

    /// The game has already ended.
    #[display("Game is already over")]
    GameOver,

    /// The cell at the index is already occupied.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(usize),

    /// Undo was requested on an empty board.
    #[display("No moves to undo")]
    NothingToUndo,

    /// The previous move is no longer tracked (only one undo step is kept).
    #[display("Cannot determine last move")]
    UndoUnavailable,
}

impl std::error::Error for MoveError {}

/// Error parsing a board from its compact string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum BoardParseError {
    /// The string does not describe exactly nine cells.
    #[display("Board must have exactly 9 cells, got {}", _0)]
    WrongLength(usize),

    /// A character other than `X`, `O` or `.` was found.
    #[display("Invalid cell value '{}'", _0)]
    InvalidCell(char),
}

impl std::error::Error for BoardParseError {}

/// Error loading, importing or exporting engine state.
#[derive(Debug, Clone, Display, Error)]
#[display("State error: {} at {}:{}", message, file, line)]
pub struct StateError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl StateError {
    /// Creates a new state error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<serde_json::Error> for StateError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("Malformed state: {}", err))
    }
}

impl From<BoardParseError> for StateError {
    #[track_caller]
    fn from(err: BoardParseError) -> Self {
        Self::new(format!("Malformed board: {}", err))
    }
}
