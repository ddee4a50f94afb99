//! Error types for AI players and the AI manager.

use derive_more::{Display, Error};
use strictly_tictactoe::MoveError;
use tracing::instrument;

/// Error raised while configuring an AI or asking it for a move.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum AiError {
    /// Difficulty name other than easy, medium or hard.
    #[display("Unknown AI difficulty: {}", _0)]
    UnknownDifficulty(String),

    /// `make_ai_move` was called before `set_ai`.
    #[display("No AI player configured")]
    NotConfigured,

    /// A move computation is already in flight.
    #[display("AI is already thinking")]
    AlreadyThinking,

    /// The board has no empty cell.
    #[display("No available moves")]
    NoAvailableMoves,

    /// The board already holds a completed line.
    #[display("Game is already decided")]
    GameDecided,

    /// A replayed AI move was rejected by the rules.
    #[display("AI produced an illegal move: {}", _0)]
    IllegalMove(MoveError),
}

impl From<MoveError> for AiError {
    fn from(err: MoveError) -> Self {
        AiError::IllegalMove(err)
    }
}

impl std::error::Error for AiError {}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
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
