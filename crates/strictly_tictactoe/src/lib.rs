//! Strictly Tic-Tac-Toe - rules and game engine
//!
//! Pure board rules plus a stateful engine that enforces legality, turn
//! order and terminal-state detection for one 3x3 game.
//!
//! # Architecture
//!
//! - **Types**: marks, squares, the board and its compact text form
//! - **Rules**: pure functions for legality, win/draw detection and validation
//! - **Engine**: owns one game's state, applies validated moves, supports
//!   reset, single-step undo and JSON export/import
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{GameEngine, GameStatus, Player};
//!
//! let mut engine = GameEngine::new();
//! for index in [0, 3, 1, 4, 2] {
//!     engine.make_move(index).unwrap();
//! }
//! let state = engine.state();
//! assert_eq!(state.status(), GameStatus::Won);
//! assert_eq!(state.winner(), Some(Player::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod error;
mod position;
mod rules;
mod types;

// Crate-level exports - Core types
pub use types::{BOARD_SIZE, Board, GameStatus, Player, Square};

// Crate-level exports - Positions
pub use position::{CellKind, Position};

// Crate-level exports - Errors
pub use error::{BoardParseError, MoveError, StateError};

// Crate-level exports - Rules
pub use rules::draw::is_draw;
pub use rules::{
    BoardValidation, GameEvaluation, LINES, Line, apply_move, available_moves, check_winner,
    describe_move, evaluate_game_state, is_full, next_player, opponent, validate_board_state,
    validate_move, winning_line,
};

// Crate-level exports - Engine
pub use engine::{GameEngine, GameEngineState, GameSummary, PartialState, simulate_random_game};

