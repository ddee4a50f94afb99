//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the engine and the AI players share one definition.

pub mod draw;
pub mod evaluation;
pub mod moves;
pub mod validation;
pub mod win;

pub use draw::is_full;
pub use evaluation::{GameEvaluation, evaluate_game_state};
pub use moves::{apply_move, available_moves, describe_move, next_player, opponent, validate_move};
pub use validation::{BoardValidation, validate_board_state};
pub use win::{LINES, Line, check_winner, winning_line};
