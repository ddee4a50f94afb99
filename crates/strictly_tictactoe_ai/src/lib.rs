//! Strictly Tic-Tac-Toe AI - computer opponents for the rules engine
//!
//! Three interchangeable tiers behind the [`AiPlayer`] capability, plus an
//! [`AiManager`] that owns the active tier and refuses overlapping requests.
//!
//! # Architecture
//!
//! - **Evaluator**: stateless move checks (winning cells, blocks, static scores)
//! - **Players**: [`EasyAi`], [`MediumAi`] and [`HardAi`], unified by
//!   [`AiStrategy`] and built with [`create_ai`]
//! - **Manager**: single-flight wrapper around the active strategy
//! - **Arena**: benchmarking and AI-vs-AI simulation
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{Board, Player};
//! use strictly_tictactoe_ai::{AiConfig, AiManager, Difficulty};
//!
//! # tokio_test_block(async {
//! let mut manager = AiManager::with_config(AiConfig::headless());
//! manager.set_ai(Difficulty::Hard, Player::O);
//! let board: Board = "XX..O....".parse().unwrap();
//! let result = manager.make_ai_move(&board, Player::O).await.unwrap();
//! assert_eq!(result.cell, 2);
//! # });
//! # fn tokio_test_block(f: impl std::future::Future<Output = ()>) {
//! #     tokio::runtime::Runtime::new().unwrap().block_on(f);
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod arena;
mod config;
mod difficulty;
mod easy;
mod error;
mod evaluator;
mod hard;
mod manager;
mod medium;
mod player;
mod strategy;

// Crate-level exports - Configuration
pub use config::{AiConfig, ThinkingDelay};

// Crate-level exports - Errors
pub use error::{AiError, ConfigError};

// Crate-level exports - Players
pub use difficulty::{AiInfo, Difficulty};
pub use easy::EasyAi;
pub use evaluator::{MoveEvaluator, StrategicPriorities};
pub use hard::{HardAi, MoveAnalysis, confidence_for, line_heuristic, reasoning_for};
pub use medium::MediumAi;
pub use player::{AiMoveResult, AiPlayer, MoveChoice};
pub use strategy::{AiStrategy, create_ai};

// Crate-level exports - Manager
pub use manager::AiManager;

// Crate-level exports - Batch utilities
pub use arena::{
    BenchmarkReport, DEFAULT_MAX_MOVES, SimulatedMove, SimulationReport, benchmark, simulate_game,
    standard_positions,
};
