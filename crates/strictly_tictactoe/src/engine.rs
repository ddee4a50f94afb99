//! Stateful game engine: one game, validated moves, single-step undo.

use crate::error::{MoveError, StateError};
use crate::rules::{
    Line, apply_move, available_moves, describe_move, evaluate_game_state, next_player,
    validate_board_state, validate_move,
};
use crate::types::{BOARD_SIZE, Board, GameStatus, Player, Square};
use derive_getters::Getters;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Complete snapshot of one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEngineState {
    board: Board,
    current_player: Player,
    status: GameStatus,
    winner: Option<Player>,
    move_count: usize,
    winning_line: Option<Line>,
    move_history: Vec<String>,
    last_move: Option<usize>,
}

impl GameEngineState {
    fn fresh(starting_player: Player) -> Self {
        Self {
            board: Board::new(),
            current_player: starting_player,
            status: GameStatus::Playing,
            winner: None,
            move_count: 0,
            winning_line: None,
            move_history: Vec::new(),
            last_move: None,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move (the last mover once the game is over).
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Number of marks on the board.
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Completed line when the game was won.
    pub fn winning_line(&self) -> Option<Line> {
        self.winning_line
    }

    /// Human-readable move descriptions, oldest first.
    pub fn move_history(&self) -> &[String] {
        &self.move_history
    }

    /// Index of the most recent move still undoable.
    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    /// Contradictions between fields, empty for a well-formed snapshot.
    #[instrument(skip(self))]
    fn consistency_errors(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.move_count > BOARD_SIZE {
            errors.push(format!("move count {} exceeds 9", self.move_count));
        }
        if self.board.occupied() != self.move_count {
            errors.push(format!(
                "move count {} does not match {} occupied cells",
                self.move_count,
                self.board.occupied()
            ));
        }
        if let Some(index) = self.last_move
            && self.board.get(index).and_then(Square::player).is_none()
        {
            errors.push(format!("last move {} is not an occupied cell", index));
        }

        let eval = evaluate_game_state(&self.board, self.move_count);
        let expected = if eval.winner.is_some() {
            GameStatus::Won
        } else if eval.is_draw {
            GameStatus::Tie
        } else {
            GameStatus::Playing
        };
        if self.status != expected {
            errors.push(format!(
                "status {} does not match board ({})",
                self.status, expected
            ));
        }
        if self.winner != eval.winner || self.winning_line != eval.winning_line {
            errors.push("winner or winning line does not match board".to_string());
        }

        errors
    }
}

/// Fields to overwrite in [`GameEngine::load_state`]; `None` keeps the
/// current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialState {
    /// Replacement board.
    pub board: Option<Board>,
    /// Replacement player to move.
    pub current_player: Option<Player>,
    /// Replacement status.
    pub status: Option<GameStatus>,
    /// Replacement winner (`Some(None)` clears it).
    pub winner: Option<Option<Player>>,
    /// Replacement move count.
    pub move_count: Option<usize>,
    /// Replacement winning line (`Some(None)` clears it).
    pub winning_line: Option<Option<Line>>,
    /// Replacement move history.
    pub move_history: Option<Vec<String>>,
    /// Replacement last move (`Some(None)` clears it).
    pub last_move: Option<Option<usize>>,
}

/// Read-only projection of a game for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameSummary {
    /// Winner, if any.
    winner: Option<Player>,
    /// Final or current status.
    status: GameStatus,
    /// Marks on the board.
    move_count: usize,
    /// Entries in the move history.
    moves: usize,
    /// Board at the time of the summary.
    final_board: Board,
}

/// Tic-tac-toe game engine.
///
/// Owns exactly one [`GameEngineState`]. Every read hands out a clone, so
/// callers never observe or alter a half-applied move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    state: GameEngineState,
}

impl GameEngine {
    /// Creates a new game with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self::with_starting_player(Player::X)
    }

    /// Creates a new game with the given player to move first.
    #[instrument]
    pub fn with_starting_player(starting_player: Player) -> Self {
        Self {
            state: GameEngineState::fresh(starting_player),
        }
    }

    /// Returns a copy of the current state.
    pub fn state(&self) -> GameEngineState {
        self.state.clone()
    }

    /// Plays the current player's mark at `index`.
    ///
    /// On error the state is unchanged.
    #[instrument(skip(self), fields(player = %self.state.current_player))]
    pub fn make_move(&mut self, index: usize) -> Result<GameEngineState, MoveError> {
        if let Err(e) = validate_move(&self.state.board, index, self.is_game_over()) {
            warn!(index, error = %e, "Rejected move");
            return Err(e);
        }

        let player = self.state.current_player;
        let board = apply_move(&self.state.board, index, player)?;
        // move_count tracks occupied cells, so an empty target keeps it below 9
        let move_count = self.state.move_count + 1;
        let eval = evaluate_game_state(&board, move_count);
        let description = describe_move(index, player);

        self.state.board = board;
        self.state.current_player = if eval.is_game_over {
            player
        } else {
            next_player(player)
        };
        self.state.status = match (eval.winner, eval.is_draw) {
            (Some(_), _) => GameStatus::Won,
            (None, true) => GameStatus::Tie,
            (None, false) => GameStatus::Playing,
        };
        self.state.winner = eval.winner;
        self.state.move_count = move_count;
        self.state.winning_line = eval.winning_line;
        self.state.move_history.push(description);
        self.state.last_move = Some(index);

        debug!(index, move_count, status = %self.state.status, "Move applied");
        if let Some(winner) = eval.winner {
            info!(%winner, line = ?eval.winning_line, "Game won");
        } else if eval.is_draw {
            info!("Game tied");
        }

        Ok(self.state())
    }

    /// Starts over with an empty board and `starting_player` to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self, starting_player: Player) {
        info!("Game reset");
        self.state = GameEngineState::fresh(starting_player);
    }

    /// Starts over with X to move.
    pub fn reset_default(&mut self) {
        self.reset(Player::X);
    }

    /// Takes back the most recent move.
    ///
    /// Only one step is tracked: after an undo the previous move is no
    /// longer known and a second undo fails with
    /// [`MoveError::UndoUnavailable`].
    #[instrument(skip(self), fields(move_count = self.state.move_count))]
    pub fn undo_last_move(&mut self) -> Result<GameEngineState, MoveError> {
        if self.state.move_count == 0 {
            return Err(MoveError::NothingToUndo);
        }
        let index = self.state.last_move.ok_or(MoveError::UndoUnavailable)?;
        let removed = self
            .state
            .board
            .get(index)
            .and_then(Square::player)
            .ok_or(MoveError::UndoUnavailable)?;

        let mut board = self.state.board;
        board.set(index, Square::Empty)?;

        self.state.board = board;
        self.state.current_player = removed;
        self.state.status = GameStatus::Playing;
        self.state.winner = None;
        self.state.winning_line = None;
        self.state.move_count -= 1;
        self.state.move_history.pop();
        self.state.last_move = None;

        debug!(index, player = %removed, "Move undone");
        Ok(self.state())
    }

    /// Whether `index` is a legal move right now.
    pub fn is_valid_move(&self, index: usize) -> bool {
        validate_move(&self.state.board, index, self.is_game_over()).is_ok()
    }

    /// Empty cells in ascending order.
    pub fn available_moves(&self) -> Vec<usize> {
        available_moves(&self.state.board)
    }

    /// True once the game is won or tied.
    pub fn is_game_over(&self) -> bool {
        self.state.status.is_terminal()
    }

    /// Reporting view of the game.
    pub fn summary(&self) -> GameSummary {
        GameSummary {
            winner: self.state.winner,
            status: self.state.status,
            move_count: self.state.move_count,
            moves: self.state.move_history.len(),
            final_board: self.state.board,
        }
    }

    /// Merges `partial` over the current state.
    ///
    /// The merged board must pass [`validate_board_state`] and the other
    /// fields must agree with it (move count, status, winner, winning line
    /// and last move), as for [`GameEngine::import_state`]. Otherwise the
    /// state is left unchanged.
    #[instrument(skip(self, partial))]
    pub fn load_state(&mut self, partial: PartialState) -> Result<(), StateError> {
        let current = &self.state;
        let merged = GameEngineState {
            board: partial.board.unwrap_or(current.board),
            current_player: partial.current_player.unwrap_or(current.current_player),
            status: partial.status.unwrap_or(current.status),
            winner: partial.winner.unwrap_or(current.winner),
            move_count: partial.move_count.unwrap_or(current.move_count),
            winning_line: partial.winning_line.unwrap_or(current.winning_line),
            move_history: partial
                .move_history
                .unwrap_or_else(|| current.move_history.clone()),
            last_move: partial.last_move.unwrap_or(current.last_move),
        };

        let validation = validate_board_state(merged.board.squares());
        if !validation.is_valid() {
            warn!(errors = ?validation.errors, "Refusing to load invalid state");
            return Err(StateError::new(format!(
                "Invalid board state: {}",
                validation.errors.join("; ")
            )));
        }

        let errors = merged.consistency_errors();
        if !errors.is_empty() {
            warn!(?errors, "Refusing to load inconsistent state");
            return Err(StateError::new(format!(
                "Inconsistent state: {}",
                errors.join("; ")
            )));
        }

        debug!(board = %merged.board.to_compact(), "State loaded");
        self.state = merged;
        Ok(())
    }

    /// Serializes the full state as JSON.
    #[instrument(skip(self))]
    pub fn export_state(&self) -> Result<String, StateError> {
        Ok(serde_json::to_string(&self.state)?)
    }

    /// Rebuilds an engine from [`GameEngine::export_state`] output.
    #[instrument(skip(text), fields(len = text.len()))]
    pub fn import_state(text: &str) -> Result<Self, StateError> {
        let state: GameEngineState = serde_json::from_str(text).inspect_err(|e| {
            warn!(error = %e, "Failed to parse exported state");
        })?;

        let errors = state.consistency_errors();
        if !errors.is_empty() {
            warn!(?errors, "Exported state is inconsistent");
            return Err(StateError::new(format!(
                "Inconsistent state: {}",
                errors.join("; ")
            )));
        }

        info!(move_count = state.move_count, status = %state.status, "State imported");
        Ok(Self { state })
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Plays uniformly random legal moves from an empty board until the game ends.
#[instrument(skip(rng))]
pub fn simulate_random_game<R: Rng + ?Sized>(rng: &mut R) -> GameEngine {
    let mut engine = GameEngine::new();

    while !engine.is_game_over() {
        let Some(&index) = engine.available_moves().choose(rng) else {
            break;
        };
        if let Err(e) = engine.make_move(index) {
            warn!(index, error = %e, "Random move rejected");
            break;
        }
    }

    engine
}
