//! Property-based tests for the rules and the engine.

use proptest::prelude::*;
use strictly_tictactoe::{
    Board, GameEngine, GameStatus, LINES, Player, Square, apply_move, evaluate_game_state,
    validate_move,
};

/// A sequence of move choices, each reduced modulo the legal moves left.
fn arb_choices() -> impl Strategy<Value = Vec<usize>> {
    proptest::collection::vec(0usize..9, 0..9)
}

/// Arbitrary (possibly unreachable) board.
fn arb_board() -> impl Strategy<Value = Board> {
    let square = prop_oneof![
        Just(Square::Empty),
        Just(Square::Occupied(Player::X)),
        Just(Square::Occupied(Player::O)),
    ];
    proptest::array::uniform9(square).prop_map(Board::from_squares)
}

fn line_complete(board: &Board) -> bool {
    LINES.iter().any(|&[a, b, c]| {
        matches!(board.get(a), Some(Square::Occupied(p))
            if board.get(b) == Some(Square::Occupied(p)) && board.get(c) == Some(Square::Occupied(p)))
    })
}

proptest! {
    #[test]
    fn prop_move_count_and_alternation(choices in arb_choices()) {
        let mut engine = GameEngine::new();
        let mut made = 0;

        for choice in choices {
            if engine.is_game_over() {
                break;
            }
            let moves = engine.available_moves();
            let before = engine.state().current_player();
            let state = engine.make_move(moves[choice % moves.len()]).unwrap();
            made += 1;

            prop_assert_eq!(state.move_count(), made);
            prop_assert_eq!(state.move_count(), state.board().occupied());
            if state.status() == GameStatus::Playing {
                prop_assert_eq!(state.current_player(), before.opponent());
            } else {
                prop_assert_eq!(state.current_player(), before);
            }
        }
    }

    #[test]
    fn prop_evaluation_matches_lines(board in arb_board()) {
        let move_count = board.occupied();
        let eval = evaluate_game_state(&board, move_count);

        prop_assert_eq!(eval.winner.is_some(), line_complete(&board));
        prop_assert_eq!(eval.is_draw, move_count == 9 && !line_complete(&board));
        if let (Some(winner), Some(line)) = (eval.winner, eval.winning_line) {
            for index in line {
                prop_assert_eq!(board.get(index), Some(Square::Occupied(winner)));
            }
        }
    }

    #[test]
    fn prop_filled_cell_never_valid_again(board in arb_board(), index in 0usize..9) {
        if board.is_empty(index) {
            let next = apply_move(&board, index, Player::X).unwrap();
            prop_assert!(validate_move(&next, index, false).is_err());
        } else {
            prop_assert!(validate_move(&board, index, false).is_err());
        }
    }

    #[test]
    fn prop_export_import_round_trip(choices in arb_choices()) {
        let mut engine = GameEngine::new();
        for choice in choices {
            if engine.is_game_over() {
                break;
            }
            let moves = engine.available_moves();
            engine.make_move(moves[choice % moves.len()]).unwrap();
        }

        let text = engine.export_state().unwrap();
        let restored = GameEngine::import_state(&text).unwrap();
        prop_assert_eq!(restored.state(), engine.state());
    }
}
