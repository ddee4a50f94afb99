//! Medium AI rule-chain tests.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use strictly_tictactoe::{Board, Player, Position};
use strictly_tictactoe_ai::{AiConfig, AiManager, AiPlayer, Difficulty, MediumAi};

fn medium() -> MediumAi {
    MediumAi::new(Player::X, &AiConfig::headless())
}

#[test]
fn test_first_winning_cell_in_index_order() {
    // Both 6 and 8 win for X; the lower index is played
    let board: Board = "XOXOXO...".parse().unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let choice = medium().decide(&board, Player::X, &mut rng).unwrap();
    assert_eq!(choice.cell, 6);
    assert_eq!(choice.confidence, 1.0);
    assert_eq!(choice.reasoning, "Winning move found");
}

#[test]
fn test_deterministic_rules_ignore_rng() {
    let board: Board = "X..OO...X".parse().unwrap();
    for seed in 0..20 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        assert_eq!(medium().decide(&board, Player::X, &mut rng).unwrap().cell, 5);
    }
}

#[test]
fn test_random_corner_when_no_opposite() {
    // X took the center; O's only piece is on an edge
    let board: Board = ".O..X....".parse().unwrap();
    for seed in 0..20 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let choice = medium().decide(&board, Player::X, &mut rng).unwrap();
        assert!(Position::CORNERS.contains(&choice.cell));
        assert_eq!(choice.reasoning, "Took corner position");
    }
}

#[test]
fn test_evaluate_position_uses_structural_weights() {
    let board: Board = "X...O....".parse().unwrap();
    // corner 2 for X, center 3 for O
    assert_eq!(medium().evaluate_position(&board, Player::X), Some(-1));
    assert_eq!(medium().evaluate_position(&board, Player::O), Some(1));
}

#[tokio::test]
async fn test_manager_medium_move() {
    let mut manager = AiManager::with_config(AiConfig::headless());
    manager.set_ai(Difficulty::Medium, Player::X);
    let board: Board = "XOXOXO...".parse().unwrap();
    let result = manager.make_ai_move(&board, Player::X).await.unwrap();
    assert_eq!(result.cell, 6);
    assert_eq!(result.reasoning, "Winning move found");
}
