//! AI manager lifecycle and single-flight tests.

use strictly_tictactoe::{Board, Player};
use strictly_tictactoe_ai::{AiConfig, AiError, AiManager, Difficulty, ThinkingDelay};

#[tokio::test]
async fn test_move_without_ai_fails() {
    let manager = AiManager::new();
    let result = manager.make_ai_move(&Board::new(), Player::O).await;
    assert_eq!(result.unwrap_err(), AiError::NotConfigured);
    assert_eq!(manager.name(), "No AI");
    assert_eq!(manager.description(), "No AI configured");
    assert_eq!(manager.difficulty(), None);
    assert!(!manager.is_thinking());
}

#[test]
fn test_unknown_difficulty_rejected() {
    let mut manager = AiManager::new();
    let err = manager.set_ai_by_name("impossible", Player::O).unwrap_err();
    assert_eq!(err, AiError::UnknownDifficulty("impossible".to_string()));
    assert!(manager.ai().is_none());
}

#[test]
fn test_set_ai_by_name() {
    let mut manager = AiManager::new();
    manager.set_ai_by_name("hard", Player::O).unwrap();
    assert_eq!(manager.difficulty(), Some(Difficulty::Hard));
    assert_eq!(manager.name(), "Hard AI");
    assert_eq!(manager.description(), "Perfect play using minimax algorithm");

    manager.set_ai(Difficulty::Easy, Player::X);
    assert_eq!(manager.name(), "Easy AI");
}

#[tokio::test]
async fn test_full_board_fails_and_releases_flag() {
    let mut manager = AiManager::with_config(AiConfig::headless());
    manager.set_ai(Difficulty::Medium, Player::X);
    let full: Board = "XOXXOOOXX".parse().unwrap();

    let result = manager.make_ai_move(&full, Player::X).await;
    assert_eq!(result.unwrap_err(), AiError::NoAvailableMoves);
    assert!(!manager.is_thinking());
}

#[tokio::test]
async fn test_concurrent_request_rejected() {
    let config = AiConfig::headless().with_delay(Difficulty::Easy, ThinkingDelay::new(50, 50));
    let mut manager = AiManager::with_config(config);
    manager.set_ai(Difficulty::Easy, Player::O);
    let board: Board = "X........".parse().unwrap();

    let (first, second) = tokio::join!(
        manager.make_ai_move(&board, Player::O),
        manager.make_ai_move(&board, Player::O)
    );

    let rejected = [&first, &second]
        .iter()
        .filter(|r| matches!(r, Err(AiError::AlreadyThinking)))
        .count();
    assert_eq!(rejected, 1);
    assert!(first.is_ok() || second.is_ok());
    assert!(!manager.is_thinking());

    // The flag was released, so the next request goes through
    assert!(manager.make_ai_move(&board, Player::O).await.is_ok());
}

#[tokio::test]
async fn test_dropped_request_releases_flag() {
    let config = AiConfig::headless().with_delay(Difficulty::Hard, ThinkingDelay::new(500, 500));
    let mut manager = AiManager::with_config(config);
    manager.set_ai(Difficulty::Hard, Player::O);
    let board = Board::new();

    let timed_out = tokio::time::timeout(
        std::time::Duration::from_millis(10),
        manager.make_ai_move(&board, Player::O),
    )
    .await;
    assert!(timed_out.is_err());
    assert!(!manager.is_thinking());
}

#[tokio::test]
async fn test_evaluate_position_delegates() {
    let mut manager = AiManager::with_config(AiConfig::headless());
    let board: Board = "XX..O....".parse().unwrap();
    assert_eq!(manager.evaluate_position(&board, Player::X), None);

    manager.set_ai(Difficulty::Easy, Player::X);
    assert_eq!(manager.evaluate_position(&board, Player::X), Some(1));
}
