//! Loading AI configuration from disk.

use std::io::Write;
use strictly_tictactoe_ai::{AiConfig, Difficulty, ThinkingDelay};
use tempfile::NamedTempFile;

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
win_detection_rate = 0.5
max_depth = 4

[hard_delay]
min_ms = 0
max_ms = 0
"#
    )
    .unwrap();

    let config = AiConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.win_detection_rate(), 0.5);
    assert_eq!(*config.block_detection_rate(), 0.7);
    assert_eq!(*config.max_depth(), 4);
    assert_eq!(config.delay_for(Difficulty::Hard), ThinkingDelay::none());
    assert_eq!(config.delay_for(Difficulty::Easy), ThinkingDelay::new(200, 800));
}

#[test]
fn test_inverted_delay_rejected() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[easy_delay]\nmin_ms = 900\nmax_ms = 100").unwrap();

    let err = AiConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("easy_delay"));
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = AiConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}
