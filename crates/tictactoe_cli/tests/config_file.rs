//! Tests for loading play configuration from disk.

use std::io::Write;
use tictactoe_cli::PlayConfig;
use tictactoe_engine::Player;

#[test]
fn test_load_full_config() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "human_mark = \"O\"\nshow_stats = true\nshow_board_each_turn = false").unwrap();

    let config = PlayConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.human_mark(), Player::O);
    assert!(*config.show_stats());
    assert!(!*config.show_board_each_turn());
}

#[test]
fn test_missing_file_reports_location() {
    let error = PlayConfig::from_file("/definitely/not/here.toml").unwrap_err();
    assert!(error.message.contains("Failed to read config file"));
    assert!(error.file.ends_with("config.rs"));
}

#[test]
fn test_malformed_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "human_mark = 7").unwrap();

    let error = PlayConfig::from_file(file.path()).unwrap_err();
    assert!(error.message.contains("Failed to parse config"));
}
