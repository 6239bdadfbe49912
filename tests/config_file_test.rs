//! Tests for loading game configuration from disk.

use std::io::Write;
use strictly_tictactoe::{
    ConfigErrorKind, FirstMover, GameConfig, Mark, MatchRunner, PlayerKind,
};
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write config");
    file
}

#[test]
fn test_load_config_from_file() {
    let file = write_config(
        r#"
        first_mover = "x"
        player_x = "random"
        player_o = "random"
        seed = 4
        "#,
    );

    let config = GameConfig::from_file(file.path()).expect("Config loads");
    assert_eq!(*config.first_mover(), FirstMover::X);
    assert_eq!(*config.player_x(), PlayerKind::Random);
    assert_eq!(*config.max_rejections(), 5);
}

#[test]
fn test_missing_file_is_config_error() {
    let err = GameConfig::from_file("/definitely/not/here.toml").unwrap_err();
    assert_eq!(*err.kind(), ConfigErrorKind::Read);
    assert!(err.to_string().starts_with("cannot read config file: "));
}

#[test]
fn test_configured_random_match_runs_to_end() {
    let file = write_config(
        r#"
        first_mover = "o"
        player_x = "random"
        player_o = "random"
        seed = 17
        "#,
    );
    let config = GameConfig::from_file(file.path()).expect("Config loads");

    let board = config.new_board();
    assert_eq!(board.first_mover(), Mark::O);

    let mut runner = MatchRunner::new(
        board,
        config.player_x().build("X", *config.seed()),
        config.player_o().build("O", config.seed().map(|s| s + 1)),
    )
    .with_max_rejections(*config.max_rejections());

    let mut out = Vec::new();
    let status = runner.run(&mut out).expect("Match completes");
    assert!(status.is_terminal());

    let shown = String::from_utf8(out).expect("Rendered output is UTF-8");
    assert!(shown.trim_end().ends_with(&status.to_string()));
}
