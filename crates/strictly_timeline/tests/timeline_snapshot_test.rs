//! Tests for snapshot hand-off and configuration loading.

mod common;

use std::io::Write;
use strictly_timeline::{
    Board, Player, Position, SnapshotError, Timeline, TimelineConfig, TimelineSnapshot,
};

#[test]
fn test_snapshot_json_round_trip() -> anyhow::Result<()> {
    common::init_tracing();
    let mut timeline = Timeline::replay(&[4, 0, 8])?;
    timeline.jump_to(2)?;

    let json = TimelineSnapshot::from(&timeline).to_json()?;
    let restored = Timeline::try_from(TimelineSnapshot::from_json(&json)?)?;

    assert_eq!(restored, timeline);
    assert_eq!(restored.current_move(), 2);
    Ok(())
}

#[test]
fn test_snapshot_with_wrong_turn_order_rejected() {
    let snapshot = TimelineSnapshot {
        history: vec![
            Board::new(),
            Board::new().with_mark(Position::Center, Player::O),
        ],
        current_move: 0,
    };

    let err = Timeline::try_from(snapshot).unwrap_err();
    assert!(matches!(err, SnapshotError::Invalid(_)));
    assert!(err.to_string().contains("alternate"));
}

#[test]
fn test_snapshot_with_dangling_cursor_rejected() {
    let snapshot = TimelineSnapshot {
        history: vec![Board::new()],
        current_move: 1,
    };
    assert!(Timeline::try_from(snapshot).is_err());
}

#[test]
fn test_config_from_file() -> anyhow::Result<()> {
    common::init_tracing();
    let mut file = tempfile::NamedTempFile::new()?;
    writeln!(file, "check_invariants = false")?;
    writeln!(file, "start_label = \"Start\"")?;
    writeln!(file, "move_label = \"Move \"")?;

    let config = TimelineConfig::from_file(file.path())?;
    assert!(!*config.check_invariants());

    let mut timeline = Timeline::with_config(config.clone());
    timeline.attempt_move(4)?;
    let labels: Vec<String> = timeline
        .history_entries()
        .into_iter()
        .map(|e| e.label)
        .collect();
    assert_eq!(labels, ["Start", "Move 1"]);

    let restored = TimelineSnapshot::from(&timeline).into_timeline(config)?;
    assert_eq!(restored, timeline);
    Ok(())
}

#[test]
fn test_missing_config_file_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = TimelineConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}
