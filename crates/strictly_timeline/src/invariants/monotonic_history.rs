//! Monotonic history invariant: each snapshot adds exactly one mark.

use super::Invariant;
use crate::{Board, Move, Timeline};

/// Invariant: snapshots grow one mark at a time from an empty board.
///
/// Snapshot 0 is the empty board, and each consecutive pair differs in
/// exactly one square, which goes from empty to occupied. Squares are
/// never overwritten or erased.
pub struct MonotonicHistoryInvariant;

impl Invariant<Timeline> for MonotonicHistoryInvariant {
    fn holds(timeline: &Timeline) -> bool {
        let history = timeline.history();

        match history.first() {
            Some(first) if *first == Board::new() => {}
            _ => return false,
        }

        history
            .windows(2)
            .all(|pair| Move::between(&pair[0], &pair[1]).is_some())
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark to the previous one"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    #[test]
    fn test_new_timeline_holds() {
        assert!(MonotonicHistoryInvariant::holds(&Timeline::new()));
    }

    #[test]
    fn test_multiple_moves_hold() {
        let timeline = Timeline::replay(&[0, 4, 2, 6]).expect("legal moves");
        assert!(MonotonicHistoryInvariant::holds(&timeline));
    }

    #[test]
    fn test_non_empty_start_violates() {
        let mut timeline = Timeline::new();
        timeline.history[0] = Board::new().with_mark(Position::Center, Player::X);
        assert!(!MonotonicHistoryInvariant::holds(&timeline));
    }

    #[test]
    fn test_overwritten_square_violates() {
        let mut timeline = Timeline::replay(&[4]).expect("legal move");
        timeline
            .history
            .push(Board::new().with_mark(Position::Center, Player::O));
        assert!(!MonotonicHistoryInvariant::holds(&timeline));
    }

    #[test]
    fn test_skipped_snapshot_violates() {
        let mut timeline = Timeline::new();
        timeline.history.push(
            Board::new()
                .with_mark(Position::Center, Player::X)
                .with_mark(Position::TopLeft, Player::O),
        );
        assert!(!MonotonicHistoryInvariant::holds(&timeline));
    }

    #[test]
    fn test_empty_history_violates() {
        let mut timeline = Timeline::new();
        timeline.history.clear();
        assert!(!MonotonicHistoryInvariant::holds(&timeline));
    }
}
