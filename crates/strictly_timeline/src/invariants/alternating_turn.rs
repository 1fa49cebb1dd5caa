//! Alternating turn invariant: X, O, X, O, ...

use super::Invariant;
use crate::{Move, Player, Timeline};

/// Invariant: players alternate, starting with X.
///
/// The mark added between snapshot `i` and `i + 1` belongs to X when
/// `i` is even and to O when `i` is odd.
pub struct AlternatingTurnInvariant;

impl Invariant<Timeline> for AlternatingTurnInvariant {
    fn holds(timeline: &Timeline) -> bool {
        timeline
            .history()
            .windows(2)
            .enumerate()
            .all(|(i, pair)| match Move::between(&pair[0], &pair[1]) {
                Some(mov) => mov.player == Player::for_move(i),
                // Malformed steps belong to MonotonicHistoryInvariant.
                None => true,
            })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Position};

    #[test]
    fn test_new_timeline_holds() {
        assert!(AlternatingTurnInvariant::holds(&Timeline::new()));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let timeline = Timeline::replay(&[0, 4, 2, 6, 8]).expect("legal moves");
        assert!(AlternatingTurnInvariant::holds(&timeline));
        assert_eq!(timeline.next_player(), Player::O);
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut timeline = Timeline::replay(&[0]).expect("legal move");
        let twice = timeline.history[1].with_mark(Position::Center, Player::X);
        timeline.history.push(twice);
        assert!(!AlternatingTurnInvariant::holds(&timeline));
    }

    #[test]
    fn test_o_first_violates() {
        let mut timeline = Timeline::new();
        timeline
            .history
            .push(Board::new().with_mark(Position::TopLeft, Player::O));
        assert!(!AlternatingTurnInvariant::holds(&timeline));
    }
}
