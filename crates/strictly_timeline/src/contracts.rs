//! Contract-based validation for timeline moves.
//!
//! Contracts formalize Hoare-style reasoning: {P} action {Q}.
//! Preconditions gate every move; the postcondition re-checks the
//! timeline invariants on the result.

use crate::action::MoveError;
use crate::invariants::{InvariantSet, TimelineInvariants};
use crate::{GameStatus, Position, Timeline};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the cell index names a square on the board.
pub struct CellInBounds;

impl CellInBounds {
    /// Resolves the index to a position.
    #[instrument]
    pub fn check(cell: usize) -> Result<Position, MoveError> {
        Position::from_index(cell).ok_or(MoveError::InvalidIndex {
            index: cell,
            len: Position::ALL.len(),
        })
    }
}

/// Precondition: the current board has no winner and is not full.
pub struct GameNotOver;

impl GameNotOver {
    /// Checks that the current board is still in progress.
    #[instrument(skip(timeline))]
    pub fn check(timeline: &Timeline) -> Result<(), MoveError> {
        match timeline.status() {
            GameStatus::InProgress => Ok(()),
            _ => Err(MoveError::GameOver),
        }
    }
}

/// Precondition: the target square is empty on the current board.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Checks that `position` is empty on the current board.
    #[instrument(skip(timeline))]
    pub fn check(position: Position, timeline: &Timeline) -> Result<(), MoveError> {
        if timeline.current_board().is_empty(position) {
            Ok(())
        } else {
            Err(MoveError::CellOccupied(position))
        }
    }
}

/// Composite precondition: bounds, then game over, then occupancy.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions, returning the target position.
    #[instrument(skip(timeline))]
    pub fn check(cell: usize, timeline: &Timeline) -> Result<Position, MoveError> {
        let position = CellInBounds::check(cell)?;
        GameNotOver::check(timeline)?;
        CellIsEmpty::check(position, timeline)?;
        Ok(position)
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for placing a mark at a cell index.
///
/// Preconditions:
/// - Cell index is 0-8
/// - Game at the current position is in progress
/// - Cell is empty
///
/// Postconditions:
/// - Every snapshot adds one mark
/// - Players still alternate
/// - Current move points into history
pub struct MoveContract;

impl Contract<Timeline, usize> for MoveContract {
    fn pre(timeline: &Timeline, cell: &usize) -> Result<(), MoveError> {
        LegalMove::check(*cell, timeline).map(|_| ())
    }

    fn post(_before: &Timeline, after: &Timeline) -> Result<(), MoveError> {
        TimelineInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Timeline postcondition failed");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Player};

    #[test]
    fn test_precondition_empty_square() {
        assert!(MoveContract::pre(&Timeline::new(), &4).is_ok());
    }

    #[test]
    fn test_precondition_out_of_bounds() {
        assert_eq!(
            MoveContract::pre(&Timeline::new(), &9),
            Err(MoveError::InvalidIndex { index: 9, len: 9 })
        );
    }

    #[test]
    fn test_precondition_occupied_square() {
        let timeline = Timeline::replay(&[4]).expect("legal move");
        assert_eq!(
            MoveContract::pre(&timeline, &4),
            Err(MoveError::CellOccupied(Position::Center))
        );
    }

    #[test]
    fn test_game_over_checked_before_occupancy() {
        let timeline = Timeline::replay(&[0, 4, 1, 3, 2]).expect("legal moves");
        // Cell 0 is occupied too, but the finished game is reported first.
        assert_eq!(MoveContract::pre(&timeline, &0), Err(MoveError::GameOver));
        assert_eq!(MoveContract::pre(&timeline, &5), Err(MoveError::GameOver));
    }

    #[test]
    fn test_bounds_checked_before_game_over() {
        let timeline = Timeline::replay(&[0, 4, 1, 3, 2]).expect("legal moves");
        assert!(matches!(
            MoveContract::pre(&timeline, &42),
            Err(MoveError::InvalidIndex { index: 42, .. })
        ));
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = Timeline::new();
        let mut after = before.clone();
        after.attempt_move(4).expect("legal move");
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = Timeline::new();
        let mut after = before.clone();
        after
            .history
            .push(Board::new().with_mark(Position::TopLeft, Player::O));

        assert!(matches!(
            MoveContract::post(&before, &after),
            Err(MoveError::InvariantViolation(_))
        ));
    }
}
