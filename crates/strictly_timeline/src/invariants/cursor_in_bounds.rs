//! Cursor invariant: the current move points into history.

use super::Invariant;
use crate::Timeline;

/// Invariant: `current_move < history.len()`.
pub struct CursorInBoundsInvariant;

impl Invariant<Timeline> for CursorInBoundsInvariant {
    fn holds(timeline: &Timeline) -> bool {
        timeline.current_move() < timeline.history().len()
    }

    fn description() -> &'static str {
        "Current move points at a snapshot in history"
    }
}
