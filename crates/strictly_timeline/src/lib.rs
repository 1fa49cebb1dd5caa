//! Strictly Timeline - tic-tac-toe with move history and time travel
//!
//! The crate is the game core only: rules, a history-keeping state
//! machine, and the contracts that keep it honest. Rendering is left to
//! the caller, which reads the current board and status after each call.
//!
//! # Architecture
//!
//! - **Rules**: pure win and draw detection over a [`Board`]
//! - **Timeline**: every snapshot since the empty board plus a cursor
//! - **Contracts**: move preconditions and history invariants
//! - **Snapshot**: serde hand-off of a timeline, validated on the way back in
//!
//! # Example
//!
//! ```
//! use strictly_timeline::{GameStatus, Player, Timeline};
//!
//! let mut timeline = Timeline::new();
//! for cell in [0, 4, 1, 3, 2] {
//!     timeline.attempt_move(cell)?;
//! }
//! assert_eq!(timeline.status(), GameStatus::Won(Player::X));
//!
//! // Review an earlier position, then branch from it.
//! timeline.jump_to(2)?;
//! timeline.attempt_move(8)?;
//! assert_eq!(timeline.len(), 4);
//! # Ok::<(), strictly_timeline::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod config;
mod contracts;
mod invariants;
mod position;
mod rules;
mod snapshot;
mod timeline;
mod types;

pub use action::{Move, MoveError};
pub use config::{ConfigError, TimelineConfig};
pub use contracts::{CellInBounds, CellIsEmpty, Contract, GameNotOver, LegalMove, MoveContract};
pub use invariants::{
    AlternatingTurnInvariant, CursorInBoundsInvariant, Invariant, InvariantSet, InvariantViolation,
    MonotonicHistoryInvariant, TimelineInvariants,
};
pub use position::Position;
pub use rules::{LINES, check_winner, is_draw, is_full, winning_line};
pub use snapshot::{SnapshotError, TimelineSnapshot};
pub use timeline::{HistoryEntry, Timeline};
pub use types::{Board, GameStatus, Player, Square};
