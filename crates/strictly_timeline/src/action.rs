//! First-class move and rejection types.
//!
//! A move is a domain event: it records which player marked which square
//! between two consecutive snapshots.

use crate::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Recovers the move that turns `before` into `after`.
    ///
    /// Returns `None` unless exactly one square differs and that square
    /// went from empty to occupied.
    pub fn between(before: &Board, after: &Board) -> Option<Self> {
        let mut changed = Position::ALL
            .into_iter()
            .filter(|&pos| before.get(pos) != after.get(pos));

        let position = changed.next()?;
        if changed.next().is_some() || !before.is_empty(position) {
            return None;
        }

        after
            .get(position)
            .player()
            .map(|player| Self { player, position })
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Why a move or jump was rejected.
///
/// Rejections leave the timeline untouched.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// A cell or history index is out of range.
    #[display("Index {} is out of range (must be below {})", index, len)]
    InvalidIndex {
        /// The requested index.
        index: usize,
        /// Exclusive upper bound at the time of the request.
        len: usize,
    },

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    CellOccupied(Position),

    /// The game at the current position is already over.
    #[display("Game is already over")]
    GameOver,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
