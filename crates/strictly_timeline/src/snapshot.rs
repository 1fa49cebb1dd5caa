//! Serializable snapshot of a timeline.
//!
//! A view layer that lives across a process or language boundary gets the
//! timeline as a [`TimelineSnapshot`] and hands it back the same way.
//! Snapshots are checked against every timeline invariant before they
//! become a [`Timeline`] again.

use crate::config::TimelineConfig;
use crate::invariants::{InvariantSet, InvariantViolation, TimelineInvariants};
use crate::{Board, Timeline};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// History and cursor, without configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineSnapshot {
    /// Every snapshot, starting with the empty board.
    pub history: Vec<Board>,
    /// Index of the current snapshot.
    pub current_move: usize,
}

/// A snapshot that does not describe a reachable timeline.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum SnapshotError {
    /// The snapshot breaks one or more timeline invariants.
    #[display("Snapshot violates invariants: {}", describe(_0))]
    Invalid(Vec<InvariantViolation>),

    /// The JSON could not be encoded or decoded.
    #[display("Snapshot JSON error: {}", _0)]
    Json(String),
}

fn describe(violations: &[InvariantViolation]) -> String {
    violations
        .iter()
        .map(|v| v.description.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

impl std::error::Error for SnapshotError {}

impl From<serde_json::Error> for SnapshotError {
    fn from(err: serde_json::Error) -> Self {
        SnapshotError::Json(err.to_string())
    }
}

impl From<&Timeline> for TimelineSnapshot {
    fn from(timeline: &Timeline) -> Self {
        Self {
            history: timeline.history().to_vec(),
            current_move: timeline.current_move(),
        }
    }
}

impl TimelineSnapshot {
    /// Rebuilds a timeline using `config`.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Invalid`] listing every violated invariant.
    #[instrument(skip(self, config), fields(len = self.history.len(), current_move = self.current_move))]
    pub fn into_timeline(self, config: TimelineConfig) -> Result<Timeline, SnapshotError> {
        let timeline = Timeline {
            history: self.history,
            current_move: self.current_move,
            config,
        };

        TimelineInvariants::check_all(&timeline).map_err(|violations| {
            warn!(count = violations.len(), "Rejected snapshot");
            SnapshotError::Invalid(violations)
        })?;

        debug!("Snapshot accepted");
        Ok(timeline)
    }

    /// Encodes the snapshot as JSON.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decodes a snapshot from JSON. The result is not yet validated.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl TryFrom<TimelineSnapshot> for Timeline {
    type Error = SnapshotError;

    fn try_from(snapshot: TimelineSnapshot) -> Result<Self, Self::Error> {
        snapshot.into_timeline(TimelineConfig::default())
    }
}
