//! The game state machine: board history plus a movable cursor.
//!
//! A [`Timeline`] owns every board snapshot since the empty board and an
//! index into that history. Moves append a snapshot after the cursor;
//! jumps move the cursor without touching history. A move made after
//! jumping back starts a new branch and discards the abandoned future.

use crate::action::{Move, MoveError};
use crate::config::TimelineConfig;
use crate::contracts::{CellInBounds, Contract, MoveContract};
use crate::{Board, GameStatus, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Board history with a current-move cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeline {
    pub(crate) history: Vec<Board>,
    pub(crate) current_move: usize,
    pub(crate) config: TimelineConfig,
}

/// One selectable entry in the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Index into history, suitable for [`Timeline::jump_to`].
    pub index: usize,
    /// Display label ("Go to game start", "Go to move #3").
    pub label: String,
    /// Whether this entry is the current position.
    pub is_current: bool,
}

impl Timeline {
    /// Creates a timeline holding only the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self::with_config(TimelineConfig::default())
    }

    /// Creates an empty timeline with the given configuration.
    #[instrument(skip(config))]
    pub fn with_config(config: TimelineConfig) -> Self {
        Self {
            history: vec![Board::new()],
            current_move: 0,
            config,
        }
    }

    /// Builds a timeline by playing `cells` in order from the empty board.
    ///
    /// # Errors
    ///
    /// Returns the first rejection encountered.
    #[instrument]
    pub fn replay(cells: &[usize]) -> Result<Self, MoveError> {
        let mut timeline = Self::new();
        for &cell in cells {
            timeline.attempt_move(cell)?;
        }
        Ok(timeline)
    }

    /// The board at the current move.
    pub fn current_board(&self) -> &Board {
        &self.history[self.current_move]
    }

    /// Index of the current snapshot in history.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// Every snapshot, starting with the empty board.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Number of snapshots in history (always at least one).
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Always false: history starts with the empty board.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// The configuration this timeline was built with.
    pub fn config(&self) -> &TimelineConfig {
        &self.config
    }

    /// The player who moves from the current board.
    pub fn next_player(&self) -> Player {
        Player::for_move(self.current_move)
    }

    /// Status of the current board.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn status(&self) -> GameStatus {
        GameStatus::of(self.current_board())
    }

    /// Places the next player's mark at `cell` (0-8, row-major).
    ///
    /// Any snapshots after the current move are discarded before the new
    /// board is appended, and the cursor moves to the new board.
    ///
    /// # Errors
    ///
    /// - [`MoveError::InvalidIndex`] if `cell > 8`
    /// - [`MoveError::GameOver`] if the current board is won or drawn
    /// - [`MoveError::CellOccupied`] if the square is taken
    ///
    /// The timeline is unchanged on error.
    #[instrument(skip(self), fields(current_move = self.current_move, player = %self.next_player()))]
    pub fn attempt_move(&mut self, cell: usize) -> Result<(), MoveError> {
        MoveContract::pre(self, &cell).inspect_err(|e| {
            debug!(error = %e, "Move rejected");
        })?;
        let position = CellInBounds::check(cell)?;

        let player = self.next_player();
        let next = self.current_board().with_mark(position, player);

        let mut candidate = self.history.clone();
        let discarded = candidate.len() - (self.current_move + 1);
        candidate.truncate(self.current_move + 1);
        candidate.push(next);

        let after = Self {
            current_move: candidate.len() - 1,
            history: candidate,
            config: self.config.clone(),
        };

        if *self.config.check_invariants() {
            MoveContract::post(self, &after)?;
        }

        if discarded > 0 {
            info!(discarded, branch_at = self.current_move, "Starting new branch");
        }
        debug!(%position, %player, "Move applied");

        *self = after;
        Ok(())
    }

    /// Typed form of [`attempt_move`](Self::attempt_move).
    pub fn place(&mut self, position: Position) -> Result<(), MoveError> {
        self.attempt_move(position.to_index())
    }

    /// Moves the cursor to snapshot `move_index` without altering history.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvalidIndex`] if `move_index` is not in history.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(&mut self, move_index: usize) -> Result<(), MoveError> {
        if move_index >= self.history.len() {
            let err = MoveError::InvalidIndex {
                index: move_index,
                len: self.history.len(),
            };
            debug!(error = %err, "Jump rejected");
            return Err(err);
        }

        self.current_move = move_index;
        debug!("Jumped");
        Ok(())
    }

    /// Moves between consecutive snapshots, in order.
    pub fn moves(&self) -> Vec<Move> {
        self.history
            .windows(2)
            .filter_map(|pair| Move::between(&pair[0], &pair[1]))
            .collect()
    }

    /// Empty squares the next player may take; empty once the game is over.
    #[instrument(skip(self))]
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.status().is_over() {
            return Vec::new();
        }
        Position::valid_moves(self.current_board())
    }

    /// One-line status for the current board.
    ///
    /// `"Winner: X"`, `"Draw"` or `"Next player: O"`.
    pub fn status_line(&self) -> String {
        match self.status() {
            GameStatus::Won(winner) => format!("Winner: {}", winner),
            GameStatus::Draw => "Draw".to_string(),
            GameStatus::InProgress => format!("Next player: {}", self.next_player()),
        }
    }

    /// One entry per snapshot, labelled for a move list.
    pub fn history_entries(&self) -> Vec<HistoryEntry> {
        (0..self.history.len())
            .map(|index| HistoryEntry {
                index,
                label: self.config.entry_label(index),
                is_current: index == self.current_move,
            })
            .collect()
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}
