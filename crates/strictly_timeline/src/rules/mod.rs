//! Game rules.
//!
//! Pure functions evaluating a board snapshot. Rules are kept apart from
//! history management so contracts and invariants can compose them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner, winning_line};
