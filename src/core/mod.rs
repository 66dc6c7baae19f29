//! Core tracker types and logic.
//!
//! This module contains the pure part of the tracker:
//! - Grid bounds and the position/last-move state value
//! - Guard functions for transition preconditions
//! - Immutable history tracking
//!
//! Nothing here mutates; the `tracker` module applies these pieces to a
//! mutable owner.

mod bounds;
pub mod guard;
mod history;
mod moves;
mod state;
mod violation;

pub use bounds::{Bounds, MAX, MIN};
pub use guard::GuardCheck;
pub use history::{MoveHistory, TransitionRecord, DEFAULT_HISTORY_LIMIT};
pub use moves::{Command, Move};
pub use state::TrackerState;
pub use violation::Violation;
