//! Tracker state values.
//!
//! A `TrackerState` is the full observable state of the machine: a grid
//! point plus the last move taken. All methods here are pure; mutation
//! lives in the tracker shell.

use super::bounds::Bounds;
use super::moves::Move;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Position on the grid tagged with the last move taken.
///
/// # Example
///
/// ```rust
/// use gridtrack::core::{Bounds, Move, TrackerState};
///
/// let bounds = Bounds::default();
/// let state = TrackerState::initial(&bounds);
/// assert_eq!(state.to_string(), "Robot Position: (1, 1). Last Move: None");
///
/// let next = state.stepped(Move::Right);
/// assert_eq!((next.row, next.col), (1, 2));
/// assert_eq!(next.last_move, Some(Move::Right));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrackerState {
    pub row: i32,
    pub col: i32,
    pub last_move: Option<Move>,
}

impl TrackerState {
    /// The entry state `(min, min)` with no last move.
    pub fn initial(bounds: &Bounds) -> Self {
        Self {
            row: bounds.min(),
            col: bounds.min(),
            last_move: None,
        }
    }

    /// Check the positional invariant: both coordinates within bounds.
    pub fn is_within(&self, bounds: &Bounds) -> bool {
        bounds.contains(self.row) && bounds.contains(self.col)
    }

    /// Check whether the state sits on the exit corner.
    pub fn is_at_exit(&self, bounds: &Bounds) -> bool {
        (self.row, self.col) == bounds.exit_corner()
    }

    /// The state after one unit step in `direction`.
    ///
    /// Does not check preconditions; see [`crate::core::guard`].
    pub fn stepped(&self, direction: Move) -> Self {
        let (dr, dc) = direction.delta();
        Self {
            row: self.row + dr,
            col: self.col + dc,
            last_move: Some(direction),
        }
    }
}

impl fmt::Display for TrackerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let last = self.last_move.map_or("None", |m| m.name());
        write!(
            f,
            "Robot Position: ({}, {}). Last Move: {}",
            self.row, self.col, last
        )
    }
}
