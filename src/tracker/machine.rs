//! Mutable owner of a tracker state.

use crate::core::guard;
use crate::core::{
    Bounds, Command, Move, MoveHistory, TrackerState, TransitionRecord, DEFAULT_HISTORY_LIMIT,
};
use crate::tracker::error::TransitionError;
use chrono::Utc;
use std::fmt;
use tracing::{debug, warn};

/// Tracks one agent on a bounded grid.
///
/// Every transition checks its precondition first; on failure the state is
/// left untouched and a [`TransitionError::PreconditionViolation`] is
/// returned.
///
/// # Example
///
/// ```rust
/// use gridtrack::{Move, PositionTracker};
///
/// let mut tracker = PositionTracker::new();
/// tracker.move_right().unwrap();
/// assert_eq!((tracker.row(), tracker.col()), (1, 2));
/// assert_eq!(tracker.last_move(), Some(Move::Right));
///
/// // The same direction twice in a row is refused.
/// assert!(tracker.move_right().is_err());
/// assert_eq!(tracker.col(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct PositionTracker {
    state: TrackerState,
    bounds: Bounds,
    history: MoveHistory,
}

impl PositionTracker {
    /// Create a tracker on the default 1..=6 grid at `(1, 1)`.
    pub fn new() -> Self {
        Self::with_config(Bounds::default(), DEFAULT_HISTORY_LIMIT)
    }

    pub(crate) fn with_config(bounds: Bounds, history_limit: usize) -> Self {
        Self {
            state: TrackerState::initial(&bounds),
            bounds,
            history: MoveHistory::with_limit(history_limit),
        }
    }

    pub fn row(&self) -> i32 {
        self.state.row
    }

    pub fn col(&self) -> i32 {
        self.state.col
    }

    pub fn last_move(&self) -> Option<Move> {
        self.state.last_move
    }

    /// Current state as a value.
    pub fn state(&self) -> TrackerState {
        self.state
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Accepted transitions, oldest first.
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// Check the positional invariant. Never fails.
    pub fn is_valid(&self) -> bool {
        self.state.is_within(&self.bounds)
    }

    /// Check whether `command` would currently be accepted.
    pub fn can_apply(&self, command: Command) -> bool {
        guard::check(&self.state, &self.bounds, command).is_success()
    }

    pub fn move_right(&mut self) -> Result<(), TransitionError> {
        self.step(Move::Right)
    }

    pub fn move_left(&mut self) -> Result<(), TransitionError> {
        self.step(Move::Left)
    }

    pub fn move_down(&mut self) -> Result<(), TransitionError> {
        self.step(Move::Down)
    }

    pub fn move_up(&mut self) -> Result<(), TransitionError> {
        self.step(Move::Up)
    }

    /// Leave the grid from the exit corner and re-enter at the start.
    ///
    /// Only allowed at `(max, max)`. On success the tracker is back in its
    /// initial state with no last move.
    pub fn exit(&mut self) -> Result<(), TransitionError> {
        self.apply(Command::Exit)
    }

    /// Take one unit step in `direction`.
    pub fn step(&mut self, direction: Move) -> Result<(), TransitionError> {
        self.apply(Command::Move(direction))
    }

    /// Apply any command, checking its precondition first.
    pub fn apply(&mut self, command: Command) -> Result<(), TransitionError> {
        let violations = guard::violations(guard::check(&self.state, &self.bounds, command));
        if !violations.is_empty() {
            warn!(%command, state = %self.state, ?violations, "transition rejected");
            return Err(TransitionError::PreconditionViolation {
                command,
                state: self.state,
                violations,
            });
        }

        let from = self.state;
        self.state = match command {
            Command::Move(direction) => from.stepped(direction),
            Command::Exit => TrackerState::initial(&self.bounds),
        };
        debug_assert!(self.is_valid(), "invariant broken after {command}");

        self.history = self.history.record(TransitionRecord {
            from,
            to: self.state,
            command,
            timestamp: Utc::now(),
        });
        debug!(%command, %from, to = %self.state, "transition applied");

        Ok(())
    }
}

impl Default for PositionTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PositionTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.state, f)
    }
}
