//! Precondition checks for tracker transitions.
//!
//! Guards are pure functions of a state and its bounds. They use
//! `Validation` so that every failing clause is reported, not just the
//! first one: a repeated move into a wall yields both `AtBoundary` and
//! `RepeatedMove`.

use super::bounds::Bounds;
use super::moves::{Command, Move};
use super::state::TrackerState;
use super::violation::Violation;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of a precondition check.
pub type GuardCheck = Validation<(), NonEmptyVec<Violation>>;

/// Check whether the state already sits on the edge in `direction`.
///
/// # Example
///
/// ```rust
/// use gridtrack::core::{guard, Bounds, Move, TrackerState};
///
/// let bounds = Bounds::default();
/// let start = TrackerState::initial(&bounds);
///
/// assert!(guard::at_boundary(&start, &bounds, Move::Left));
/// assert!(guard::at_boundary(&start, &bounds, Move::Up));
/// assert!(!guard::at_boundary(&start, &bounds, Move::Right));
/// ```
pub fn at_boundary(state: &TrackerState, bounds: &Bounds, direction: Move) -> bool {
    match direction {
        Move::Right => state.col >= bounds.max(),
        Move::Left => state.col <= bounds.min(),
        Move::Down => state.row >= bounds.max(),
        Move::Up => state.row <= bounds.min(),
    }
}

/// Check the preconditions of a directional move.
///
/// A move is allowed when the coordinate is not at the boundary in the
/// direction of travel and the last move was not the same direction.
pub fn check_move(state: &TrackerState, bounds: &Bounds, direction: Move) -> GuardCheck {
    let boundary: GuardCheck = if at_boundary(state, bounds, direction) {
        Validation::fail(Violation::AtBoundary { direction })
    } else {
        Validation::success(())
    };

    let repeat: GuardCheck = if state.last_move == Some(direction) {
        Validation::fail(Violation::RepeatedMove { direction })
    } else {
        Validation::success(())
    };

    Validation::all_vec(vec![boundary, repeat]).map(|_| ())
}

/// Check the precondition of exit: the state must be on the exit corner.
pub fn check_exit(state: &TrackerState, bounds: &Bounds) -> GuardCheck {
    if state.is_at_exit(bounds) {
        Validation::success(())
    } else {
        Validation::fail(Violation::NotAtExit {
            row: state.row,
            col: state.col,
        })
    }
}

/// Check the preconditions of any command.
pub fn check(state: &TrackerState, bounds: &Bounds, command: Command) -> GuardCheck {
    match command {
        Command::Move(direction) => check_move(state, bounds, direction),
        Command::Exit => check_exit(state, bounds),
    }
}

/// Flatten a failed check into its violations; empty on success.
pub fn violations(check: GuardCheck) -> Vec<Violation> {
    match check {
        Validation::Success(_) => Vec::new(),
        Validation::Failure(errors) => errors.iter().copied().collect(),
    }
}
