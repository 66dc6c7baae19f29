//! Transition error type.

use crate::core::{Command, TrackerState, Violation};
use thiserror::Error;

/// Errors returned by tracker transitions.
///
/// There is one kind: a precondition was not met. The tracker state is
/// left exactly as it was.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TransitionError {
    #[error("precondition broken: {command} from {state}")]
    PreconditionViolation {
        command: Command,
        state: TrackerState,
        violations: Vec<Violation>,
    },
}

impl TransitionError {
    /// The command that was rejected.
    pub fn command(&self) -> Command {
        match self {
            Self::PreconditionViolation { command, .. } => *command,
        }
    }

    /// Every precondition clause that failed.
    pub fn violations(&self) -> &[Violation] {
        match self {
            Self::PreconditionViolation { violations, .. } => violations,
        }
    }
}
