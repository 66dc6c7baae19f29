//! Reasons a transition precondition can fail.

use super::moves::Move;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single failed precondition clause.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum Violation {
    #[error("already at the {direction} boundary")]
    AtBoundary { direction: Move },

    #[error("last move was already {direction}")]
    RepeatedMove { direction: Move },

    #[error("not at the exit corner (currently at ({row}, {col}))")]
    NotAtExit { row: i32, col: i32 },
}
