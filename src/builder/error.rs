//! Build errors for the tracker builder.

use thiserror::Error;

/// Errors that can occur when configuring a tracker.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Invalid grid bounds: min ({min}) is greater than max ({max})")]
    InvalidBounds { min: i32, max: i32 },
}
