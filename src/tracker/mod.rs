//! The mutable tracker around the pure core.
//!
//! `PositionTracker` owns a `TrackerState`, runs the guards from
//! [`crate::core::guard`] before every transition and records accepted
//! transitions in its history.

mod error;
mod machine;

pub use error::TransitionError;
pub use machine::PositionTracker;
