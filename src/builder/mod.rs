//! Builder API for configuring trackers.
//!
//! `PositionTracker::new()` covers the default grid; the builder is for
//! custom bounds and history retention.

pub mod error;
pub mod tracker;

pub use error::BuildError;
pub use tracker::TrackerBuilder;
