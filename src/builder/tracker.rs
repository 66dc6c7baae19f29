//! Builder for configuring position trackers.

use crate::builder::error::BuildError;
use crate::core::{Bounds, DEFAULT_HISTORY_LIMIT, MAX, MIN};
use crate::tracker::PositionTracker;

/// Builder for constructing trackers with a fluent API.
///
/// # Example
///
/// ```rust
/// use gridtrack::builder::TrackerBuilder;
///
/// let mut tracker = TrackerBuilder::new()
///     .bounds(0, 2)
///     .history_limit(4)
///     .build()
///     .unwrap();
///
/// assert_eq!((tracker.row(), tracker.col()), (0, 0));
/// tracker.move_down().unwrap();
/// tracker.move_right().unwrap();
/// tracker.move_down().unwrap();
/// tracker.move_right().unwrap();
/// tracker.exit().unwrap();
/// assert_eq!(tracker.history().len(), 4);
/// ```
#[derive(Clone, Debug)]
pub struct TrackerBuilder {
    min: i32,
    max: i32,
    history_limit: usize,
}

impl TrackerBuilder {
    /// Create a builder with the default 1..=6 grid.
    pub fn new() -> Self {
        Self {
            min: MIN,
            max: MAX,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }

    /// Set the inclusive coordinate range for both axes.
    pub fn bounds(mut self, min: i32, max: i32) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Set how many accepted transitions to keep. Zero disables history.
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// Build the tracker.
    /// Returns an error if the bounds are inverted.
    pub fn build(self) -> Result<PositionTracker, BuildError> {
        let bounds = Bounds::new(self.min, self.max).ok_or(BuildError::InvalidBounds {
            min: self.min,
            max: self.max,
        })?;

        Ok(PositionTracker::with_config(bounds, self.history_limit))
    }
}

impl Default for TrackerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
