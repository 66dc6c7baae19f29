//! Grid bounds for the tracked agent.
//!
//! The grid is a closed square: both axes range over `min..=max`.

use serde::{Deserialize, Serialize};

/// Lowest coordinate on either axis of the default grid.
pub const MIN: i32 = 1;

/// Highest coordinate on either axis of the default grid.
pub const MAX: i32 = 6;

/// Inclusive coordinate range shared by rows and columns.
///
/// # Example
///
/// ```rust
/// use gridtrack::core::{Bounds, MAX, MIN};
///
/// let bounds = Bounds::default();
/// assert_eq!(bounds.min(), MIN);
/// assert_eq!(bounds.max(), MAX);
/// assert!(bounds.contains(3));
/// assert!(!bounds.contains(MAX + 1));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bounds {
    min: i32,
    max: i32,
}

impl Bounds {
    /// Create bounds, returning `None` when `min > max`.
    pub fn new(min: i32, max: i32) -> Option<Self> {
        (min <= max).then_some(Self { min, max })
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    /// Check whether a single coordinate lies within the range.
    pub fn contains(&self, coordinate: i32) -> bool {
        (self.min..=self.max).contains(&coordinate)
    }

    /// The exit corner `(max, max)`.
    pub fn exit_corner(&self) -> (i32, i32) {
        (self.max, self.max)
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self { min: MIN, max: MAX }
    }
}
