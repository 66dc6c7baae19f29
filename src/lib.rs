//! Gridtrack: a bounded-grid position tracker.
//!
//! Gridtrack models a single agent on a square grid as a small state
//! machine. The state is a position plus the last move taken; transitions
//! are four unit moves and an exit that returns the agent to the start.
//!
//! # Core Concepts
//!
//! - **State**: `TrackerState`, a plain value of row, column and last move
//! - **Guards**: Pure precondition checks that report every failing clause
//! - **Tracker**: `PositionTracker`, the mutable owner that applies guarded
//!   transitions and keeps a bounded history
//!
//! # Rules
//!
//! - A move is refused at the grid boundary in its direction.
//! - A move is refused if the previous move was the same direction.
//! - Exit is only allowed from the far corner `(MAX, MAX)` and resets the
//!   tracker to `(MIN, MIN)` with no last move.
//!
//! A refused transition returns `TransitionError::PreconditionViolation`
//! and leaves the state untouched.
//!
//! # Example
//!
//! ```rust
//! use gridtrack::{PositionTracker, TransitionError};
//!
//! let mut tracker = PositionTracker::new();
//! assert_eq!(tracker.to_string(), "Robot Position: (1, 1). Last Move: None");
//!
//! for _ in 0..5 {
//!     tracker.move_right()?;
//!     tracker.move_down()?;
//! }
//! assert_eq!((tracker.row(), tracker.col()), (6, 6));
//!
//! tracker.exit()?;
//! assert_eq!((tracker.row(), tracker.col()), (1, 1));
//! assert_eq!(tracker.last_move(), None);
//! # Ok::<(), TransitionError>(())
//! ```

pub mod builder;
pub mod core;
pub mod tracker;

// Re-export commonly used types
pub use builder::{BuildError, TrackerBuilder};
pub use self::core::{Bounds, Command, Move, TrackerState, Violation, MAX, MIN};
pub use tracker::{PositionTracker, TransitionError};
