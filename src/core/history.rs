//! Transition history tracking.
//!
//! Provides an immutable, bounded log of accepted transitions. History is
//! observational: it is not part of the tracker's state and is never
//! consulted by guards.

use super::moves::Command;
use super::state::TrackerState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single accepted transition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// The state before the transition
    pub from: TrackerState,
    /// The state after the transition
    pub to: TrackerState,
    /// The command that produced it
    pub command: Command,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of transitions, keeping at most `limit` records.
///
/// History is immutable - `record` returns a new history with the
/// transition added and the oldest records dropped past the limit.
///
/// # Example
///
/// ```rust
/// use gridtrack::core::{Bounds, Command, Move, MoveHistory, TrackerState, TransitionRecord};
/// use chrono::Utc;
///
/// let start = TrackerState::initial(&Bounds::default());
/// let next = start.stepped(Move::Right);
///
/// let history = MoveHistory::with_limit(8).record(TransitionRecord {
///     from: start,
///     to: next,
///     command: Command::Move(Move::Right),
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(history.get_path(), vec![&start, &next]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoveHistory {
    records: Vec<TransitionRecord>,
    limit: usize,
}

/// Default number of records a tracker retains.
pub const DEFAULT_HISTORY_LIMIT: usize = 64;

impl Default for MoveHistory {
    fn default() -> Self {
        Self::with_limit(DEFAULT_HISTORY_LIMIT)
    }
}

impl MoveHistory {
    /// Create an empty history retaining at most `limit` records.
    ///
    /// A limit of zero records nothing.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            records: Vec::new(),
            limit,
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Record a transition, returning a new history.
    pub fn record(&self, record: TransitionRecord) -> Self {
        if self.limit == 0 {
            return self.clone();
        }

        let mut records = self.records.clone();
        records.push(record);
        if records.len() > self.limit {
            let excess = records.len() - self.limit;
            records.drain(..excess);
        }

        Self {
            records,
            limit: self.limit,
        }
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the oldest retained record followed by
    /// the `to` state of every record.
    pub fn get_path(&self) -> Vec<&TrackerState> {
        let mut path = Vec::new();
        if let Some(first) = self.records.first() {
            path.push(&first.from);
        }
        for record in &self.records {
            path.push(&record.to);
        }
        path
    }

    /// Time between the first and last retained record.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.first(), self.records.last()) {
            last.timestamp
                .signed_duration_since(first.timestamp)
                .to_std()
                .ok()
        } else {
            None
        }
    }

    /// Number of exits among the retained records.
    pub fn exits(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.command == Command::Exit)
            .count()
    }

    pub fn records(&self) -> &[TransitionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
