//! State transition history tracking.
//!
//! Provides immutable tracking of state machine transitions over time,
//! following functional programming principles.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single executed transition.
///
/// Records are immutable values describing a move from one state to
/// another at a specific point in time. The trigger is stored by name so
/// the record stays serializable without bounding the history type on
/// the trigger type.
///
/// # Example
///
/// ```rust
/// use flywheel::core::{State, TransitionRecord};
/// use chrono::Utc;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum TaskState {
///     Pending,
///     Running,
/// }
///
/// impl State for TaskState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Pending => "Pending",
///             Self::Running => "Running",
///         }
///     }
/// }
///
/// let record = TransitionRecord {
///     from: TaskState::Pending,
///     to: TaskState::Running,
///     trigger: "Start".to_string(),
///     timestamp: Utc::now(),
/// };
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionRecord<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// Name of the trigger that caused the transition
    pub trigger: String,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of executed transitions.
///
/// History is immutable - the `record` method returns a new history with
/// the record added, leaving the original untouched.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    records: Vec<TransitionRecord<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// This is a pure function - it does not mutate the existing history
    /// but returns a new one with the record added.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flywheel::core::{StateHistory, TransitionRecord};
    /// use flywheel::state_enum;
    /// use chrono::Utc;
    ///
    /// state_enum! {
    ///     enum Step { A, B }
    /// }
    ///
    /// let history = StateHistory::new();
    /// let record = TransitionRecord {
    ///     from: Step::A,
    ///     to: Step::B,
    ///     trigger: "go".to_string(),
    ///     timestamp: Utc::now(),
    /// };
    ///
    /// let new_history = history.record(record);
    /// assert_eq!(new_history.records().len(), 1);
    /// assert_eq!(history.records().len(), 0); // Original unchanged
    /// ```
    pub fn record(&self, record: TransitionRecord<S>) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// Get the path of states traversed.
    ///
    /// Returns references to states in order: the `from` state of the
    /// first record, then the `to` state of each record.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flywheel::core::{StateHistory, TransitionRecord};
    /// use flywheel::state_enum;
    /// use chrono::Utc;
    ///
    /// state_enum! {
    ///     enum Phase { One, Two, Three }
    /// }
    ///
    /// let mut history = StateHistory::new();
    /// history = history.record(TransitionRecord {
    ///     from: Phase::One,
    ///     to: Phase::Two,
    ///     trigger: "next".to_string(),
    ///     timestamp: Utc::now(),
    /// });
    /// history = history.record(TransitionRecord {
    ///     from: Phase::Two,
    ///     to: Phase::Three,
    ///     trigger: "next".to_string(),
    ///     timestamp: Utc::now(),
    /// });
    ///
    /// let path = history.path();
    /// assert_eq!(path.len(), 3);
    /// assert_eq!(path[0], &Phase::One);
    /// assert_eq!(path[2], &Phase::Three);
    /// ```
    pub fn path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.records.first() {
            path.push(&first.from);
        }
        for record in &self.records {
            path.push(&record.to);
        }
        path
    }

    /// Calculate total duration from first to last recorded transition.
    ///
    /// Returns `None` if there are no records.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.first(), self.records.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all records in order.
    pub fn records(&self) -> &[TransitionRecord<S>] {
        &self.records
    }

    /// Number of recorded transitions.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check whether the history is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
