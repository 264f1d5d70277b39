//! Core State trait for state machine states.
//!
//! All state machine states must implement this trait, which provides
//! pure methods for inspecting state properties without side effects.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// States are opaque, caller-defined values compared only by equality.
/// A machine never inspects a state beyond `==` and `name()`; whether a
/// state is terminal is a property of the transition table (a state with
/// no outgoing transitions), not of the state value itself.
///
/// # Required Traits
///
/// - `Clone`: states must be cloneable for history tracking
/// - `PartialEq`: states must be comparable for transition lookup
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: states must be serializable so
///   histories containing them can be exported
///
/// # Example
///
/// ```rust
/// use flywheel::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum DoorState {
///     Open,
///     Closed,
///     Locked,
/// }
///
/// impl State for DoorState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///             Self::Locked => "Locked",
///         }
///     }
/// }
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    ///
    /// Returns a static string reference for zero-cost naming.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestState {
        Idle,
        Running,
        Stopped,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Idle => "Idle",
                Self::Running => "Running",
                Self::Stopped => "Stopped",
            }
        }
    }

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(TestState::Idle.name(), "Idle");
        assert_eq!(TestState::Running.name(), "Running");
        assert_eq!(TestState::Stopped.name(), "Stopped");
    }

    #[test]
    fn state_serializes_correctly() {
        let state = TestState::Running;
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: TestState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }

    #[test]
    fn state_is_cloneable_and_comparable() {
        let state = TestState::Idle;
        let cloned = state.clone();
        assert_eq!(state, cloned);
        assert_ne!(state, TestState::Stopped);
    }
}
