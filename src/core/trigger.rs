//! Core Trigger trait for transition stimuli.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine triggers.
///
/// A trigger is an external stimulus value that may cause a transition.
/// Like states, triggers are opaque caller-defined values compared only
/// by equality; the machine matches them against the trigger field of
/// registered transitions and nothing more.
///
/// # Example
///
/// ```rust
/// use flywheel::core::Trigger;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum DoorTrigger {
///     Push,
///     TurnKey,
/// }
///
/// impl Trigger for DoorTrigger {
///     fn name(&self) -> &str {
///         match self {
///             Self::Push => "Push",
///             Self::TurnKey => "TurnKey",
///         }
///     }
/// }
/// ```
pub trait Trigger:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the trigger's name for display/logging.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestTrigger {
        Start,
        Stop,
    }

    impl Trigger for TestTrigger {
        fn name(&self) -> &str {
            match self {
                Self::Start => "Start",
                Self::Stop => "Stop",
            }
        }
    }

    #[test]
    fn trigger_name_returns_correct_value() {
        assert_eq!(TestTrigger::Start.name(), "Start");
        assert_eq!(TestTrigger::Stop.name(), "Stop");
    }

    #[test]
    fn trigger_is_comparable() {
        assert_eq!(TestTrigger::Start, TestTrigger::Start);
        assert_ne!(TestTrigger::Start, TestTrigger::Stop);
    }

    #[test]
    fn trigger_serializes_correctly() {
        let trigger = TestTrigger::Stop;
        let json = serde_json::to_string(&trigger).unwrap();
        let deserialized: TestTrigger = serde_json::from_str(&json).unwrap();
        assert_eq!(trigger, deserialized);
    }
}
