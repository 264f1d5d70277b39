//! Transition records linking states through triggers.

use crate::core::{State, Trigger};
use std::fmt;
use std::sync::Arc;

/// Type alias for transition actions.
///
/// Actions are zero-argument side-effecting callables, invoked
/// synchronously during a successful transition, before the state write.
/// They are shared via `Arc` so transitions stay cloneable.
pub type Action = Arc<dyn Fn() + Send + Sync>;

/// A transition rule: from `origin`, on `trigger`, move to `destination`.
///
/// The action is optional; when absent, executing the transition produces
/// no observable effect beyond the state change. A transition is
/// meaningful only once registered in a machine's table, and transitions
/// whose origin equals their destination are ordinary transitions (the
/// action still runs).
///
/// # Example
///
/// ```rust
/// use flywheel::core::Transition;
/// use flywheel::{state_enum, trigger_enum};
///
/// state_enum! {
///     enum Light { Red, Green }
/// }
///
/// trigger_enum! {
///     enum Signal { Go }
/// }
///
/// let t = Transition::new(Light::Red, Light::Green, Signal::Go);
/// assert!(t.matches(&Light::Red, &Signal::Go));
/// assert!(!t.matches(&Light::Green, &Signal::Go));
/// ```
pub struct Transition<S: State, T: Trigger> {
    pub origin: S,
    pub destination: S,
    pub trigger: T,
    pub action: Option<Action>,
}

impl<S: State, T: Trigger> Transition<S, T> {
    /// Create a transition with no action.
    pub fn new(origin: S, destination: S, trigger: T) -> Self {
        Self {
            origin,
            destination,
            trigger,
            action: None,
        }
    }

    /// Create a transition with an action.
    pub fn with_action<F>(origin: S, destination: S, trigger: T, action: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self {
            origin,
            destination,
            trigger,
            action: Some(Arc::new(action)),
        }
    }

    /// Check whether this transition applies for the given current state
    /// and trigger (pure).
    pub fn matches(&self, current: &S, trigger: &T) -> bool {
        self.origin == *current && self.trigger == *trigger
    }
}

impl<S: State, T: Trigger> Clone for Transition<S, T> {
    fn clone(&self) -> Self {
        Self {
            origin: self.origin.clone(),
            destination: self.destination.clone(),
            trigger: self.trigger.clone(),
            action: self.action.clone(),
        }
    }
}

impl<S: State, T: Trigger> fmt::Debug for Transition<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("origin", &self.origin)
            .field("destination", &self.destination)
            .field("trigger", &self.trigger)
            .field("action", &self.action.as_ref().map(|_| "<fn>"))
            .finish()
    }
}
