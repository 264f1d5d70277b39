//! Builder for constructing state transitions.

use crate::builder::error::BuildError;
use crate::core::{Action, State, Transition, Trigger};
use std::sync::Arc;

/// Builder for constructing transitions with a fluent API.
///
/// Origin, destination and trigger are required; the action is optional.
pub struct TransitionBuilder<S: State, T: Trigger> {
    origin: Option<S>,
    destination: Option<S>,
    trigger: Option<T>,
    action: Option<Action>,
}

impl<S: State, T: Trigger> TransitionBuilder<S, T> {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self {
            origin: None,
            destination: None,
            trigger: None,
            action: None,
        }
    }

    /// Set the origin state (required).
    pub fn from(mut self, state: S) -> Self {
        self.origin = Some(state);
        self
    }

    /// Set the destination state (required).
    pub fn to(mut self, state: S) -> Self {
        self.destination = Some(state);
        self
    }

    /// Set the trigger (required).
    pub fn on(mut self, trigger: T) -> Self {
        self.trigger = Some(trigger);
        self
    }

    /// Attach an action (optional).
    ///
    /// The action runs synchronously during a successful transition,
    /// before the state update becomes observable.
    pub fn action<F>(mut self, action: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.action = Some(Arc::new(action));
        self
    }

    /// Build the transition.
    pub fn build(self) -> Result<Transition<S, T>, BuildError> {
        let origin = self.origin.ok_or(BuildError::MissingOriginState)?;
        let destination = self.destination.ok_or(BuildError::MissingDestinationState)?;
        let trigger = self.trigger.ok_or(BuildError::MissingTrigger)?;

        Ok(Transition {
            origin,
            destination,
            trigger,
            action: self.action,
        })
    }
}

impl<S: State, T: Trigger> Default for TransitionBuilder<S, T> {
    fn default() -> Self {
        Self::new()
    }
}
