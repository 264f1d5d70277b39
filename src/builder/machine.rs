//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::builder::transition::TransitionBuilder;
use crate::core::{State, StateMachine, Transition, Trigger};

/// Builder for constructing state machines with a fluent API.
///
/// Only the initial state is required. A machine with no transitions is
/// legal; every `execute` on it simply returns `false`.
pub struct StateMachineBuilder<S: State, T: Trigger> {
    initial: Option<S>,
    transitions: Vec<Transition<S, T>>,
}

impl<S: State, T: Trigger> StateMachineBuilder<S, T> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            transitions: Vec::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Add a transition using a builder.
    /// Returns an error if the builder fails validation.
    pub fn transition(mut self, builder: TransitionBuilder<S, T>) -> Result<Self, BuildError> {
        let transition = builder.build()?;
        self.transitions.push(transition);
        Ok(self)
    }

    /// Add a pre-built transition.
    pub fn add_transition(mut self, transition: Transition<S, T>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add multiple transitions at once, preserving their order.
    pub fn transitions<I>(mut self, transitions: I) -> Self
    where
        I: IntoIterator<Item = Transition<S, T>>,
    {
        self.transitions.extend(transitions);
        self
    }

    /// Build the state machine.
    /// Returns an error if the initial state is missing.
    pub fn build(self) -> Result<StateMachine<S, T>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        Ok(StateMachine::with_transitions(initial, self.transitions))
    }
}

impl<S: State, T: Trigger> Default for StateMachineBuilder<S, T> {
    fn default() -> Self {
        Self::new()
    }
}
