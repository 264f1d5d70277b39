//! The finite state machine engine.

use crate::core::{State, StateHistory, Transition, TransitionRecord, Trigger};
use chrono::Utc;

/// A trigger-driven finite state machine.
///
/// The machine owns one mutable current state and one transition table.
/// Driving it is done exclusively through [`execute`](Self::execute):
/// the first registered transition whose origin equals the current state
/// and whose trigger equals the supplied one wins, its action (if any)
/// runs synchronously, and then the current state moves to the
/// transition's destination.
///
/// Registration order is significant. When several transitions share an
/// origin and trigger, the one registered first always wins; duplicates
/// are never rejected or detected.
///
/// # Example
///
/// ```rust
/// use flywheel::core::{StateMachine, Transition};
/// use flywheel::{state_enum, trigger_enum};
///
/// state_enum! {
///     enum Chain { A, B, C }
/// }
///
/// trigger_enum! {
///     enum Step { Ab, Bc }
/// }
///
/// let mut fsm = StateMachine::with_transitions(
///     Chain::A,
///     [
///         Transition::new(Chain::A, Chain::B, Step::Ab),
///         Transition::new(Chain::B, Chain::C, Step::Bc),
///     ],
/// );
///
/// assert!(fsm.is_initial());
/// assert!(fsm.execute(&Step::Ab));
/// assert_eq!(fsm.state(), &Chain::B);
/// assert!(fsm.execute(&Step::Bc));
/// assert_eq!(fsm.state(), &Chain::C);
/// assert!(!fsm.execute(&Step::Ab)); // no transition from C
/// ```
pub struct StateMachine<S: State, T: Trigger> {
    initial: S,
    current: S,
    transitions: Vec<Transition<S, T>>,
    history: StateHistory<S>,
}

impl<S: State, T: Trigger> StateMachine<S, T> {
    /// Create a new machine in the given initial state with an empty
    /// transition table.
    pub fn new(initial: S) -> Self {
        Self {
            current: initial.clone(),
            initial,
            transitions: Vec::new(),
            history: StateHistory::new(),
        }
    }

    /// Create a machine and bulk-register transitions.
    ///
    /// Equivalent to [`new`](Self::new) followed by
    /// [`add_transitions`](Self::add_transitions).
    pub fn with_transitions<I>(initial: S, transitions: I) -> Self
    where
        I: IntoIterator<Item = Transition<S, T>>,
    {
        let mut machine = Self::new(initial);
        machine.add_transitions(transitions);
        machine
    }

    /// Append a single transition to the table.
    pub fn add_transition(&mut self, transition: Transition<S, T>) {
        self.transitions.push(transition);
    }

    /// Append a collection of transitions to the table, in input order.
    ///
    /// No validation is performed: duplicate `(origin, trigger)` pairs
    /// are accepted and disambiguated purely by registration order.
    /// An empty collection is a no-op.
    pub fn add_transitions<I>(&mut self, transitions: I)
    where
        I: IntoIterator<Item = Transition<S, T>>,
    {
        self.transitions.extend(transitions);
    }

    /// Get the current state (pure).
    pub fn state(&self) -> &S {
        &self.current
    }

    /// Unconditionally overwrite the current state.
    ///
    /// Bypasses the transition table entirely: no lookup, no action, no
    /// history record. This is an administrative escape hatch for test
    /// setup and recovery, not a normal operational path. The target
    /// state need not appear in any registered transition.
    pub fn set_state(&mut self, state: S) {
        log::debug!(
            "state override: '{}' -> '{}'",
            self.current.name(),
            state.name()
        );
        self.current = state;
    }

    /// Check whether the current state equals the initial state.
    pub fn is_initial(&self) -> bool {
        self.current == self.initial
    }

    /// Execute a trigger.
    ///
    /// Scans the table in registration order for the first transition
    /// whose origin equals the current state and whose trigger equals
    /// `trigger`. On a match, the transition's action (if any) is invoked
    /// exactly once, synchronously, and only after it returns is the
    /// current state updated to the destination; `true` is returned.
    ///
    /// Returns `false` when no transition matches - whether because the
    /// current state has no outgoing transitions at all or because none
    /// of them carries this trigger. Either way the state is unchanged
    /// and no action runs, so speculative calls are safe to repeat.
    ///
    /// # Panics
    ///
    /// Propagates panics from the action unchanged. The state write is
    /// sequenced after the action call, so a panicking action leaves the
    /// machine in its pre-transition state.
    pub fn execute(&mut self, trigger: &T) -> bool {
        let matched = self
            .transitions
            .iter()
            .find(|t| t.matches(&self.current, trigger));

        let Some(transition) = matched else {
            log::trace!(
                "no transition from '{}' on trigger '{}'",
                self.current.name(),
                trigger.name()
            );
            return false;
        };

        let action = transition.action.clone();
        let destination = transition.destination.clone();

        if let Some(action) = action {
            action();
        }

        log::debug!(
            "transition: '{}' -- '{}' --> '{}'",
            self.current.name(),
            trigger.name(),
            destination.name()
        );

        self.history = self.history.record(TransitionRecord {
            from: self.current.clone(),
            to: destination.clone(),
            trigger: trigger.name().to_string(),
            timestamp: Utc::now(),
        });
        self.current = destination;
        true
    }

    /// Get the history of executed transitions (pure).
    pub fn history(&self) -> &StateHistory<S> {
        &self.history
    }

    /// Iterate the registered transitions whose origin equals `state`,
    /// in registration order.
    pub fn transitions_from<'a>(
        &'a self,
        state: &'a S,
    ) -> impl Iterator<Item = &'a Transition<S, T>> {
        self.transitions.iter().filter(move |t| t.origin == *state)
    }

    /// Check whether a state is terminal, i.e. has no outgoing
    /// transitions registered. `execute` from a terminal state always
    /// returns `false`.
    pub fn is_terminal(&self, state: &S) -> bool {
        self.transitions_from(state).next().is_none()
    }

    /// Total number of registered transitions.
    pub fn transition_count(&self) -> usize {
        self.transitions.len()
    }
}
