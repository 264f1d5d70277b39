//! Build errors for state machine and transition builders.

use thiserror::Error;

/// Errors that can occur when building state machines and transitions.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("Transition origin state not specified. Call .from(state)")]
    MissingOriginState,

    #[error("Transition destination state not specified. Call .to(state)")]
    MissingDestinationState,

    #[error("Transition trigger not specified. Call .on(trigger)")]
    MissingTrigger,
}
