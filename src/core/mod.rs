//! Core state machine types and logic.
//!
//! This module contains the engine and the value types it dispatches on:
//! - State and trigger definitions via the `State` and `Trigger` traits
//! - `Transition` records with optional actions
//! - The `StateMachine` engine with first-match dispatch
//! - Immutable history tracking
//!
//! Lookup and inspection functions are pure; only `execute` and
//! `set_state` mutate a machine.

mod history;
mod machine;
mod state;
mod transition;
mod trigger;

pub use history::{StateHistory, TransitionRecord};
pub use machine::StateMachine;
pub use state::State;
pub use transition::{Action, Transition};
pub use trigger::Trigger;
