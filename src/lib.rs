//! Flywheel: a generic trigger-driven finite state machine
//!
//! A machine owns a current state and a table of transitions. Executing a
//! trigger scans the transitions registered for the current state in
//! declaration order, runs the action of the first one whose trigger
//! matches, and moves to its destination state. There are no guards and
//! no priorities beyond declaration order: the first registered match
//! always wins.
//!
//! # Core Concepts
//!
//! - **State** / **Trigger**: opaque caller-defined value types, compared
//!   only by equality
//! - **Transition**: `(origin, destination, trigger, optional action)`
//! - **StateMachine**: first-match dispatch, boolean `execute` contract
//! - **History**: immutable record of every successful transition
//!
//! # Example
//!
//! A three-state chain `A -- a --> B -- b --> C`:
//!
//! ```rust
//! use flywheel::core::{StateMachine, Transition};
//! use flywheel::{state_enum, trigger_enum};
//!
//! state_enum! {
//!     enum States { A, B, C }
//! }
//!
//! trigger_enum! {
//!     enum Triggers { SmallA, SmallB }
//! }
//!
//! let mut fsm = StateMachine::with_transitions(
//!     States::A,
//!     [
//!         Transition::with_action(States::A, States::B, Triggers::SmallA, || {
//!             println!("leaving A for B");
//!         }),
//!         Transition::with_action(States::B, States::C, Triggers::SmallB, || {
//!             println!("leaving B for C");
//!         }),
//!     ],
//! );
//!
//! assert!(fsm.is_initial());
//! assert!(fsm.execute(&Triggers::SmallA));
//! assert_eq!(fsm.state(), &States::B);
//! assert!(fsm.execute(&Triggers::SmallB));
//! assert_eq!(fsm.state(), &States::C);
//!
//! // No transition out of C: a silent no-op.
//! assert!(!fsm.execute(&Triggers::SmallA));
//!
//! // Administrative override, bypassing the table.
//! fsm.set_state(States::A);
//! assert!(fsm.is_initial());
//! ```

pub mod builder;
pub mod core;

// Re-export commonly used types
pub use crate::builder::{BuildError, StateMachineBuilder, TransitionBuilder};
pub use crate::core::{
    Action, State, StateHistory, StateMachine, Transition, TransitionRecord, Trigger,
};
