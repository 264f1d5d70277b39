//! Builder API for ergonomic state machine construction.
//!
//! This module provides fluent builders and macros for creating state
//! machines with minimal boilerplate while maintaining type safety.
//!
//! # Example
//!
//! ```
//! use flywheel::builder::{StateMachineBuilder, TransitionBuilder};
//! use flywheel::{state_enum, trigger_enum};
//!
//! state_enum! {
//!     enum Order { New, Paid, Shipped }
//! }
//!
//! trigger_enum! {
//!     enum Event { Pay, Ship }
//! }
//!
//! let mut machine = StateMachineBuilder::new()
//!     .initial(Order::New)
//!     .transition(TransitionBuilder::new().from(Order::New).to(Order::Paid).on(Event::Pay))
//!     .unwrap()
//!     .transition(TransitionBuilder::new().from(Order::Paid).to(Order::Shipped).on(Event::Ship))
//!     .unwrap()
//!     .build()
//!     .unwrap();
//!
//! assert!(machine.execute(&Event::Pay));
//! assert_eq!(machine.state(), &Order::Paid);
//! ```

pub mod error;
pub mod machine;
pub mod macros;
pub mod transition;

pub use error::BuildError;
pub use machine::StateMachineBuilder;
pub use transition::TransitionBuilder;
