//! End-to-end scenarios for the documented three-state chain:
//!
//! ```text
//! +---+            +---+            +---+
//! | A | -- 'a' --> | B | -- 'b' --> | C |
//! +---+            +---+            +---+
//! ```

use flywheel::core::{StateMachine, Transition};
use flywheel::{state_enum, trigger_enum};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

state_enum! {
    enum States { A, B, C }
}

trigger_enum! {
    enum Triggers { TrigA, TrigB }
}

fn chain_machine(counter: &Arc<AtomicUsize>) -> StateMachine<States, Triggers> {
    let first = Arc::clone(counter);
    let second = Arc::clone(counter);
    StateMachine::with_transitions(
        States::A,
        [
            Transition::with_action(States::A, States::B, Triggers::TrigA, move || {
                first.fetch_add(1, Ordering::SeqCst);
            }),
            Transition::with_action(States::B, States::C, Triggers::TrigB, move || {
                second.fetch_add(1, Ordering::SeqCst);
            }),
        ],
    )
}

#[test]
fn chain_walks_a_to_b_to_c() {
    let actions = Arc::new(AtomicUsize::new(0));
    let mut fsm = chain_machine(&actions);

    assert_eq!(fsm.state(), &States::A);
    assert!(fsm.is_initial());

    assert!(fsm.execute(&Triggers::TrigA));
    assert_eq!(fsm.state(), &States::B);
    assert!(!fsm.is_initial());
    assert_eq!(actions.load(Ordering::SeqCst), 1);

    assert!(fsm.execute(&Triggers::TrigB));
    assert_eq!(fsm.state(), &States::C);
    assert_eq!(actions.load(Ordering::SeqCst), 2);

    // C has no outgoing transitions at all.
    assert!(!fsm.execute(&Triggers::TrigA));
    assert_eq!(fsm.state(), &States::C);
    assert_eq!(actions.load(Ordering::SeqCst), 2);
}

#[test]
fn override_back_to_initial_runs_no_actions() {
    let actions = Arc::new(AtomicUsize::new(0));
    let mut fsm = chain_machine(&actions);

    fsm.execute(&Triggers::TrigA);
    fsm.execute(&Triggers::TrigB);

    fsm.set_state(States::A);
    assert_eq!(fsm.state(), &States::A);
    assert!(fsm.is_initial());
    assert_eq!(actions.load(Ordering::SeqCst), 2);
}

#[test]
fn machine_without_transitions_rejects_every_trigger() {
    let mut fsm: StateMachine<States, Triggers> = StateMachine::new(States::A);

    assert!(!fsm.execute(&Triggers::TrigA));
    assert!(!fsm.execute(&Triggers::TrigB));
    assert!(fsm.is_initial());
}

#[test]
fn duplicate_origin_trigger_pairs_resolve_by_registration_order() {
    let mut fsm = StateMachine::with_transitions(
        States::A,
        [
            Transition::new(States::A, States::B, Triggers::TrigA),
            Transition::new(States::A, States::C, Triggers::TrigA),
        ],
    );

    assert!(fsm.execute(&Triggers::TrigA));
    assert_eq!(fsm.state(), &States::B);
}

#[test]
fn terminal_state_is_visible_through_introspection() {
    let actions = Arc::new(AtomicUsize::new(0));
    let fsm = chain_machine(&actions);

    assert!(!fsm.is_terminal(&States::A));
    assert!(!fsm.is_terminal(&States::B));
    assert!(fsm.is_terminal(&States::C));
}
