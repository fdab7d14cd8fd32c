// Host-side tests for the pop cycle and its keyframes.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod site {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod pop {
        include!("../src/core/pop.rs");
    }
}

use site::constants::*;
use site::pop::*;
use std::cell::RefCell;

#[test]
fn keyframes_swell_then_collapse() {
    assert_eq!(POP_KEYFRAMES.len(), 3);
    assert_eq!(POP_KEYFRAMES[0].scale, 1.0);
    assert_eq!(POP_KEYFRAMES[1].scale, 1.28);
    assert_eq!(POP_KEYFRAMES[1].offset, Some(0.6));
    assert_eq!(POP_KEYFRAMES[1].opacity, 1.0);
    assert_eq!(POP_KEYFRAMES[2].scale, 0.02);
    assert_eq!(POP_KEYFRAMES[2].opacity, 0.0);
}

#[test]
fn keyframe_transform_keeps_float_translation() {
    let peak = POP_KEYFRAMES[1];
    assert_eq!(
        peak.transform("translate(3px, -4px)"),
        "translate(3px, -4px) scale(1.28)"
    );
    assert_eq!(peak.transform(""), "scale(1.28)");
}

#[test]
fn callback_runs_at_finish_before_restore() {
    let log = RefCell::new(Vec::new());
    let cycle = RefCell::new(PopCycle::new());
    assert!(cycle.borrow().style().pointer_events);

    let ticket = cycle.borrow_mut().begin();
    assert_eq!(cycle.borrow().phase(), PopPhase::Popping);
    assert!(!cycle.borrow().style().pointer_events);

    // t = POP_DURATION_MS: animation ends
    assert!(PopCycle::finish_shared(&cycle, ticket, || {
        log.borrow_mut().push("callback")
    }));
    log.borrow_mut().push("hidden");
    assert_eq!(cycle.borrow().style().opacity, 0.0);
    assert!(!cycle.borrow().style().pointer_events);

    // t = POP_DURATION_MS + RESPAWN_DELAY_MS
    let mut cycle = cycle.into_inner();
    assert!(cycle.restore(ticket));
    log.borrow_mut().push("restored");
    let style = cycle.style();
    assert_eq!(style.opacity, 1.0);
    assert!(style.pointer_events);
    assert_eq!(cycle.phase(), PopPhase::Idle);

    assert_eq!(*log.borrow(), vec!["callback", "hidden", "restored"]);
}

#[test]
fn restore_before_finish_is_rejected() {
    let mut cycle = PopCycle::new();
    let ticket = cycle.begin();
    assert!(!cycle.restore(ticket));
    assert_eq!(cycle.phase(), PopPhase::Popping);
}

#[test]
fn repop_invalidates_pending_restore() {
    let mut cycle = PopCycle::new();
    let first = cycle.begin();
    assert!(cycle.finish(first));

    // popped again while the respawn timer is pending
    let second = cycle.begin();
    assert!(!cycle.restore(first));
    assert_eq!(cycle.phase(), PopPhase::Popping);

    assert!(!cycle.finish(first));
    assert!(cycle.finish(second));
    assert!(cycle.restore(second));
    assert_eq!(cycle.phase(), PopPhase::Idle);
}

#[test]
fn finish_fires_once_per_ticket() {
    let cycle = RefCell::new(PopCycle::new());
    let ticket = cycle.borrow_mut().begin();
    let mut fired = 0;
    assert!(PopCycle::finish_shared(&cycle, ticket, || fired += 1));
    assert!(!PopCycle::finish_shared(&cycle, ticket, || fired += 1));
    assert_eq!(fired, 1);
}

#[test]
fn reset_returns_to_rest_and_drops_tickets() {
    let mut cycle = PopCycle::new();
    let ticket = cycle.begin();
    cycle.reset();
    assert_eq!(cycle.phase(), PopPhase::Idle);
    assert!(!cycle.is_current(ticket));
    assert!(!cycle.finish(ticket));
    let shared = RefCell::new(cycle);
    assert!(!PopCycle::finish_shared(&shared, ticket, || panic!("stale callback ran")));
}

#[test]
fn completion_callback_can_pop_again() {
    let cycle = RefCell::new(PopCycle::new());
    let first = cycle.borrow_mut().begin();
    let mut second = None;

    assert!(PopCycle::finish_shared(&cycle, first, || {
        second = Some(cycle.borrow_mut().begin());
    }));

    let second = second.expect("callback ran");
    assert_eq!(cycle.borrow().phase(), PopPhase::Popping);
    assert!(!cycle.borrow().is_current(first));
    assert!(!cycle.borrow_mut().restore(first));
    assert!(cycle.borrow_mut().finish(second));
    assert!(cycle.borrow_mut().restore(second));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn respawn_timing_is_ordered() {
    assert!(RESPAWN_DELAY_MS > 0);
    assert!(RESPAWN_FADE_MS > RESPAWN_DELAY_MS);
    assert!(POP_DURATION_MS > 0.0);
}
