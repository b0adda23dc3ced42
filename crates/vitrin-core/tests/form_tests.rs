use std::time::Duration;
use vitrin_core::form::{FormFeedback, FormPhase, FormTransition};

fn feedback() -> FormFeedback {
    FormFeedback::new(Duration::from_millis(1500), Duration::from_millis(2000))
}

#[test]
fn submission_walks_through_both_phases() {
    let mut f = feedback();
    let mut out = Vec::new();
    assert_eq!(f.phase(), FormPhase::Idle);

    assert!(f.submit());
    assert_eq!(f.phase(), FormPhase::Sending);

    f.tick(Duration::from_millis(1499), &mut out);
    assert!(out.is_empty());
    f.tick(Duration::from_millis(1), &mut out);
    assert_eq!(out, vec![FormTransition::Sent]);
    assert_eq!(f.phase(), FormPhase::Sent);

    out.clear();
    f.tick(Duration::from_millis(1999), &mut out);
    assert!(out.is_empty());
    f.tick(Duration::from_millis(1), &mut out);
    assert_eq!(out, vec![FormTransition::Restored]);
    assert_eq!(f.phase(), FormPhase::Idle);
}

#[test]
fn oversized_tick_emits_transitions_in_order() {
    let mut f = feedback();
    let mut out = Vec::new();
    assert!(f.submit());
    f.tick(Duration::from_secs(10), &mut out);
    assert_eq!(out, vec![FormTransition::Sent, FormTransition::Restored]);
    assert_eq!(f.phase(), FormPhase::Idle);
}

#[test]
fn resubmission_is_ignored_until_idle_again() {
    let mut f = feedback();
    let mut out = Vec::new();
    assert!(f.submit());
    assert!(!f.submit(), "still sending");

    f.tick(Duration::from_millis(1500), &mut out);
    assert!(!f.submit(), "confirmation still showing");

    f.tick(Duration::from_millis(2000), &mut out);
    assert!(f.submit(), "idle again after the hold");
}

#[test]
fn ticking_an_idle_form_does_nothing() {
    let mut f = feedback();
    let mut out = Vec::new();
    f.tick(Duration::from_secs(5), &mut out);
    assert!(out.is_empty());
    assert_eq!(f.phase(), FormPhase::Idle);
}
