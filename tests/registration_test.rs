//! Event registration through the content store

mod helpers;

use std::sync::Arc;
use std::thread;
use assert_matches::assert_matches;
use proptest::prelude::*;

use helpers::*;
use SchiriPortal::{
    models::{Placement, Registrant},
    PortalError,
};

#[test]
fn test_single_slot_scenario() {
    let (store, _) = store_with(seed_with_events(vec![event("e1", 1)]));
    let alice = Registrant::new("Alice", "alice@example.org");
    let bob = Registrant::new("Bob", "bob@example.org");

    let first = store.register("e1", alice.clone()).unwrap();
    assert_eq!(first.placement, Placement::Confirmed);
    assert_eq!(first.event.participants, vec![alice.clone()]);

    let second = store.register("e1", bob.clone()).unwrap();
    assert_eq!(second.placement, Placement::Waitlisted);
    assert_eq!(second.event.waitlist, vec![bob]);
    assert_eq!(second.event.participants, vec![alice]);
    assert!(second.event.is_full());
    assert_eq!(second.event.spots_remaining(), 0);
}

#[test]
fn test_unknown_event_changes_nothing() {
    let (store, _) = builtin_store();
    let before = store.list_events();

    let result = store.register("unknown-id", fake_registrant());

    assert_matches!(result, Err(PortalError::EventNotFound { ref event_id }) if event_id == "unknown-id");
    assert!(result.unwrap_err().is_not_found());
    assert_eq!(store.list_events(), before);
}

#[test]
fn test_registration_replaces_stored_event() {
    let (store, _) = builtin_store();
    let snapshot = store.list_events();

    let outcome = store.register("2", fake_registrant()).unwrap();

    assert!(snapshot[1].participants.is_empty());
    assert_eq!(store.find_event("2"), Some(outcome.event));
    assert_eq!(store.find_event("1"), Some(snapshot[0].clone()));
}

#[test]
fn test_reads_are_idempotent() {
    let (store, _) = builtin_store();
    store.register("1", fake_registrant()).unwrap();

    let first = store.list_events();
    let second = store.list_events();
    assert_eq!(first, second);
    assert_eq!(store.list_questions(), store.list_questions());
}

#[test]
fn test_repeat_registration_is_not_deduplicated() {
    let (store, _) = store_with(seed_with_events(vec![event("e1", 2)]));
    let alice = Registrant::new("Alice", "alice@example.org");

    store.register("e1", alice.clone()).unwrap();
    store.register("e1", alice.clone()).unwrap();
    let third = store.register("e1", alice.clone()).unwrap();

    assert_eq!(third.event.participants, vec![alice.clone(), alice.clone()]);
    assert_eq!(third.event.waitlist, vec![alice]);
}

#[test]
fn test_registration_does_not_validate_format() {
    let (store, _) = store_with(seed_with_events(vec![event("e1", 1)]));
    let malformed = Registrant::new("", "kein-at");
    assert_matches!(malformed.validate_format(), Err(PortalError::ValidationRejected(_)));

    let outcome = store.register("e1", malformed.clone()).unwrap();
    assert_eq!(outcome.placement, Placement::Confirmed);
    assert_eq!(outcome.event.participants, vec![malformed]);
}

#[test]
fn test_concurrent_registrations_respect_capacity() {
    let (store, _) = store_with(seed_with_events(vec![event("e1", 5)]));
    let store = Arc::new(store);

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                (0..4)
                    .map(|_| store.register("e1", fake_registrant()).unwrap().placement)
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let placements: Vec<Placement> = handles
        .into_iter()
        .flat_map(|h| h.join().expect("registration thread panicked"))
        .collect();

    let confirmed = placements.iter().filter(|p| **p == Placement::Confirmed).count();
    assert_eq!(confirmed, 5);

    let event = store.find_event("e1").unwrap();
    assert_eq!(event.participants.len(), 5);
    assert_eq!(event.waitlist.len(), 59);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_capacity_and_order(capacity in 1u32..12, arrivals in 0usize..30) {
        let (store, _) = store_with(seed_with_events(vec![event("e1", capacity)]));
        let registrants: Vec<Registrant> = (0..arrivals)
            .map(|i| Registrant::new(format!("Schiri {}", i), format!("schiri{}@example.org", i)))
            .collect();

        for registrant in &registrants {
            store.register("e1", registrant.clone()).unwrap();
        }

        let event = store.find_event("e1").unwrap();
        let confirmed = arrivals.min(capacity as usize);
        prop_assert_eq!(event.participants.len(), confirmed);
        prop_assert_eq!(event.waitlist.len(), arrivals - confirmed);
        prop_assert_eq!(&event.participants[..], &registrants[..confirmed]);
        prop_assert_eq!(&event.waitlist[..], &registrants[confirmed..]);
    }
}
