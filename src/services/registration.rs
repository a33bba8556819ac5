//! Registration engine
//!
//! Decides whether a registrant lands on the participant list or on the
//! waitlist. Placement never mutates its input: it returns a fresh `Event`
//! that the store swaps in for the old one.

use crate::models::{Event, Placement, Registrant};

/// Place a registrant on `event` under its capacity limit.
///
/// Registrants are appended in arrival order. Nothing is deduplicated and
/// nobody is ever promoted off the waitlist.
pub fn place_registrant(event: &Event, registrant: Registrant) -> (Event, Placement) {
    let mut updated = event.clone();

    let placement = if updated.participants.len() < updated.max_participants as usize {
        updated.participants.push(registrant);
        Placement::Confirmed
    } else {
        updated.waitlist.push(registrant);
        Placement::Waitlisted
    };

    (updated, placement)
}
