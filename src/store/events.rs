//! Event repository
//!
//! Holds the only mutable collection in the store. Updates are whole-value
//! replacements performed under the write lock, so readers see either the
//! old event or the new one and the capacity check cannot race.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;
use crate::models::{Event, Registrant, Registration};
use crate::services::registration::place_registrant;
use crate::utils::errors::{PortalError, Result};
use crate::utils::logging::log_registration;

#[derive(Debug)]
pub struct EventRepository {
    events: RwLock<Vec<Event>>,
}

impl EventRepository {
    pub fn new(events: Vec<Event>) -> Self {
        Self {
            events: RwLock::new(events),
        }
    }

    // Writers only ever swap complete values, so a poisoned lock still
    // guards consistent data.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Event>> {
        self.events.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Event>> {
        self.events.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of all events in seed order
    pub fn list(&self) -> Vec<Event> {
        self.read().clone()
    }

    pub fn find_by_id(&self, event_id: &str) -> Option<Event> {
        self.read().iter().find(|e| e.id == event_id).cloned()
    }

    pub fn count(&self) -> usize {
        self.read().len()
    }

    /// Register for an event, replacing it with the placed copy
    pub fn register(&self, event_id: &str, registrant: Registrant) -> Result<Registration> {
        let mut events = self.write();

        let slot = events
            .iter_mut()
            .find(|e| e.id == event_id)
            .ok_or_else(|| PortalError::EventNotFound { event_id: event_id.to_string() })?;

        debug!(event_id = event_id, "Placing registrant");
        let (updated, placement) = place_registrant(slot, registrant);
        *slot = updated.clone();

        log_registration(event_id, placement, updated.participants.len(), updated.waitlist.len());
        Ok(Registration {
            event: updated,
            placement,
        })
    }
}
