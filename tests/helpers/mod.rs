//! Shared helpers for integration tests
//!
//! Store builders, a recording feedback sink and generated registrants.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use chrono::{NaiveDate, NaiveTime};
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::Fake;

use SchiriPortal::{
    models::{Event, FeedbackDraft, FeedbackRecord, Rating, Registrant},
    store::{ContentStore, SeedData},
    services::FeedbackSink,
    PortalError, Result,
};

/// Sink that keeps every delivered record for inspection
#[derive(Default)]
pub struct RecordingSink {
    records: Mutex<Vec<FeedbackRecord>>,
}

impl RecordingSink {
    pub fn records(&self) -> Vec<FeedbackRecord> {
        self.records.lock().unwrap().clone()
    }
}

impl FeedbackSink for RecordingSink {
    fn deliver(&self, record: &FeedbackRecord) -> Result<()> {
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }
}

/// Sink that refuses everything
pub struct FailingSink;

impl FeedbackSink for FailingSink {
    fn deliver(&self, _record: &FeedbackRecord) -> Result<()> {
        Err(PortalError::FeedbackDelivery("sink offline".to_string()))
    }
}

/// Store over the built-in content with a recording sink
pub fn builtin_store() -> (ContentStore, Arc<RecordingSink>) {
    store_with(SeedData::builtin())
}

pub fn store_with(seed: SeedData) -> (ContentStore, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::default());
    let store = ContentStore::new(seed, sink.clone()).expect("seed should be valid");
    (store, sink)
}

/// Seed holding only the given events
pub fn seed_with_events(events: Vec<Event>) -> SeedData {
    SeedData {
        events,
        ..SeedData::default()
    }
}

pub fn event(id: &str, max_participants: u32) -> Event {
    Event {
        id: id.to_string(),
        title: format!("Lehrgang {}", id),
        description: "Regelkunde und Praxis".to_string(),
        date: NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
        time: NaiveTime::from_hms_opt(18, 30, 0).unwrap(),
        location: "Vereinsheim".to_string(),
        max_participants,
        participants: Vec::new(),
        waitlist: Vec::new(),
    }
}

pub fn fake_registrant() -> Registrant {
    let name: String = Name().fake();
    let email: String = SafeEmail().fake();
    Registrant::new(name, email)
}

pub fn fake_registrants(count: usize) -> Vec<Registrant> {
    (0..count).map(|_| fake_registrant()).collect()
}

pub fn anna_draft() -> FeedbackDraft {
    FeedbackDraft {
        name: "Anna".to_string(),
        email: "a@b.de".to_string(),
        category: "Allgemein".to_string(),
        subject: "X".to_string(),
        message: "Y".to_string(),
        rating: "5".parse::<Rating>().unwrap(),
    }
}
