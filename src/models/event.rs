//! Event model

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use crate::models::registrant::Registrant;
use crate::utils::helpers::hour_minute;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    #[serde(with = "hour_minute")]
    pub time: NaiveTime,
    pub location: String,
    pub max_participants: u32,
    /// Confirmed registrants in registration order
    #[serde(default)]
    pub participants: Vec<Registrant>,
    /// Overflow registrants in registration order
    #[serde(default)]
    pub waitlist: Vec<Registrant>,
}

impl Event {
    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants as usize
    }

    pub fn spots_remaining(&self) -> usize {
        (self.max_participants as usize).saturating_sub(self.participants.len())
    }
}

/// Where a registrant ended up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    Confirmed,
    Waitlisted,
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Placement::Confirmed => write!(f, "confirmed"),
            Placement::Waitlisted => write!(f, "waitlisted"),
        }
    }
}

/// Result of a registration command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub event: Event,
    pub placement: Placement,
}
