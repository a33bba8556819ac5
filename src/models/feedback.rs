//! Feedback model

use std::str::FromStr;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::utils::errors::{PortalError, Result};
use crate::utils::validation::{require_email, require_present};

/// Categories offered on the feedback form
pub const FEEDBACK_CATEGORIES: [&str; 6] = [
    "Allgemein",
    "Plattform/Website",
    "Lernmaterialien",
    "Veranstaltungen",
    "Regelwerk",
    "Vorschläge",
];

/// Star rating, serialized as the strings "1" through "5"
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rating {
    #[serde(rename = "1")]
    One,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "5")]
    #[default]
    Five,
}

impl Rating {
    pub fn value(self) -> u8 {
        match self {
            Rating::One => 1,
            Rating::Two => 2,
            Rating::Three => 3,
            Rating::Four => 4,
            Rating::Five => 5,
        }
    }
}

impl TryFrom<u8> for Rating {
    type Error = PortalError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            1 => Ok(Rating::One),
            2 => Ok(Rating::Two),
            3 => Ok(Rating::Three),
            4 => Ok(Rating::Four),
            5 => Ok(Rating::Five),
            other => Err(PortalError::ValidationRejected(format!("Rating out of range: {}", other))),
        }
    }
}

impl FromStr for Rating {
    type Err = PortalError;

    fn from_str(s: &str) -> Result<Self> {
        let value: u8 = s
            .trim()
            .parse()
            .map_err(|_| PortalError::ValidationRejected(format!("Invalid rating: {}", s)))?;
        Rating::try_from(value)
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Feedback as entered, before intake stamps it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackDraft {
    pub name: String,
    pub email: String,
    pub category: String,
    pub subject: String,
    pub message: String,
    pub rating: Rating,
}

impl FeedbackDraft {
    /// Form-level checks for presentation; intake accepts drafts without calling this.
    pub fn validate_format(&self) -> Result<()> {
        require_present("name", &self.name)?;
        require_email(&self.email)?;
        require_present("subject", &self.subject)?;
        require_present("message", &self.message)
    }
}

/// Accepted feedback, immutable once created
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRecord {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub category: String,
    pub subject: String,
    pub message: String,
    pub rating: Rating,
    pub submitted_at: DateTime<Utc>,
}

impl FeedbackRecord {
    pub(crate) fn stamp(draft: FeedbackDraft, id: Uuid, submitted_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name,
            email: draft.email,
            category: draft.category,
            subject: draft.subject,
            message: draft.message,
            rating: draft.rating,
            submitted_at,
        }
    }
}
