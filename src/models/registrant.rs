//! Registrant model

use serde::{Deserialize, Serialize};
use crate::utils::errors::Result;
use crate::utils::validation::{require_email, require_present};

/// A person signing up for an event. Compared by value; never deduplicated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registrant {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub email: String,
}

impl Registrant {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
        }
    }

    /// Format check for sign-up forms. Registration itself does not call this.
    pub fn validate_format(&self) -> Result<()> {
        require_present("name", &self.name)?;
        require_email(&self.email)
    }
}
