//! Opt-in format checks for presentation collaborators
//!
//! The core never calls these on its own command paths; registration and
//! feedback intake accept whatever they are given.

use std::sync::OnceLock;
use regex::Regex;
use crate::utils::errors::{PortalError, Result};

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"))
}

/// Validate email format
pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_match(email)
}

/// Reject blank required fields
pub fn require_present(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PortalError::ValidationRejected(format!("{} is required", field)));
    }
    Ok(())
}

/// Reject malformed email addresses
pub fn require_email(value: &str) -> Result<()> {
    require_present("email", value)?;
    if !is_valid_email(value) {
        return Err(PortalError::ValidationRejected(format!("Invalid email address: {}", value)));
    }
    Ok(())
}
