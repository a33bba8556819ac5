//! SchiriPortal core
//!
//! The domain layer of a referee association's content and self-study portal.
//! It owns the session's content (questions, flashcards, FAQs, downloads, rule
//! updates and events) and the commands that act on it: capacity-limited event
//! registration, quiz answer checking and scoring, and feedback intake.

#![allow(non_snake_case)]

pub mod config;
pub mod services;
pub mod models;
pub mod store;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use crate::config::Settings;
pub use crate::utils::errors::{PortalError, Result};

// Re-export main components for easy access
pub use store::{ContentStore, SeedData};
pub use services::{FeedbackSink, LogFeedbackSink, ChannelFeedbackSink, QuizScore};
pub use state::{QuizSession, QuizState};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
