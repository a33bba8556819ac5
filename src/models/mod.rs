//! Data models module
//!
//! This module contains all data structures used throughout the portal core

pub mod question;
pub mod content;
pub mod event;
pub mod registrant;
pub mod feedback;

// Re-export commonly used models
pub use question::Question;
pub use content::{FlashCard, Faq, Download, RuleUpdate};
pub use event::{Event, Placement, Registration};
pub use registrant::Registrant;
pub use feedback::{FeedbackDraft, FeedbackRecord, Rating, FEEDBACK_CATEGORIES};
