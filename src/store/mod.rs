//! Entity store module
//!
//! This module owns all session content: seed loading, the event repository
//! and the `ContentStore` facade

pub mod events;
pub mod seed;
pub mod service;

// Re-export commonly used store components
pub use events::EventRepository;
pub use seed::SeedData;
pub use service::{ContentStore, StoreSummary};
