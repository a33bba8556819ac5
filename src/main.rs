//! SchiriPortal
//!
//! Loads configuration and seed content, builds the content store and logs an
//! overview of what the session will serve.

use std::sync::Arc;
use chrono::Local;
use tracing::{info, warn};

use SchiriPortal::{
    config::Settings,
    store::{ContentStore, SeedData},
    services::LogFeedbackSink,
    utils::logging,
};

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", SchiriPortal::info());

    let seed = match &settings.seed.path {
        Some(path) => {
            info!(path = %path, "Loading seed content from file");
            SeedData::from_path(path)?
        }
        None => {
            info!("No seed file configured, using built-in sample content");
            SeedData::builtin()
        }
    };

    let store = Arc::new(ContentStore::new(seed, Arc::new(LogFeedbackSink))?);

    let summary = store.summary();
    info!(
        questions = summary.questions,
        flashcards = summary.flashcards,
        faqs = summary.faqs,
        downloads = summary.downloads,
        rule_updates = summary.rule_updates,
        events = summary.events,
        "Content store ready"
    );

    let today = Local::now().date_naive();
    let upcoming = store.upcoming_events(today);
    if upcoming.is_empty() {
        warn!("No upcoming events");
    }
    for event in upcoming {
        info!(
            event_id = %event.id,
            title = %event.title,
            date = %event.date,
            time = %event.time.format("%H:%M"),
            spots_remaining = event.spots_remaining(),
            waitlist = event.waitlist.len(),
            "Upcoming event"
        );
    }

    Ok(())
}
