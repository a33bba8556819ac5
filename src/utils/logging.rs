//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the SchiriPortal core.

use tracing::{debug, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use crate::config::LoggingConfig;
use crate::models::{FeedbackRecord, Placement};
use crate::utils::errors::{PortalError, Result};

/// Initialize logging based on configuration
///
/// The returned guard flushes the file writer when dropped; keep it alive for
/// the lifetime of the process.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let (file_writer, guard) = match &config.directory {
        Some(directory) => {
            let file_appender = tracing_appender::rolling::daily(directory, "schiriportal.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            (Some(non_blocking), Some(guard))
        }
        None => (None, None),
    };

    let stdout_json = config
        .json
        .then(|| tracing_subscriber::fmt::layer().json().with_writer(std::io::stdout));
    let stdout_plain = (!config.json)
        .then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stdout));
    let file_layer = file_writer.map(|writer| {
        tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(writer)
    });

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(stdout_json)
        .with(stdout_plain)
        .with(file_layer)
        .try_init()
        .map_err(|e| PortalError::Config(format!("Failed to install log subscriber: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log the outcome of an event registration
pub fn log_registration(event_id: &str, placement: Placement, participants: usize, waitlist: usize) {
    match placement {
        Placement::Confirmed => info!(
            event_id = event_id,
            participants = participants,
            "Registrant confirmed"
        ),
        Placement::Waitlisted => warn!(
            event_id = event_id,
            participants = participants,
            waitlist = waitlist,
            "Event full, registrant waitlisted"
        ),
    }
}

/// Log an accepted feedback record
pub fn log_feedback_received(record: &FeedbackRecord) {
    info!(
        feedback_id = %record.id,
        category = %record.category,
        rating = %record.rating,
        submitted_at = %record.submitted_at,
        "Feedback received"
    );
}

/// Log the final result of a quiz session
pub fn log_quiz_completed(correct: u32, total: u32, percentage: u32) {
    debug!(
        correct = correct,
        total = total,
        percentage = percentage,
        "Quiz completed"
    );
}
