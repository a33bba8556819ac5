//! Feedback intake
//!
//! Stamps drafts with an id and a timestamp and hands the resulting record to
//! a sink. The intake keeps no history; what the sink does with a record
//! (log it, queue it, send it somewhere) is up to the sink.

use std::sync::Arc;
use chrono::Utc;
use tokio::sync::mpsc;
use tracing::debug;
use crate::models::{FeedbackDraft, FeedbackRecord};
use crate::utils::errors::{PortalError, Result};
use crate::utils::helpers::generate_uuid;
use crate::utils::logging::log_feedback_received;

/// Receives every accepted feedback record exactly once
pub trait FeedbackSink: Send + Sync {
    fn deliver(&self, record: &FeedbackRecord) -> Result<()>;
}

/// Writes records to the log
#[derive(Debug, Clone, Copy, Default)]
pub struct LogFeedbackSink;

impl FeedbackSink for LogFeedbackSink {
    fn deliver(&self, record: &FeedbackRecord) -> Result<()> {
        log_feedback_received(record);
        Ok(())
    }
}

/// Hands records to an async consumer over an unbounded channel
#[derive(Debug, Clone)]
pub struct ChannelFeedbackSink {
    sender: mpsc::UnboundedSender<FeedbackRecord>,
}

impl ChannelFeedbackSink {
    /// Create a sink together with the receiving half
    pub fn new() -> (Self, mpsc::UnboundedReceiver<FeedbackRecord>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl FeedbackSink for ChannelFeedbackSink {
    fn deliver(&self, record: &FeedbackRecord) -> Result<()> {
        self.sender
            .send(record.clone())
            .map_err(|_| PortalError::FeedbackDelivery("feedback receiver has been dropped".to_string()))
    }
}

/// Feedback intake service
#[derive(Clone)]
pub struct FeedbackIntake {
    sink: Arc<dyn FeedbackSink>,
}

impl FeedbackIntake {
    pub fn new(sink: Arc<dyn FeedbackSink>) -> Self {
        Self { sink }
    }

    /// Accept a draft: assign id and timestamp, forward to the sink once.
    pub fn submit(&self, draft: FeedbackDraft) -> Result<FeedbackRecord> {
        let record = FeedbackRecord::stamp(draft, generate_uuid(), Utc::now());
        debug!(feedback_id = %record.id, "Forwarding feedback to sink");

        self.sink.deliver(&record)?;
        Ok(record)
    }
}

impl std::fmt::Debug for FeedbackIntake {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedbackIntake").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Rating;
    use assert_matches::assert_matches;

    fn draft() -> FeedbackDraft {
        FeedbackDraft {
            name: "Anna".to_string(),
            email: "a@b.de".to_string(),
            category: "Allgemein".to_string(),
            subject: "X".to_string(),
            message: "Y".to_string(),
            rating: Rating::Five,
        }
    }

    #[test]
    fn test_log_sink_accepts() {
        let intake = FeedbackIntake::new(Arc::new(LogFeedbackSink));
        let record = intake.submit(draft()).expect("log sink never fails");
        assert_eq!(record.name, "Anna");
        assert_eq!(record.rating, Rating::Five);
    }

    #[test]
    fn test_each_submission_gets_its_own_id() {
        let intake = FeedbackIntake::new(Arc::new(LogFeedbackSink));
        let first = intake.submit(draft()).unwrap();
        let second = intake.submit(draft()).unwrap();
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_dropped_receiver_is_a_delivery_error() {
        let (sink, receiver) = ChannelFeedbackSink::new();
        drop(receiver);

        let intake = FeedbackIntake::new(Arc::new(sink));
        assert_matches!(intake.submit(draft()), Err(PortalError::FeedbackDelivery(_)));
    }
}
