//! Services module
//!
//! This module contains the domain engines the content store delegates to

pub mod assessment;
pub mod feedback;
pub mod registration;

// Re-export commonly used services
pub use assessment::{check_answer, score, QuizScore};
pub use feedback::{ChannelFeedbackSink, FeedbackIntake, FeedbackSink, LogFeedbackSink};
pub use registration::place_registrant;
