//! Session state module
//!
//! This module holds the quiz session state machine driven by presentation code.

pub mod quiz;

pub use quiz::{QuizSession, QuizState, RecordedAnswer};
