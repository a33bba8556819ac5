//! Error handling for SchiriPortal
//!
//! This module defines the main error type used throughout the portal core
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for SchiriPortal operations
#[derive(Error, Debug)]
pub enum PortalError {
    #[error("Event not found: {event_id}")]
    EventNotFound { event_id: String },

    #[error("Question not found: {question_id}")]
    QuestionNotFound { question_id: String },

    #[error("Invalid state transition: {from} -> {to}")]
    InvalidStateTransition { from: String, to: String },

    #[error("Validation rejected: {0}")]
    ValidationRejected(String),

    #[error("Feedback delivery failed: {0}")]
    FeedbackDelivery(String),

    #[error("Invalid seed data: {0}")]
    Seed(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration loading error: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for SchiriPortal operations
pub type Result<T> = std::result::Result<T, PortalError>;

impl PortalError {
    /// Whether the error reports an unknown identifier
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            PortalError::EventNotFound { .. } | PortalError::QuestionNotFound { .. }
        )
    }

    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            PortalError::EventNotFound { .. } => false,
            PortalError::QuestionNotFound { .. } => false,
            PortalError::InvalidStateTransition { .. } => false,
            PortalError::ValidationRejected(_) => false,
            PortalError::FeedbackDelivery(_) => true,
            PortalError::Seed(_) => false,
            PortalError::Config(_) => false,
            PortalError::ConfigLoad(_) => false,
            PortalError::Serialization(_) => false,
            PortalError::TomlParse(_) => false,
            PortalError::Io(_) => true,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            PortalError::Seed(_) => ErrorSeverity::Critical,
            PortalError::Config(_) => ErrorSeverity::Critical,
            PortalError::ConfigLoad(_) => ErrorSeverity::Critical,
            PortalError::InvalidStateTransition { .. } => ErrorSeverity::Warning,
            PortalError::FeedbackDelivery(_) => ErrorSeverity::Warning,
            PortalError::EventNotFound { .. } => ErrorSeverity::Info,
            PortalError::QuestionNotFound { .. } => ErrorSeverity::Info,
            PortalError::ValidationRejected(_) => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
