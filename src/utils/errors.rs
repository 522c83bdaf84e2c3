//! Error handling for YogaBook
//!
//! This module defines the main error type used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;
use crate::models::{BookingStatus, ItemKind};

/// Main error type for YogaBook application
#[derive(Error, Debug)]
pub enum YogaBookError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("User not found: {user_id}")]
    UserNotFound { user_id: String },

    #[error("{kind} not found: {item_id}")]
    ItemNotFound { kind: ItemKind, item_id: String },

    #[error("Booking not found: {booking_id}")]
    BookingNotFound { booking_id: String },

    #[error("Payment not found: {payment_id}")]
    PaymentNotFound { payment_id: String },

    #[error("Invalid status transition: {from} -> {to}")]
    InvalidStateTransition { from: BookingStatus, to: BookingStatus },

    #[error("{kind} {item_id} is fully booked")]
    CapacityExceeded { kind: ItemKind, item_id: String },

    #[error("Student {student_id} already holds an active booking for {item_id}")]
    DuplicateBooking { student_id: String, item_id: String },

    #[error("Failed to load {0}")]
    LoadFailed(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Seed file error: {0}")]
    SeedParse(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for YogaBook operations
pub type Result<T> = std::result::Result<T, YogaBookError>;

impl From<config::ConfigError> for YogaBookError {
    fn from(err: config::ConfigError) -> Self {
        YogaBookError::Config(err.to_string())
    }
}

impl YogaBookError {
    /// Check if the error is recoverable by a user-initiated reload or corrected input
    pub fn is_recoverable(&self) -> bool {
        match self {
            YogaBookError::Config(_) => false,
            YogaBookError::PermissionDenied(_) => false,
            YogaBookError::UserNotFound { .. } => false,
            YogaBookError::ItemNotFound { .. } => false,
            YogaBookError::BookingNotFound { .. } => false,
            YogaBookError::PaymentNotFound { .. } => false,
            YogaBookError::InvalidStateTransition { .. } => false,
            YogaBookError::CapacityExceeded { .. } => false,
            YogaBookError::DuplicateBooking { .. } => false,
            YogaBookError::LoadFailed(_) => true,
            YogaBookError::Validation(_) => true,
            YogaBookError::Authentication(_) => true,
            YogaBookError::Serialization(_) => false,
            YogaBookError::SeedParse(_) => false,
            YogaBookError::Io(_) => true,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            YogaBookError::Config(_) => ErrorSeverity::Critical,
            YogaBookError::SeedParse(_) => ErrorSeverity::Critical,
            YogaBookError::PermissionDenied(_) => ErrorSeverity::Warning,
            YogaBookError::Authentication(_) => ErrorSeverity::Warning,
            YogaBookError::CapacityExceeded { .. } => ErrorSeverity::Info,
            YogaBookError::DuplicateBooking { .. } => ErrorSeverity::Info,
            YogaBookError::Validation(_) => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }

    /// Short message suitable for rendering inline next to the failed view
    pub fn user_message(&self) -> String {
        match self {
            YogaBookError::UserNotFound { .. }
            | YogaBookError::ItemNotFound { .. }
            | YogaBookError::BookingNotFound { .. }
            | YogaBookError::PaymentNotFound { .. } => "The requested record could not be found.".to_string(),
            YogaBookError::LoadFailed(what) => format!("Could not load {}. Please reload.", what),
            YogaBookError::Validation(reason) => reason.clone(),
            YogaBookError::Authentication(reason) => reason.clone(),
            YogaBookError::PermissionDenied(_) => "You are not allowed to do that.".to_string(),
            YogaBookError::CapacityExceeded { kind, .. } => format!("This {} is fully booked.", kind.label()),
            YogaBookError::DuplicateBooking { .. } => "You have already booked this.".to_string(),
            YogaBookError::InvalidStateTransition { from, .. } => format!("A {} booking cannot be changed that way.", from),
            _ => "Something went wrong. Please try again later.".to_string(),
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
