//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the YogaBook application.

use tracing::{info, warn, debug};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};
use crate::config::LoggingConfig;
use crate::models::{BookingStatus, ItemKind, Role};
use crate::utils::errors::{YogaBookError, Result};

/// Initialize logging based on configuration.
///
/// The returned guard flushes the file writer when dropped and must be kept
/// alive for the lifetime of the process.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_new(&config.level)
        .map_err(|e| YogaBookError::Config(format!("Invalid log filter: {}", e)))?;

    let stdout_layer = if config.json {
        tracing_subscriber::fmt::layer().json().with_writer(std::io::stdout).boxed()
    } else {
        tracing_subscriber::fmt::layer().with_writer(std::io::stdout).boxed()
    };

    let (file_layer, guard) = match config.directory {
        Some(ref directory) => {
            let file_appender = tracing_appender::rolling::daily(directory, &config.file_prefix);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking)
                .boxed();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| YogaBookError::Config(format!("Logging already initialized: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log user actions with structured data
pub fn log_user_action(user_id: &str, role: Role, action: &str, details: Option<&str>) {
    info!(
        user_id = user_id,
        role = %role,
        action = action,
        details = details,
        "User action performed"
    );
}

/// Log catalog management actions
pub fn log_catalog_action(kind: ItemKind, item_id: &str, action: &str, teacher_id: &str) {
    info!(
        kind = %kind,
        item_id = item_id,
        action = action,
        teacher_id = teacher_id,
        "Catalog action performed"
    );
}

/// Log booking lifecycle changes
pub fn log_booking_action(booking_id: &str, student_id: &str, status: BookingStatus, action: &str) {
    info!(
        booking_id = booking_id,
        student_id = student_id,
        status = %status,
        action = action,
        "Booking action performed"
    );
}

/// Log rejected operations
pub fn log_rejected(operation: &str, user_id: Option<&str>, reason: &str) {
    warn!(
        operation = operation,
        user_id = user_id,
        reason = reason,
        "Operation rejected"
    );
}

/// Log store operations
pub fn log_store_operation(operation: &str, collection: &str, affected: usize) {
    debug!(
        operation = operation,
        collection = collection,
        affected = affected,
        "Store operation completed"
    );
}
