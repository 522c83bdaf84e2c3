//! YogaBook
//!
//! Booking library for a yoga studio with two roles. Students book classes,
//! courses and events and see their upcoming and past bookings; teachers
//! manage their catalog and follow enrolment on a dashboard.

#![allow(non_snake_case)]

pub mod config;
pub mod models;
pub mod database;
pub mod services;
pub mod aggregation;
pub mod presentation;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{YogaBookError, Result};

// Re-export main components for easy access
pub use database::{DatabaseService, MemoryStore};
pub use services::ServiceFactory;
pub use presentation::ViewState;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
