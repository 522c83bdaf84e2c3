//! Database repositories module
//!
//! This module contains all repository implementations for data access

pub mod user;
pub mod catalog;
pub mod booking;
pub mod payment;

// Re-export repositories
pub use user::UserRepository;
pub use catalog::CatalogRepository;
pub use booking::BookingRepository;
pub use payment::PaymentRepository;
