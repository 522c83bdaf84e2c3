//! Database module
//!
//! This module holds the in-memory store, its repositories and demo seeding

pub mod store;
pub mod repositories;
pub mod service;
pub mod seed;

// Re-export commonly used database components
pub use store::{MemoryStore, StoreStats};
pub use repositories::{UserRepository, CatalogRepository, BookingRepository, PaymentRepository};
pub use service::DatabaseService;
