//! In-memory data store
//!
//! Each collection lives behind its own async read-write lock. Writes to
//! different collections are independent; there is no cross-collection
//! transaction.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use crate::models::{Booking, Class, Course, Event, Payment, User};

pub type Collection<T> = Arc<RwLock<Vec<T>>>;

/// Password hashes keyed by user id
pub type CredentialTable = Arc<RwLock<HashMap<String, String>>>;

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub users: Collection<User>,
    pub credentials: CredentialTable,
    pub classes: Collection<Class>,
    pub courses: Collection<Course>,
    pub events: Collection<Event>,
    pub bookings: Collection<Booking>,
    pub payments: Collection<Payment>,
}

/// Record counts per collection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreStats {
    pub users: usize,
    pub classes: usize,
    pub courses: usize,
    pub events: usize,
    pub bookings: usize,
    pub payments: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count records in every collection
    pub async fn stats(&self) -> StoreStats {
        StoreStats {
            users: self.users.read().await.len(),
            classes: self.classes.read().await.len(),
            courses: self.courses.read().await.len(),
            events: self.events.read().await.len(),
            bookings: self.bookings.read().await.len(),
            payments: self.payments.read().await.len(),
        }
    }

    /// Drop every record
    pub async fn clear(&self) {
        self.users.write().await.clear();
        self.credentials.write().await.clear();
        self.classes.write().await.clear();
        self.courses.write().await.clear();
        self.events.write().await.clear();
        self.bookings.write().await.clear();
        self.payments.write().await.clear();
        tracing::info!("Memory store cleared");
    }
}
