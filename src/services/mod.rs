//! Services module
//!
//! This module contains business logic services

pub mod auth;
pub mod booking;
pub mod catalog;
pub mod credentials;
pub mod dashboard;
pub mod session;

// Re-export commonly used services
pub use auth::{AuthService, RegisterRequest};
pub use booking::BookingService;
pub use catalog::CatalogService;
pub use dashboard::DashboardService;
pub use session::{SessionStore, MemorySessionStore};

use std::sync::Arc;
use crate::config::settings::Settings;
use crate::database::{DatabaseService, MemoryStore, StoreStats};
use crate::models::{Class, Course, Event};

/// Service factory for creating and managing all services
#[derive(Clone)]
pub struct ServiceFactory {
    pub auth_service: AuthService,
    pub class_service: CatalogService<Class>,
    pub course_service: CatalogService<Course>,
    pub event_service: CatalogService<Event>,
    pub booking_service: BookingService,
    pub dashboard_service: DashboardService,
    pub database: DatabaseService,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services sharing one store
    pub fn new(settings: &Settings, store: MemoryStore, sessions: Arc<dyn SessionStore>) -> Self {
        let database = DatabaseService::new(store);

        Self {
            auth_service: AuthService::new(database.users.clone(), sessions, settings.auth.clone()),
            class_service: CatalogService::new(database.classes.clone(), settings.catalog.clone()),
            course_service: CatalogService::new(database.courses.clone(), settings.catalog.clone()),
            event_service: CatalogService::new(database.events.clone(), settings.catalog.clone()),
            booking_service: BookingService::new(database.clone(), settings.booking.clone()),
            dashboard_service: DashboardService::new(database.clone(), settings.dashboard.clone()),
            database,
        }
    }

    /// Health check for all services
    pub async fn health_check(&self) -> ServiceHealthStatus {
        ServiceHealthStatus {
            signed_in: self.auth_service.current_user().is_some(),
            store: self.database.get_system_stats().await,
        }
    }
}

/// Health status for all services
#[derive(Debug, Clone)]
pub struct ServiceHealthStatus {
    pub signed_in: bool,
    pub store: StoreStats,
}

impl ServiceHealthStatus {
    /// A usable instance has at least one account to sign in with
    pub fn is_healthy(&self) -> bool {
        self.store.users > 0
    }

    /// Get list of problems worth reporting at startup
    pub fn get_issues(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if self.store.users == 0 {
            issues.push("No user accounts loaded".to_string());
        }
        if self.store.classes + self.store.courses + self.store.events == 0 {
            issues.push("Catalog is empty".to_string());
        }
        if !self.signed_in {
            issues.push("Nobody is signed in".to_string());
        }

        issues
    }
}
