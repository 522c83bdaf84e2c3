//! Database service layer
//!
//! This module provides a high-level interface to the repositories

use crate::database::{MemoryStore, StoreStats, UserRepository, CatalogRepository, BookingRepository, PaymentRepository};
use crate::models::*;
use crate::utils::errors::YogaBookError;

#[derive(Debug, Clone)]
pub struct DatabaseService {
    pub users: UserRepository,
    pub classes: CatalogRepository<Class>,
    pub courses: CatalogRepository<Course>,
    pub events: CatalogRepository<Event>,
    pub bookings: BookingRepository,
    pub payments: PaymentRepository,
    store: MemoryStore,
}

impl DatabaseService {
    pub fn new(store: MemoryStore) -> Self {
        Self {
            users: UserRepository::new(store.users.clone(), store.credentials.clone()),
            classes: CatalogRepository::new(store.classes.clone()),
            courses: CatalogRepository::new(store.courses.clone()),
            events: CatalogRepository::new(store.events.clone()),
            bookings: BookingRepository::new(store.bookings.clone()),
            payments: PaymentRepository::new(store.payments.clone()),
            store,
        }
    }

    /// Resolve any catalog item by kind and id
    pub async fn find_item(&self, kind: ItemKind, item_id: &str) -> Result<Option<CatalogItem>, YogaBookError> {
        let item = match kind {
            ItemKind::Class => self.classes.find_by_id(item_id).await?.map(CatalogEntry::into_item),
            ItemKind::Course => self.courses.find_by_id(item_id).await?.map(CatalogEntry::into_item),
            ItemKind::Event => self.events.find_by_id(item_id).await?.map(CatalogEntry::into_item),
        };
        Ok(item)
    }

    /// Resolve a catalog item or fail with not found
    pub async fn get_item(&self, kind: ItemKind, item_id: &str) -> Result<CatalogItem, YogaBookError> {
        self.find_item(kind, item_id).await?
            .ok_or_else(|| YogaBookError::ItemNotFound { kind, item_id: item_id.to_string() })
    }

    /// Take one place on an item of any kind
    pub async fn reserve_place(&self, kind: ItemKind, item_id: &str) -> Result<CatalogItem, YogaBookError> {
        let item = match kind {
            ItemKind::Class => self.classes.reserve_place(item_id).await?.into_item(),
            ItemKind::Course => self.courses.reserve_place(item_id).await?.into_item(),
            ItemKind::Event => self.events.reserve_place(item_id).await?.into_item(),
        };
        Ok(item)
    }

    /// Give back one place on an item of any kind
    pub async fn release_place(&self, kind: ItemKind, item_id: &str) -> Result<CatalogItem, YogaBookError> {
        let item = match kind {
            ItemKind::Class => self.classes.release_place(item_id).await?.into_item(),
            ItemKind::Course => self.courses.release_place(item_id).await?.into_item(),
            ItemKind::Event => self.events.release_place(item_id).await?.into_item(),
        };
        Ok(item)
    }

    /// Get system statistics
    pub async fn get_system_stats(&self) -> StoreStats {
        self.store.stats().await
    }
}
