//! Catalog repository implementation
//!
//! One generic repository serves classes, courses and events.

use chrono::Utc;
use crate::database::store::Collection;
use crate::models::catalog::CatalogEntry;
use crate::models::pagination::{CatalogFilter, Pagination, PaginatedResult};
use crate::utils::errors::YogaBookError;
use crate::utils::helpers::generate_id;
use crate::utils::logging::log_store_operation;

#[derive(Debug, Clone)]
pub struct CatalogRepository<T: CatalogEntry> {
    items: Collection<T>,
}

impl<T: CatalogEntry> CatalogRepository<T> {
    pub fn new(items: Collection<T>) -> Self {
        Self { items }
    }

    fn not_found(id: &str) -> YogaBookError {
        YogaBookError::ItemNotFound { kind: T::KIND, item_id: id.to_string() }
    }

    /// Create a new item owned by `teacher_id`
    pub async fn create(&self, teacher_id: &str, request: T::Create) -> Result<T, YogaBookError> {
        let item = T::from_request(generate_id(), teacher_id.to_string(), request, Utc::now());
        self.insert(item).await
    }

    /// Insert a fully formed item after validating it
    pub async fn insert(&self, item: T) -> Result<T, YogaBookError> {
        item.validate()?;

        let mut items = self.items.write().await;
        if items.iter().any(|existing| existing.id() == item.id()) {
            return Err(YogaBookError::Validation(
                format!("Duplicate {} id {}", T::KIND.label(), item.id())
            ));
        }
        items.push(item.clone());
        log_store_operation("insert", T::KIND.label(), 1);

        Ok(item)
    }

    /// Find item by ID
    pub async fn find_by_id(&self, id: &str) -> Result<Option<T>, YogaBookError> {
        let items = self.items.read().await;
        Ok(items.iter().find(|item| item.id() == id).cloned())
    }

    /// Get item by ID or fail with not found
    pub async fn get_by_id(&self, id: &str) -> Result<T, YogaBookError> {
        self.find_by_id(id).await?.ok_or_else(|| Self::not_found(id))
    }

    /// Update item; the patched item is validated before it replaces the stored one
    pub async fn update(&self, id: &str, update: T::Update) -> Result<T, YogaBookError> {
        let mut items = self.items.write().await;
        let slot = items
            .iter_mut()
            .find(|item| item.id() == id)
            .ok_or_else(|| Self::not_found(id))?;

        let mut patched = slot.clone();
        patched.apply_update(update, Utc::now());
        patched.validate()?;

        if patched.capacity() < patched.booked() {
            return Err(YogaBookError::Validation(format!(
                "Capacity cannot drop below the {} places already booked",
                patched.booked()
            )));
        }

        *slot = patched.clone();
        log_store_operation("update", T::KIND.label(), 1);
        Ok(patched)
    }

    /// Delete item
    pub async fn delete(&self, id: &str) -> Result<(), YogaBookError> {
        let mut items = self.items.write().await;
        let before = items.len();
        items.retain(|item| item.id() != id);

        if items.len() == before {
            return Err(Self::not_found(id));
        }
        log_store_operation("delete", T::KIND.label(), 1);
        Ok(())
    }

    /// List items matching the filter with pagination, in insertion order
    pub async fn list(&self, filter: &CatalogFilter, pagination: Pagination) -> Result<PaginatedResult<T>, YogaBookError> {
        let matching = self.list_all(filter).await?;
        Ok(PaginatedResult::from_items(matching, pagination))
    }

    /// List every item matching the filter
    pub async fn list_all(&self, filter: &CatalogFilter) -> Result<Vec<T>, YogaBookError> {
        let items = self.items.read().await;
        Ok(items.iter().filter(|item| filter.matches(*item)).cloned().collect())
    }

    /// Take one place if the item is not full
    pub async fn reserve_place(&self, id: &str) -> Result<T, YogaBookError> {
        let mut items = self.items.write().await;
        let item = items
            .iter_mut()
            .find(|item| item.id() == id)
            .ok_or_else(|| Self::not_found(id))?;

        if item.is_full() {
            return Err(YogaBookError::CapacityExceeded { kind: T::KIND, item_id: id.to_string() });
        }

        let booked = item.booked() + 1;
        item.set_booked(booked);
        Ok(item.clone())
    }

    /// Give one place back; the counter never goes below zero
    pub async fn release_place(&self, id: &str) -> Result<T, YogaBookError> {
        let mut items = self.items.write().await;
        let item = items
            .iter_mut()
            .find(|item| item.id() == id)
            .ok_or_else(|| Self::not_found(id))?;

        let booked = item.booked().saturating_sub(1);
        item.set_booked(booked);
        Ok(item.clone())
    }

    /// Count total items
    pub async fn count(&self) -> Result<usize, YogaBookError> {
        Ok(self.items.read().await.len())
    }
}
