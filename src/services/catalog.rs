//! Catalog service implementation
//!
//! Wraps a [`CatalogRepository`] with paging defaults and teacher ownership
//! checks. Reads are open to everyone; writes require the owning teacher.

use tracing::debug;
use crate::config::CatalogConfig;
use crate::database::repositories::CatalogRepository;
use crate::models::catalog::CatalogEntry;
use crate::models::pagination::{CatalogFilter, Pagination, PaginatedResult};
use crate::models::user::User;
use crate::utils::errors::{YogaBookError, Result};
use crate::utils::logging::{log_catalog_action, log_rejected};

#[derive(Debug, Clone)]
pub struct CatalogService<T: CatalogEntry> {
    repository: CatalogRepository<T>,
    config: CatalogConfig,
}

impl<T: CatalogEntry> CatalogService<T> {
    pub fn new(repository: CatalogRepository<T>, config: CatalogConfig) -> Self {
        Self { repository, config }
    }

    /// List items; the configured default page size applies when no page is given
    pub async fn list(&self, filter: &CatalogFilter, pagination: Option<Pagination>) -> Result<PaginatedResult<T>> {
        let pagination = pagination.unwrap_or(Pagination::new(1, self.config.default_page_size));
        pagination.validate(self.config.max_page_size)?;

        debug!(kind = %T::KIND, filter = ?filter, page = pagination.page, "Listing catalog items");
        self.repository.list(filter, pagination).await
    }

    /// Get item by ID
    pub async fn get_by_id(&self, id: &str) -> Result<T> {
        self.repository.get_by_id(id).await
    }

    /// Create an item owned by the acting teacher
    pub async fn create(&self, actor: &User, request: T::Create) -> Result<T> {
        ensure_teacher::<T>(actor, "create")?;

        let item = self.repository.create(&actor.id, request).await?;
        log_catalog_action(T::KIND, item.id(), "create", &actor.id);
        Ok(item)
    }

    /// Update one of the acting teacher's items
    pub async fn update(&self, actor: &User, id: &str, update: T::Update) -> Result<T> {
        self.ensure_owner(actor, id, "update").await?;

        let item = self.repository.update(id, update).await?;
        log_catalog_action(T::KIND, id, "update", &actor.id);
        Ok(item)
    }

    /// Delete one of the acting teacher's items
    pub async fn delete(&self, actor: &User, id: &str) -> Result<()> {
        self.ensure_owner(actor, id, "delete").await?;

        self.repository.delete(id).await?;
        log_catalog_action(T::KIND, id, "delete", &actor.id);
        Ok(())
    }

    async fn ensure_owner(&self, actor: &User, id: &str, operation: &str) -> Result<()> {
        ensure_teacher::<T>(actor, operation)?;

        let item = self.repository.get_by_id(id).await?;
        if item.teacher_id() != actor.id {
            log_rejected(operation, Some(&actor.id), "not the owning teacher");
            return Err(YogaBookError::PermissionDenied(
                format!("{} {} belongs to another teacher", T::KIND, id)
            ));
        }
        Ok(())
    }
}

fn ensure_teacher<T: CatalogEntry>(actor: &User, operation: &str) -> Result<()> {
    if !actor.is_teacher() {
        log_rejected(operation, Some(&actor.id), "not a teacher");
        return Err(YogaBookError::PermissionDenied(
            format!("Only teachers can {} a {}", operation, T::KIND.label())
        ));
    }
    Ok(())
}
