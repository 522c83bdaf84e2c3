//! Pagination and list filtering

use serde::{Deserialize, Serialize};
use chrono::NaiveDate;
use super::catalog::CatalogEntry;
use crate::utils::errors::{YogaBookError, Result};
use crate::utils::helpers::{calculate_offset, total_pages};

/// Offset-style page request; pages are 1-based
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: usize,
    pub page_size: usize,
}

impl Pagination {
    pub fn new(page: usize, page_size: usize) -> Self {
        Self { page, page_size }
    }

    pub fn offset(&self) -> usize {
        calculate_offset(self.page, self.page_size)
    }

    /// Reject empty pages and sizes above the configured maximum
    pub fn validate(&self, max_page_size: usize) -> Result<()> {
        if self.page == 0 {
            return Err(YogaBookError::Validation("Page numbers start at 1".to_string()));
        }
        if self.page_size == 0 {
            return Err(YogaBookError::Validation("Page size must be greater than 0".to_string()));
        }
        if self.page_size > max_page_size {
            return Err(YogaBookError::Validation(
                format!("Page size cannot exceed {}", max_page_size)
            ));
        }
        Ok(())
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page: 1, page_size: 10 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResult<T> {
    pub data: Vec<T>,
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
}

impl<T> PaginatedResult<T> {
    /// Slice an already-filtered list into the requested page
    pub fn from_items(items: Vec<T>, pagination: Pagination) -> Self {
        let total = items.len();
        let data = items
            .into_iter()
            .skip(pagination.offset())
            .take(pagination.page_size)
            .collect();

        Self {
            data,
            total,
            page: pagination.page,
            page_size: pagination.page_size,
            total_pages: total_pages(total, pagination.page_size),
        }
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Catalog list filter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogFilter {
    pub teacher_id: Option<String>,
    /// Inclusive lower bound on the item's relevant date
    pub date_from: Option<NaiveDate>,
}

impl CatalogFilter {
    pub fn for_teacher(teacher_id: impl Into<String>) -> Self {
        Self { teacher_id: Some(teacher_id.into()), date_from: None }
    }

    pub fn from_date(mut self, date_from: NaiveDate) -> Self {
        self.date_from = Some(date_from);
        self
    }

    pub fn matches<T: CatalogEntry>(&self, item: &T) -> bool {
        if let Some(ref teacher_id) = self.teacher_id {
            if item.teacher_id() != teacher_id {
                return false;
            }
        }
        if let Some(date_from) = self.date_from {
            if item.relevant_date() < date_from {
                return false;
            }
        }
        true
    }
}
