//! Booking repository implementation

use std::collections::HashSet;
use chrono::{DateTime, Utc};
use crate::database::store::Collection;
use crate::models::booking::{Booking, BookingStatus, CreateBookingRequest};
use crate::models::pagination::{Pagination, PaginatedResult};
use crate::utils::errors::YogaBookError;
use crate::utils::helpers::generate_id;

#[derive(Debug, Clone)]
pub struct BookingRepository {
    bookings: Collection<Booking>,
}

impl BookingRepository {
    pub fn new(bookings: Collection<Booking>) -> Self {
        Self { bookings }
    }

    /// Create a new booking
    pub async fn create(&self, request: CreateBookingRequest, booking_date: DateTime<Utc>) -> Result<Booking, YogaBookError> {
        let booking = Booking {
            id: generate_id(),
            student_id: request.student_id,
            item_id: request.item_id,
            item_type: request.item_type,
            status: request.status.unwrap_or(BookingStatus::Pending),
            booking_date,
            payment_id: request.payment_id,
            notes: request.notes,
        };

        self.insert(booking).await
    }

    /// Insert a fully formed booking record
    pub async fn insert(&self, booking: Booking) -> Result<Booking, YogaBookError> {
        let mut bookings = self.bookings.write().await;
        if bookings.iter().any(|b| b.id == booking.id) {
            return Err(YogaBookError::Validation(format!("Duplicate booking id {}", booking.id)));
        }
        bookings.push(booking.clone());
        Ok(booking)
    }

    /// Find booking by ID
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Booking>, YogaBookError> {
        let bookings = self.bookings.read().await;
        Ok(bookings.iter().find(|b| b.id == id).cloned())
    }

    /// Get booking by ID or fail with not found
    pub async fn get_by_id(&self, id: &str) -> Result<Booking, YogaBookError> {
        self.find_by_id(id).await?
            .ok_or_else(|| YogaBookError::BookingNotFound { booking_id: id.to_string() })
    }

    /// Get bookings made by a student
    pub async fn list_for_student(&self, student_id: &str) -> Result<Vec<Booking>, YogaBookError> {
        let bookings = self.bookings.read().await;
        Ok(bookings.iter().filter(|b| b.student_id == student_id).cloned().collect())
    }

    /// List all bookings with pagination
    pub async fn list_all(&self, pagination: Pagination) -> Result<PaginatedResult<Booking>, YogaBookError> {
        let bookings = self.all().await?;
        Ok(PaginatedResult::from_items(bookings, pagination))
    }

    /// Every booking in insertion order
    pub async fn all(&self) -> Result<Vec<Booking>, YogaBookError> {
        Ok(self.bookings.read().await.clone())
    }

    /// Get bookings whose item id is in the given set
    pub async fn list_for_items(&self, item_ids: &HashSet<String>) -> Result<Vec<Booking>, YogaBookError> {
        let bookings = self.bookings.read().await;
        Ok(bookings.iter().filter(|b| item_ids.contains(&b.item_id)).cloned().collect())
    }

    /// Find a pending or confirmed booking of a student for an item
    pub async fn find_active(&self, student_id: &str, item_id: &str) -> Result<Option<Booking>, YogaBookError> {
        let bookings = self.bookings.read().await;
        Ok(bookings
            .iter()
            .find(|b| b.student_id == student_id && b.item_id == item_id && b.status.is_active())
            .cloned())
    }

    /// Update booking status
    pub async fn update_status(&self, id: &str, status: BookingStatus) -> Result<Booking, YogaBookError> {
        let mut bookings = self.bookings.write().await;
        let booking = bookings
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| YogaBookError::BookingNotFound { booking_id: id.to_string() })?;

        booking.status = status;
        Ok(booking.clone())
    }

    /// Count total bookings
    pub async fn count(&self) -> Result<usize, YogaBookError> {
        Ok(self.bookings.read().await.len())
    }
}
