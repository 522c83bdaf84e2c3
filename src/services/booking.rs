//! Booking service implementation
//!
//! Students book and cancel places on classes, courses and events. The
//! owning teacher confirms, completes or cancels bookings on their items.
//! Seat counters on the catalog item follow the active bookings.

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, warn};
use crate::config::BookingConfig;
use crate::database::DatabaseService;
use crate::models::booking::{Booking, BookingStatus, CreateBookingRequest};
use crate::models::catalog::ItemKind;
use crate::models::pagination::{Pagination, PaginatedResult};
use crate::models::payment::{CreatePaymentRequest, Payment, PaymentStatus};
use crate::models::user::User;
use crate::utils::errors::{YogaBookError, Result};
use crate::utils::logging::{log_booking_action, log_rejected};

#[derive(Debug, Clone)]
pub struct BookingService {
    db: DatabaseService,
    config: BookingConfig,
}

impl BookingService {
    pub fn new(db: DatabaseService, config: BookingConfig) -> Self {
        Self { db, config }
    }

    /// Book a place on an item for the acting student
    pub async fn book(
        &self,
        actor: &User,
        kind: ItemKind,
        item_id: &str,
        notes: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<Booking> {
        if !actor.is_student() {
            log_rejected("book", Some(&actor.id), "not a student");
            return Err(YogaBookError::PermissionDenied("Only students can book".to_string()));
        }

        if self.db.bookings.find_active(&actor.id, item_id).await?.is_some() {
            log_rejected("book", Some(&actor.id), "duplicate booking");
            return Err(YogaBookError::DuplicateBooking {
                student_id: actor.id.clone(),
                item_id: item_id.to_string(),
            });
        }

        let item = self.db.reserve_place(kind, item_id).await?;
        debug!(kind = %kind, item_id = item_id, booked = item.booked(), "Place reserved");

        let payment = if self.config.create_pending_payment && item.price() > 0.0 {
            let created = self.db.payments.create(CreatePaymentRequest {
                student_id: actor.id.clone(),
                amount: item.price(),
                status: PaymentStatus::Pending,
                due_date: Some(now.date_naive() + Duration::days(self.config.payment_due_days)),
                method: None,
            }).await;

            match created {
                Ok(payment) => Some(payment),
                Err(e) => {
                    self.db.release_place(kind, item_id).await?;
                    return Err(e);
                }
            }
        } else {
            None
        };

        let status = if self.config.auto_confirm {
            BookingStatus::Confirmed
        } else {
            BookingStatus::Pending
        };

        let request = CreateBookingRequest {
            student_id: actor.id.clone(),
            item_id: item_id.to_string(),
            item_type: kind,
            status: Some(status),
            payment_id: payment.map(|p| p.id),
            notes,
        };

        let booking = match self.db.bookings.create(request, now).await {
            Ok(booking) => booking,
            Err(e) => {
                self.db.release_place(kind, item_id).await?;
                return Err(e);
            }
        };

        log_booking_action(&booking.id, &booking.student_id, booking.status, "book");
        Ok(booking)
    }

    /// Bookings of one student
    pub async fn list_for_student(&self, student_id: &str) -> Result<Vec<Booking>> {
        self.db.bookings.list_for_student(student_id).await
    }

    /// Page through every booking
    pub async fn list_all(&self, pagination: Pagination) -> Result<PaginatedResult<Booking>> {
        self.db.bookings.list_all(pagination).await
    }

    pub async fn get_by_id(&self, booking_id: &str) -> Result<Booking> {
        self.db.bookings.get_by_id(booking_id).await
    }

    /// Cancel a booking. Allowed for the booking student and the owning teacher.
    pub async fn cancel(&self, actor: &User, booking_id: &str) -> Result<Booking> {
        let booking = self.db.bookings.get_by_id(booking_id).await?;

        let allowed = if actor.is_student() {
            booking.student_id == actor.id
        } else {
            self.owns_item(actor, &booking).await?
        };
        if !allowed {
            log_rejected("cancel", Some(&actor.id), "not the booking owner");
            return Err(YogaBookError::PermissionDenied(format!("Cannot cancel booking {}", booking_id)));
        }

        self.transition(actor, booking, BookingStatus::Cancelled).await
    }

    /// Move a booking to a new status. Only the teacher owning the booked item may do this.
    pub async fn update_status(&self, actor: &User, booking_id: &str, status: BookingStatus) -> Result<Booking> {
        let booking = self.db.bookings.get_by_id(booking_id).await?;

        if !actor.is_teacher() || !self.owns_item(actor, &booking).await? {
            log_rejected("update_status", Some(&actor.id), "not the owning teacher");
            return Err(YogaBookError::PermissionDenied(
                format!("Only the owning teacher can change booking {}", booking_id)
            ));
        }

        self.transition(actor, booking, status).await
    }

    /// Mark the payment attached to the actor's booking as paid
    pub async fn settle_payment(&self, actor: &User, booking_id: &str, method: &str) -> Result<Payment> {
        let booking = self.db.bookings.get_by_id(booking_id).await?;
        if booking.student_id != actor.id {
            log_rejected("settle_payment", Some(&actor.id), "not the booking owner");
            return Err(YogaBookError::PermissionDenied(format!("Cannot pay for booking {}", booking_id)));
        }
        if booking.status == BookingStatus::Cancelled {
            log_rejected("settle_payment", Some(&actor.id), "booking cancelled");
            return Err(YogaBookError::Validation(format!("Booking {} is cancelled", booking_id)));
        }

        let payment_id = booking.payment_id.as_deref().ok_or_else(|| {
            YogaBookError::Validation(format!("Booking {} has nothing to pay", booking_id))
        })?;

        let payment = self.db.payments.find_by_id(payment_id).await?
            .ok_or_else(|| YogaBookError::PaymentNotFound { payment_id: payment_id.to_string() })?;
        if !payment.status.is_outstanding() {
            return Err(YogaBookError::Validation(format!("Payment {} is already {}", payment.id, payment.status)));
        }

        let paid = self.db.payments
            .update_status(&payment.id, PaymentStatus::Paid, Some(method.to_string()))
            .await?;
        log_booking_action(&booking.id, &booking.student_id, booking.status, "settle_payment");
        Ok(paid)
    }

    /// A deleted item has no owner any more, so only the booking student can still act on it
    async fn owns_item(&self, actor: &User, booking: &Booking) -> Result<bool> {
        match self.db.get_item(booking.item_type, &booking.item_id).await {
            Ok(item) => Ok(item.teacher_id() == actor.id),
            Err(YogaBookError::ItemNotFound { kind, item_id }) => {
                log_rejected("owns_item", Some(&actor.id), "booked item no longer exists");
                Err(YogaBookError::PermissionDenied(format!(
                    "The {} {} no longer exists; only the student can change booking {}",
                    kind.label(), item_id, booking.id
                )))
            }
            Err(e) => Err(e),
        }
    }

    async fn transition(&self, actor: &User, booking: Booking, next: BookingStatus) -> Result<Booking> {
        if !booking.status.can_transition_to(next) {
            let reason = if booking.status.is_terminal() {
                format!("booking already {}", booking.status)
            } else {
                format!("cannot move from {} to {}", booking.status, next)
            };
            log_rejected("transition", Some(&actor.id), &reason);
            return Err(YogaBookError::InvalidStateTransition { from: booking.status, to: next });
        }

        let updated = self.db.bookings.update_status(&booking.id, next).await?;

        if next == BookingStatus::Cancelled {
            // the item may be gone already; the seat then has nowhere to go back to
            match self.db.release_place(booking.item_type, &booking.item_id).await {
                Ok(_) | Err(YogaBookError::ItemNotFound { .. }) => {}
                Err(e) => return Err(e),
            }

            if let Some(ref payment_id) = booking.payment_id {
                self.refund_if_paid(payment_id).await?;
            }
        }

        log_booking_action(&updated.id, &updated.student_id, updated.status, "transition");
        Ok(updated)
    }

    async fn refund_if_paid(&self, payment_id: &str) -> Result<()> {
        match self.db.payments.find_by_id(payment_id).await? {
            Some(payment) if payment.status == PaymentStatus::Paid => {
                self.db.payments.update_status(payment_id, PaymentStatus::Refunded, None).await?;
            }
            Some(_) => {}
            None => warn!(payment_id = payment_id, "Cancelled booking references a missing payment"),
        }
        Ok(())
    }
}
