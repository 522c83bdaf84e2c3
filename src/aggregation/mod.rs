//! Booking aggregation
//!
//! Pure functions joining bookings to catalog items and payments. Every
//! source collection is optional: `None` means "not loaded yet", and each
//! aggregation degrades to empty results or zero counts in that case.

pub mod student;
pub mod teacher;
pub mod stats;

pub use student::{EnrichedBooking, StudentBookingsView, build_student_view, enrich_bookings, partition_bookings, sort_by_booking_date_desc};
pub use teacher::{TeacherDashboard, UpcomingItem, build_teacher_dashboard, teacher_item_ids, upcoming_items, recent_bookings_count, unique_students_count};
pub use stats::{ItemFill, StudentSummary, TeacherStats, student_summary, teacher_stats};

use crate::models::{Booking, CatalogEntry, CatalogItem, Class, Course, Event, ItemKind, Payment};

/// Collections an aggregation reads from
#[derive(Debug, Clone, Default)]
pub struct SourceCollections {
    pub classes: Option<Vec<Class>>,
    pub courses: Option<Vec<Course>>,
    pub events: Option<Vec<Event>>,
    pub bookings: Option<Vec<Booking>>,
    pub payments: Option<Vec<Payment>>,
}

impl SourceCollections {
    pub fn classes(&self) -> &[Class] {
        self.classes.as_deref().unwrap_or_default()
    }

    pub fn courses(&self) -> &[Course] {
        self.courses.as_deref().unwrap_or_default()
    }

    pub fn events(&self) -> &[Event] {
        self.events.as_deref().unwrap_or_default()
    }

    pub fn bookings(&self) -> &[Booking] {
        self.bookings.as_deref().unwrap_or_default()
    }

    pub fn payments(&self) -> &[Payment] {
        self.payments.as_deref().unwrap_or_default()
    }

    /// Find the catalog item a booking points at by id and kind
    pub fn resolve_item(&self, kind: ItemKind, item_id: &str) -> Option<CatalogItem> {
        match kind {
            ItemKind::Class => find_entry(self.classes(), item_id),
            ItemKind::Course => find_entry(self.courses(), item_id),
            ItemKind::Event => find_entry(self.events(), item_id),
        }
    }

    pub fn resolve_payment(&self, payment_id: Option<&str>) -> Option<Payment> {
        let payment_id = payment_id?;
        self.payments().iter().find(|p| p.id == payment_id).cloned()
    }
}

fn find_entry<T: CatalogEntry>(items: &[T], item_id: &str) -> Option<CatalogItem> {
    items.iter().find(|item| item.id() == item_id).cloned().map(CatalogEntry::into_item)
}
