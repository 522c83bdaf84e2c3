//! Student bookings view

use chrono::NaiveDate;
use serde::Serialize;
use crate::models::{Booking, BookingStatus, CatalogItem, Payment};
use super::SourceCollections;

/// Booking joined with its catalog item and optional payment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedBooking {
    pub booking: Booking,
    pub item: CatalogItem,
    pub payment: Option<Payment>,
}

impl EnrichedBooking {
    /// Course start date, or the class/event date
    pub fn item_date(&self) -> NaiveDate {
        self.item.relevant_date()
    }

    /// Upcoming when the item has not happened yet and the booking is still live
    pub fn is_upcoming(&self, today: NaiveDate) -> bool {
        self.item_date() >= today
            && !matches!(self.booking.status, BookingStatus::Cancelled | BookingStatus::Completed)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StudentBookingsView {
    pub upcoming: Vec<EnrichedBooking>,
    pub past: Vec<EnrichedBooking>,
}

impl StudentBookingsView {
    pub fn is_empty(&self) -> bool {
        self.upcoming.is_empty() && self.past.is_empty()
    }

    pub fn len(&self) -> usize {
        self.upcoming.len() + self.past.len()
    }
}

/// Stable sort, most recent booking first
pub fn sort_by_booking_date_desc(bookings: &mut [EnrichedBooking]) {
    bookings.sort_by(|a, b| b.booking.booking_date.cmp(&a.booking.booking_date));
}

/// Join bookings to their items and payments. Bookings whose item cannot be
/// resolved are dropped.
pub fn enrich_bookings(sources: &SourceCollections) -> Vec<EnrichedBooking> {
    let mut enriched: Vec<EnrichedBooking> = sources
        .bookings()
        .iter()
        .filter_map(|booking| {
            let item = sources.resolve_item(booking.item_type, &booking.item_id)?;
            let payment = sources.resolve_payment(booking.payment_id.as_deref());
            Some(EnrichedBooking {
                booking: booking.clone(),
                item,
                payment,
            })
        })
        .collect();

    sort_by_booking_date_desc(&mut enriched);
    enriched
}

/// Split enriched bookings into upcoming and past, keeping their order
pub fn partition_bookings(enriched: Vec<EnrichedBooking>, today: NaiveDate) -> StudentBookingsView {
    let (upcoming, past) = enriched
        .into_iter()
        .partition(|booking| booking.is_upcoming(today));

    StudentBookingsView { upcoming, past }
}

/// Build the bookings view for the bookings present in `sources`
pub fn build_student_view(sources: &SourceCollections, today: NaiveDate) -> StudentBookingsView {
    partition_bookings(enrich_bookings(sources), today)
}
