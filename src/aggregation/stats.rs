//! Derived statistics: fill rates and revenue

use std::collections::HashSet;
use serde::Serialize;
use crate::models::{BookingStatus, CatalogEntry, ItemKind, PaymentStatus};
use super::SourceCollections;
use super::student::StudentBookingsView;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemFill {
    pub kind: ItemKind,
    pub item_id: String,
    pub name: String,
    pub booked: u32,
    pub capacity: u32,
    pub fill_percentage: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TeacherStats {
    pub class_count: usize,
    pub course_count: usize,
    pub event_count: usize,
    /// Mean of the per-item fill percentages, rounded
    pub average_fill: u32,
    /// Paid payments on the teacher's bookings
    pub total_revenue: f64,
    /// Pending and overdue payments on bookings that are still live
    pub pending_revenue: f64,
    pub item_fill: Vec<ItemFill>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StudentSummary {
    pub upcoming_count: usize,
    pub past_count: usize,
    pub total_paid: f64,
    pub outstanding: f64,
}

fn fills<T: CatalogEntry>(items: &[T], teacher_id: &str) -> Vec<ItemFill> {
    items
        .iter()
        .filter(|item| item.teacher_id() == teacher_id)
        .map(|item| ItemFill {
            kind: T::KIND,
            item_id: item.id().to_string(),
            name: item.name().to_string(),
            booked: item.booked(),
            capacity: item.capacity(),
            fill_percentage: item.fill_percentage(),
        })
        .collect()
}

/// Fill rates and revenue for one teacher; `item_ids` is the teacher's item-id set
pub fn teacher_stats(sources: &SourceCollections, teacher_id: &str, item_ids: &HashSet<String>) -> TeacherStats {
    let class_fill = fills(sources.classes(), teacher_id);
    let course_fill = fills(sources.courses(), teacher_id);
    let event_fill = fills(sources.events(), teacher_id);

    let class_count = class_fill.len();
    let course_count = course_fill.len();
    let event_count = event_fill.len();

    let item_fill: Vec<ItemFill> = class_fill.into_iter().chain(course_fill).chain(event_fill).collect();
    let average_fill = if item_fill.is_empty() {
        0
    } else {
        let sum: u32 = item_fill.iter().map(|f| f.fill_percentage).sum();
        (sum as f64 / item_fill.len() as f64).round() as u32
    };

    let mut seen_payments = HashSet::new();
    let mut total_revenue = 0.0;
    let mut pending_revenue = 0.0;

    for booking in sources.bookings().iter().filter(|b| item_ids.contains(&b.item_id)) {
        let Some(payment) = sources.resolve_payment(booking.payment_id.as_deref()) else {
            continue;
        };
        if !seen_payments.insert(payment.id.clone()) {
            continue;
        }
        match payment.status {
            PaymentStatus::Paid => total_revenue += payment.amount,
            status if status.is_outstanding() && booking.status != BookingStatus::Cancelled => {
                pending_revenue += payment.amount
            }
            _ => {}
        }
    }

    TeacherStats {
        class_count,
        course_count,
        event_count,
        average_fill,
        total_revenue,
        pending_revenue,
        item_fill,
    }
}

/// Counts and money totals for a student's bookings view
pub fn student_summary(view: &StudentBookingsView) -> StudentSummary {
    let mut summary = StudentSummary {
        upcoming_count: view.upcoming.len(),
        past_count: view.past.len(),
        ..Default::default()
    };

    let mut seen_payments = HashSet::new();
    for enriched in view.upcoming.iter().chain(view.past.iter()) {
        let Some(ref payment) = enriched.payment else {
            continue;
        };
        if !seen_payments.insert(payment.id.as_str()) {
            continue;
        }
        if payment.status == PaymentStatus::Paid {
            summary.total_paid += payment.amount;
        } else if payment.status.is_outstanding() && enriched.booking.status != BookingStatus::Cancelled {
            summary.outstanding += payment.amount;
        }
    }

    summary
}
