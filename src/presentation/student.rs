//! Student bookings page

use std::fmt::Write;
use crate::aggregation::{EnrichedBooking, StudentBookingsView, StudentSummary};
use crate::utils::helpers::{format_price, format_timestamp};
use super::ViewState;
use super::format::{item_line, payment_label, status_badge};

fn render_booking(out: &mut String, enriched: &EnrichedBooking) {
    let _ = writeln!(out, "  {}", item_line(&enriched.item));
    let _ = write!(
        out,
        "     {} · booked {}",
        status_badge(enriched.booking.status),
        format_timestamp(enriched.booking.booking_date),
    );
    if let Some(ref payment) = enriched.payment {
        let _ = write!(out, " · {}", payment_label(payment));
    }
    out.push('\n');
    if let Some(ref notes) = enriched.booking.notes {
        let _ = writeln!(out, "     📝 {}", notes);
    }
}

fn render_section(out: &mut String, title: &str, bookings: &[EnrichedBooking], empty: &str) {
    let _ = writeln!(out, "{} ({})", title, bookings.len());
    if bookings.is_empty() {
        let _ = writeln!(out, "  {}", empty);
    }
    for enriched in bookings {
        render_booking(out, enriched);
    }
}

/// Upcoming and past bookings, most recent booking first in each section
pub fn render_student_bookings(view: &StudentBookingsView) -> String {
    let mut out = String::new();
    render_section(&mut out, "📅 Upcoming", &view.upcoming, "No upcoming bookings. Browse the schedule to book a class.");
    out.push('\n');
    render_section(&mut out, "🕰️ Past", &view.past, "No past bookings yet.");
    out
}

pub fn render_student_summary(summary: &StudentSummary) -> String {
    let mut out = format!(
        "{} upcoming · {} past · {} paid",
        summary.upcoming_count,
        summary.past_count,
        format_price(summary.total_paid),
    );
    if summary.outstanding > 0.0 {
        let _ = write!(out, " · {} outstanding", format_price(summary.outstanding));
    }
    out.push('\n');
    out
}

/// Full page for a student, including the inline error when loading failed
pub fn render_student_page(name: &str, state: &ViewState<(StudentBookingsView, StudentSummary)>) -> String {
    let mut out = format!("👋 Hi {}! Here are your bookings.\n\n", name);
    out.push_str(&state.render_with(|(view, summary)| {
        format!("{}\n{}", render_student_summary(summary), render_student_bookings(view))
    }));
    out
}
