//! Shared text fragments for rendered views

use crate::models::{BookingStatus, CatalogItem, ItemKind, Payment, PaymentStatus};
use crate::utils::helpers::{format_date, format_price, format_time, truncate_text};

/// Longest item name shown on a single line
pub const MAX_NAME_WIDTH: usize = 40;

pub fn kind_icon(kind: ItemKind) -> &'static str {
    match kind {
        ItemKind::Class => "🧘",
        ItemKind::Course => "📚",
        ItemKind::Event => "🎉",
    }
}

pub fn status_badge(status: BookingStatus) -> &'static str {
    match status {
        BookingStatus::Pending => "⏳ pending",
        BookingStatus::Confirmed => "✅ confirmed",
        BookingStatus::Cancelled => "❌ cancelled",
        BookingStatus::Completed => "🏁 completed",
    }
}

/// e.g. `$18.00 paid` or `$120.00 due Sat, 07 Jun 2025`
pub fn payment_label(payment: &Payment) -> String {
    match (payment.status, payment.due_date) {
        (PaymentStatus::Pending, Some(due)) => format!("{} due {}", format_price(payment.amount), format_date(due)),
        (status, _) => format!("{} {}", format_price(payment.amount), status),
    }
}

/// One-line summary of a catalog item: icon, name, date, time and place
pub fn item_line(item: &CatalogItem) -> String {
    format!(
        "{} {} | {} {} @ {}",
        kind_icon(item.kind()),
        truncate_text(item.name(), MAX_NAME_WIDTH),
        format_date(item.relevant_date()),
        format_time(item.time()),
        item.location(),
    )
}

/// Text bar for a fill percentage, ten cells wide
pub fn fill_bar(percentage: u32) -> String {
    let filled = (percentage.min(100) as usize + 5) / 10;
    format!("[{}{}] {}%", "#".repeat(filled), ".".repeat(10 - filled), percentage)
}
