//! Helper functions and utilities
//!
//! This module contains common helper functions used throughout the application.

use std::sync::OnceLock;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use regex::Regex;
use uuid::Uuid;

/// Generate a new UUID v4 for use as a record id
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

/// Format a timestamp for display
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M UTC").to_string()
}

/// Format a calendar date as e.g. `Sun, 01 Jun 2025`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%a, %d %b %Y").to_string()
}

pub fn format_time(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// Format an amount of money with two decimals
pub fn format_price(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Truncate text to a maximum number of characters with ellipsis
pub fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_length.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
    })
}

/// Validate email format
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email.trim())
}

/// Validate phone number format (basic validation)
pub fn is_valid_phone(phone: &str) -> bool {
    let digits = phone.chars().filter(|c| c.is_ascii_digit()).count();
    phone.chars().all(|c| c.is_ascii_digit() || c == '+' || c == '-' || c == ' ' || c == '(' || c == ')')
        && digits >= 7
}

/// Normalize an email for lookups
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Calculate pagination offset for a 1-based page
pub fn calculate_offset(page: usize, page_size: usize) -> usize {
    page.saturating_sub(1) * page_size
}

/// Number of pages needed for `total` items
pub fn total_pages(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}
