//! Teacher dashboard page

use std::fmt::Write;
use crate::aggregation::{TeacherDashboard, TeacherStats};
use crate::utils::helpers::{format_price, truncate_text};
use super::ViewState;
use super::format::{fill_bar, item_line, kind_icon, MAX_NAME_WIDTH};

fn render_stats(out: &mut String, stats: &TeacherStats) {
    let _ = writeln!(
        out,
        "📊 {} classes · {} courses · {} events · average fill {}%",
        stats.class_count, stats.course_count, stats.event_count, stats.average_fill,
    );
    let _ = writeln!(
        out,
        "💰 Revenue {} · pending {}",
        format_price(stats.total_revenue),
        format_price(stats.pending_revenue),
    );

    if !stats.item_fill.is_empty() {
        out.push('\n');
        let _ = writeln!(out, "Fill by item");
        for fill in &stats.item_fill {
            let _ = writeln!(
                out,
                "  {} {:<width$} {} ({}/{})",
                kind_icon(fill.kind),
                truncate_text(&fill.name, MAX_NAME_WIDTH),
                fill_bar(fill.fill_percentage),
                fill.booked,
                fill.capacity,
                width = MAX_NAME_WIDTH,
            );
        }
    }
}

/// Headline counts, the next few items on the schedule and fill statistics
pub fn render_teacher_dashboard(dashboard: &TeacherDashboard) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "🆕 {} bookings in the last week", dashboard.recent_bookings_count);
    let _ = writeln!(out, "👥 {} students in total", dashboard.total_students_count);
    out.push('\n');

    let _ = writeln!(out, "📅 Coming up");
    if dashboard.upcoming.is_empty() {
        let _ = writeln!(out, "  Nothing scheduled. Create a class, course or event to get started.");
    }
    for upcoming in &dashboard.upcoming {
        let _ = writeln!(
            out,
            "  {} · {}/{} booked",
            item_line(&upcoming.data),
            upcoming.data.booked(),
            upcoming.data.capacity(),
        );
    }
    out.push('\n');

    render_stats(&mut out, &dashboard.stats);
    out
}

/// Full page for a teacher, including the inline error when loading failed
pub fn render_teacher_page(name: &str, state: &ViewState<TeacherDashboard>) -> String {
    let mut out = format!("🧘 Welcome back, {}!\n\n", name);
    out.push_str(&state.render_with(render_teacher_dashboard));
    out
}
