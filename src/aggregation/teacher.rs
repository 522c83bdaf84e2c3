//! Teacher dashboard aggregation

use std::collections::HashSet;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::Serialize;
use crate::models::{Booking, CatalogEntry, CatalogFilter, CatalogItem, ItemKind};
use super::SourceCollections;
use super::stats::{TeacherStats, teacher_stats};

/// Catalog item tagged with its kind and relevant date
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpcomingItem {
    #[serde(rename = "type")]
    pub kind: ItemKind,
    pub data: CatalogItem,
    pub date: NaiveDate,
}

impl UpcomingItem {
    pub fn new(item: CatalogItem) -> Self {
        Self {
            kind: item.kind(),
            date: item.relevant_date(),
            data: item,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TeacherDashboard {
    pub upcoming: Vec<UpcomingItem>,
    pub recent_bookings_count: usize,
    pub total_students_count: usize,
    pub stats: TeacherStats,
}

/// Ids of every class, course and event the teacher owns
pub fn teacher_item_ids(sources: &SourceCollections, teacher_id: &str) -> HashSet<String> {
    fn owned<'a, T: CatalogEntry>(items: &'a [T], teacher_id: &'a str) -> impl Iterator<Item = String> + 'a {
        items
            .iter()
            .filter(move |item| item.teacher_id() == teacher_id)
            .map(|item| item.id().to_string())
    }

    owned(sources.classes(), teacher_id)
        .chain(owned(sources.courses(), teacher_id))
        .chain(owned(sources.events(), teacher_id))
        .collect()
}

/// The teacher's items dated today or later, soonest first, at most `limit`
pub fn upcoming_items(sources: &SourceCollections, teacher_id: &str, today: NaiveDate, limit: usize) -> Vec<UpcomingItem> {
    fn tagged<T: CatalogEntry>(items: &[T], filter: &CatalogFilter) -> Vec<UpcomingItem> {
        items
            .iter()
            .filter(|item| filter.matches(*item))
            .cloned()
            .map(|item| UpcomingItem::new(item.into_item()))
            .collect()
    }

    let filter = CatalogFilter::for_teacher(teacher_id).from_date(today);

    let mut upcoming = tagged(sources.classes(), &filter);
    upcoming.extend(tagged(sources.courses(), &filter));
    upcoming.extend(tagged(sources.events(), &filter));

    upcoming.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.data.time().cmp(&b.data.time())));
    upcoming.truncate(limit);
    upcoming
}

/// Bookings made within the last `days` days on any of the given items
pub fn recent_bookings_count(bookings: &[Booking], item_ids: &HashSet<String>, now: DateTime<Utc>, days: i64) -> usize {
    let since = now - Duration::days(days);
    bookings
        .iter()
        .filter(|b| b.booking_date >= since && item_ids.contains(&b.item_id))
        .count()
}

/// Distinct students holding a booking on any of the given items
pub fn unique_students_count(bookings: &[Booking], item_ids: &HashSet<String>) -> usize {
    bookings
        .iter()
        .filter(|b| item_ids.contains(&b.item_id))
        .map(|b| b.student_id.as_str())
        .collect::<HashSet<_>>()
        .len()
}

/// Build the teacher dashboard from the collections in `sources`
pub fn build_teacher_dashboard(
    sources: &SourceCollections,
    teacher_id: &str,
    now: DateTime<Utc>,
    upcoming_limit: usize,
    recent_days: i64,
) -> TeacherDashboard {
    let today = now.date_naive();
    let item_ids = teacher_item_ids(sources, teacher_id);

    TeacherDashboard {
        upcoming: upcoming_items(sources, teacher_id, today, upcoming_limit),
        recent_bookings_count: recent_bookings_count(sources.bookings(), &item_ids, now, recent_days),
        total_students_count: unique_students_count(sources.bookings(), &item_ids),
        stats: teacher_stats(sources, teacher_id, &item_ids),
    }
}
