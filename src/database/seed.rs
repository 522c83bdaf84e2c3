//! Demo data seeding
//!
//! Seed data comes either from a TOML file or from the built-in demo set,
//! which is laid out relative to the current date so the dashboards always
//! have something upcoming to show.
//!
//! Dates in seed files are quoted strings (`"2025-06-01"`,
//! `"2025-05-01T10:00:00Z"`), not TOML date literals.

use std::path::Path;
use chrono::{DateTime, Duration, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use crate::database::{DatabaseService, StoreStats};
use crate::models::*;
use crate::services::credentials::hash_password_async;
use crate::utils::errors::{YogaBookError, Result};
use crate::utils::helpers::normalize_email;

/// Account with its clear-text password
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub phone: Option<String>,
    pub password: String,
    #[serde(default)]
    pub profile: TeacherProfile,
}

/// Catalog item with a fixed id, owner and current enrolment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedItem<R> {
    pub id: String,
    pub teacher_id: String,
    #[serde(default)]
    pub booked: u32,
    #[serde(flatten)]
    pub request: R,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub users: Vec<SeedUser>,
    #[serde(default)]
    pub classes: Vec<SeedItem<CreateClassRequest>>,
    #[serde(default)]
    pub courses: Vec<SeedItem<CreateCourseRequest>>,
    #[serde(default)]
    pub events: Vec<SeedItem<CreateEventRequest>>,
    #[serde(default)]
    pub bookings: Vec<Booking>,
    #[serde(default)]
    pub payments: Vec<Payment>,
}

/// Parse seed data from TOML text
pub fn parse_seed(text: &str) -> Result<SeedData> {
    Ok(toml::from_str(text)?)
}

/// Read and parse a TOML seed file
pub async fn load_seed_file(path: impl AsRef<Path>) -> Result<SeedData> {
    let text = tokio::fs::read_to_string(path.as_ref()).await?;
    let data = parse_seed(&text)?;
    info!(path = %path.as_ref().display(), users = data.users.len(), "Seed file loaded");
    Ok(data)
}

async fn insert_items<T: CatalogEntry>(
    repository: &crate::database::CatalogRepository<T>,
    items: Vec<SeedItem<T::Create>>,
    now: DateTime<Utc>,
) -> Result<()> {
    for seed in items {
        let mut item = T::from_request(seed.id, seed.teacher_id, seed.request, now);
        if seed.booked > item.capacity() {
            return Err(YogaBookError::Validation(format!(
                "{} {} has {} bookings but only {} places",
                T::KIND, item.id(), seed.booked, item.capacity()
            )));
        }
        item.set_booked(seed.booked);
        repository.insert(item).await?;
    }
    Ok(())
}

/// Write seed data into the store. Passwords are hashed with the given cost.
pub async fn apply_seed(db: &DatabaseService, data: SeedData, scrypt_log_n: u8) -> Result<StoreStats> {
    let now = Utc::now();

    for seed in data.users {
        let user = db.users.insert(User {
            id: seed.id,
            name: seed.name,
            email: normalize_email(&seed.email),
            role: seed.role,
            phone: seed.phone,
            profile: seed.profile.validated()?,
            created_at: now,
        }).await?;

        let hash = hash_password_async(seed.password, scrypt_log_n).await?;
        db.users.set_password_hash(&user.id, hash).await?;
    }

    insert_items(&db.classes, data.classes, now).await?;
    insert_items(&db.courses, data.courses, now).await?;
    insert_items(&db.events, data.events, now).await?;

    for payment in data.payments {
        db.payments.insert(payment).await?;
    }

    for booking in data.bookings {
        if db.find_item(booking.item_type, &booking.item_id).await?.is_none() {
            warn!(booking_id = %booking.id, item_id = %booking.item_id, "Seed booking points at a missing item");
        }
        db.bookings.insert(booking).await?;
    }

    let stats = db.get_system_stats().await;
    info!(
        users = stats.users,
        classes = stats.classes,
        courses = stats.courses,
        events = stats.events,
        bookings = stats.bookings,
        "Seed data applied"
    );
    Ok(stats)
}

fn at(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default()
}

fn booking(id: &str, student_id: &str, kind: ItemKind, item_id: &str, status: BookingStatus, booked: DateTime<Utc>, payment_id: Option<&str>) -> Booking {
    Booking {
        id: id.to_string(),
        student_id: student_id.to_string(),
        item_id: item_id.to_string(),
        item_type: kind,
        status,
        booking_date: booked,
        payment_id: payment_id.map(str::to_string),
        notes: None,
    }
}

fn payment(id: &str, student_id: &str, amount: f64, status: PaymentStatus, created: DateTime<Utc>) -> Payment {
    Payment {
        id: id.to_string(),
        student_id: student_id.to_string(),
        amount,
        status,
        due_date: Some(created.date_naive() + Duration::days(7)),
        paid_at: (status == PaymentStatus::Paid).then_some(created),
        method: (status == PaymentStatus::Paid).then(|| "card".to_string()),
        created_at: created,
    }
}

/// Built-in demo data: two teachers, two students, a mix of past and upcoming items
pub fn demo_seed(now: DateTime<Utc>, demo_password: &str) -> SeedData {
    let today = now.date_naive();
    let days = Duration::days;

    let users = vec![
        SeedUser {
            id: "teacher-maya".to_string(),
            name: "Maya Patel".to_string(),
            email: "teacher@yogabook.dev".to_string(),
            role: Role::Teacher,
            phone: Some("+1 555 0100".to_string()),
            password: demo_password.to_string(),
            profile: TeacherProfile {
                bio: Some("Vinyasa and yin teacher, ten years on the mat.".to_string()),
                specialties: vec!["Vinyasa".to_string(), "Yin".to_string()],
            },
        },
        SeedUser {
            id: "teacher-leo".to_string(),
            name: "Leo Brandt".to_string(),
            email: "leo@yogabook.dev".to_string(),
            role: Role::Teacher,
            phone: None,
            password: demo_password.to_string(),
            profile: TeacherProfile {
                bio: None,
                specialties: vec!["Ashtanga".to_string()],
            },
        },
        SeedUser {
            id: "student-sam".to_string(),
            name: "Sam Rivera".to_string(),
            email: "student@yogabook.dev".to_string(),
            role: Role::Student,
            phone: None,
            password: demo_password.to_string(),
            profile: TeacherProfile::default(),
        },
        SeedUser {
            id: "student-ana".to_string(),
            name: "Ana Costa".to_string(),
            email: "ana@yogabook.dev".to_string(),
            role: Role::Student,
            phone: None,
            password: demo_password.to_string(),
            profile: TeacherProfile::default(),
        },
    ];

    let class = |id: &str, teacher: &str, name: &str, offset: i64, hour: u32, booked: u32, level: Level| SeedItem {
        id: id.to_string(),
        teacher_id: teacher.to_string(),
        booked,
        request: CreateClassRequest {
            name: name.to_string(),
            description: None,
            date: today + days(offset),
            time: at(hour, 0),
            duration_minutes: 60,
            location: "Studio A".to_string(),
            capacity: 12,
            price: 18.0,
            level,
        },
    };

    let classes = vec![
        class("class-morning-flow", "teacher-maya", "Morning Flow", 1, 7, 2, Level::AllLevels),
        class("class-yin", "teacher-maya", "Slow Yin", 3, 19, 1, Level::Beginner),
        class("class-past-flow", "teacher-maya", "Sunday Flow", -6, 10, 1, Level::AllLevels),
        class("class-mysore", "teacher-leo", "Mysore Practice", 2, 6, 1, Level::Advanced),
    ];

    let courses = vec![SeedItem {
        id: "course-foundations".to_string(),
        teacher_id: "teacher-maya".to_string(),
        booked: 1,
        request: CreateCourseRequest {
            name: "Foundations of Yoga".to_string(),
            description: Some("Six weeks of alignment basics".to_string()),
            start_date: today + days(10),
            end_date: today + days(45),
            weeks: 6,
            time: at(18, 30),
            location: "Studio B".to_string(),
            capacity: 10,
            price: 120.0,
            level: Level::Beginner,
        },
    }];

    let events = vec![SeedItem {
        id: "event-sound-bath".to_string(),
        teacher_id: "teacher-maya".to_string(),
        booked: 1,
        request: CreateEventRequest {
            name: "Full Moon Sound Bath".to_string(),
            description: None,
            date: today + days(14),
            time: at(20, 0),
            location: "Rooftop".to_string(),
            capacity: 30,
            price: 25.0,
        },
    }];

    let payments = vec![
        payment("pay-1", "student-sam", 18.0, PaymentStatus::Paid, now - days(2)),
        payment("pay-2", "student-sam", 120.0, PaymentStatus::Pending, now - days(1)),
        payment("pay-3", "student-sam", 18.0, PaymentStatus::Paid, now - days(9)),
        payment("pay-4", "student-ana", 18.0, PaymentStatus::Paid, now - days(3)),
        payment("pay-5", "student-ana", 25.0, PaymentStatus::Overdue, now - days(12)),
    ];

    let bookings = vec![
        booking("booking-1", "student-sam", ItemKind::Class, "class-morning-flow", BookingStatus::Confirmed, now - days(2), Some("pay-1")),
        booking("booking-2", "student-sam", ItemKind::Course, "course-foundations", BookingStatus::Pending, now - days(1), Some("pay-2")),
        booking("booking-3", "student-sam", ItemKind::Class, "class-past-flow", BookingStatus::Completed, now - days(9), Some("pay-3")),
        booking("booking-4", "student-sam", ItemKind::Class, "class-yin", BookingStatus::Cancelled, now - days(4), None),
        booking("booking-5", "student-ana", ItemKind::Class, "class-morning-flow", BookingStatus::Confirmed, now - days(3), Some("pay-4")),
        booking("booking-6", "student-ana", ItemKind::Event, "event-sound-bath", BookingStatus::Confirmed, now - days(12), Some("pay-5")),
        booking("booking-7", "student-ana", ItemKind::Class, "class-yin", BookingStatus::Pending, now - days(1), None),
        booking("booking-8", "student-ana", ItemKind::Class, "class-mysore", BookingStatus::Confirmed, now - days(5), None),
    ];

    SeedData { users, classes, courses, events, bookings, payments }
}
