//! Test data helpers for building requests and records

use chrono::{Duration, NaiveDate, NaiveTime, Utc};
use YogaBook::models::*;

/// Helper function to create a class request on the given day
pub fn create_test_class_request(name: &str, date: NaiveDate, capacity: u32) -> CreateClassRequest {
    CreateClassRequest {
        name: name.to_string(),
        description: Some(format!("Description for {}", name)),
        date,
        time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        duration_minutes: 60,
        location: "Test Studio".to_string(),
        capacity,
        price: 15.0,
        level: Level::AllLevels,
    }
}

/// Helper function to create a course request starting on the given day
pub fn create_test_course_request(name: &str, start_date: NaiveDate, weeks: u32) -> CreateCourseRequest {
    CreateCourseRequest {
        name: name.to_string(),
        description: None,
        start_date,
        end_date: start_date + Duration::weeks(weeks as i64),
        weeks,
        time: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
        location: "Test Studio".to_string(),
        capacity: 10,
        price: 90.0,
        level: Level::Beginner,
    }
}

/// Helper function to create an event request on the given day
pub fn create_test_event_request(name: &str, date: NaiveDate, price: f64) -> CreateEventRequest {
    CreateEventRequest {
        name: name.to_string(),
        description: None,
        date,
        time: NaiveTime::from_hms_opt(19, 30, 0).unwrap(),
        location: "Test Hall".to_string(),
        capacity: 25,
        price,
    }
}

/// Helper function to create an in-memory user without touching the store
pub fn create_test_user(id: &str, role: Role) -> User {
    User {
        id: id.to_string(),
        name: format!("User {}", id),
        email: format!("{}@test.yogabook.dev", id),
        role,
        phone: None,
        profile: TeacherProfile::default(),
        created_at: Utc::now(),
    }
}
