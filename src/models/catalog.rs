//! Catalog models: classes, courses and events
//!
//! All three kinds share the [`CatalogEntry`] trait so the repository and
//! service layers can be written once and instantiated per kind.

use std::fmt;
use serde::{Deserialize, Serialize};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use crate::utils::errors::{YogaBookError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Class,
    Course,
    Event,
}

impl ItemKind {
    /// Lowercase label used in messages and serialized data
    pub fn label(&self) -> &'static str {
        match self {
            ItemKind::Class => "class",
            ItemKind::Course => "course",
            ItemKind::Event => "event",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemKind::Class => write!(f, "Class"),
            ItemKind::Course => write!(f, "Course"),
            ItemKind::Event => write!(f, "Event"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
    #[default]
    AllLevels,
}

/// Behaviour shared by every bookable catalog item
pub trait CatalogEntry: Clone + fmt::Debug + Send + Sync + 'static {
    type Create: Send + fmt::Debug;
    type Update: Send + fmt::Debug;

    const KIND: ItemKind;

    fn id(&self) -> &str;
    fn teacher_id(&self) -> &str;
    fn name(&self) -> &str;
    /// Date used for ordering and upcoming/past decisions
    fn relevant_date(&self) -> NaiveDate;
    fn capacity(&self) -> u32;
    fn booked(&self) -> u32;
    fn set_booked(&mut self, booked: u32);
    fn price(&self) -> f64;

    fn from_request(id: String, teacher_id: String, request: Self::Create, now: DateTime<Utc>) -> Self;
    fn apply_update(&mut self, update: Self::Update, now: DateTime<Utc>);
    fn into_item(self) -> CatalogItem;

    /// Kind-specific checks on top of the shared ones
    fn validate_specific(&self) -> Result<()> {
        Ok(())
    }

    /// Validate the fields every catalog item must satisfy
    fn validate(&self) -> Result<()> {
        if self.name().trim().is_empty() {
            return Err(YogaBookError::Validation(format!("{} name is required", Self::KIND)));
        }
        if self.capacity() == 0 {
            return Err(YogaBookError::Validation("Capacity must be greater than 0".to_string()));
        }
        if !self.price().is_finite() || self.price() < 0.0 {
            return Err(YogaBookError::Validation("Price cannot be negative".to_string()));
        }
        self.validate_specific()
    }

    fn is_full(&self) -> bool {
        self.booked() >= self.capacity()
    }

    fn fill_percentage(&self) -> u32 {
        fill_percentage(self.booked(), self.capacity())
    }
}

/// Rounded percentage of capacity taken; zero capacity yields zero
pub fn fill_percentage(booked: u32, capacity: u32) -> u32 {
    if capacity == 0 {
        return 0;
    }
    ((booked as f64 / capacity as f64) * 100.0).round() as u32
}

/// Single drop-in session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Class {
    pub id: String,
    pub teacher_id: String,
    pub name: String,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub duration_minutes: u32,
    pub location: String,
    pub capacity: u32,
    pub booked_count: u32,
    pub price: f64,
    #[serde(default)]
    pub level: Level,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Multi-week series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub teacher_id: String,
    pub name: String,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub weeks: u32,
    pub time: NaiveTime,
    pub location: String,
    pub capacity: u32,
    pub enrolled_count: u32,
    pub price: f64,
    #[serde(default)]
    pub level: Level,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One-off workshop, retreat or gathering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub teacher_id: String,
    pub name: String,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: String,
    pub capacity: u32,
    pub booked_count: u32,
    pub price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateClassRequest {
    pub name: String,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub duration_minutes: u32,
    pub location: String,
    pub capacity: u32,
    pub price: f64,
    #[serde(default)]
    pub level: Level,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateClassRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub duration_minutes: Option<u32>,
    pub location: Option<String>,
    pub capacity: Option<u32>,
    pub price: Option<f64>,
    pub level: Option<Level>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCourseRequest {
    pub name: String,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub weeks: u32,
    pub time: NaiveTime,
    pub location: String,
    pub capacity: u32,
    pub price: f64,
    #[serde(default)]
    pub level: Level,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateCourseRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub weeks: Option<u32>,
    pub time: Option<NaiveTime>,
    pub location: Option<String>,
    pub capacity: Option<u32>,
    pub price: Option<f64>,
    pub level: Option<Level>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEventRequest {
    pub name: String,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: String,
    pub capacity: u32,
    pub price: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateEventRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub location: Option<String>,
    pub capacity: Option<u32>,
    pub price: Option<f64>,
}

impl CatalogEntry for Class {
    type Create = CreateClassRequest;
    type Update = UpdateClassRequest;

    const KIND: ItemKind = ItemKind::Class;

    fn id(&self) -> &str { &self.id }
    fn teacher_id(&self) -> &str { &self.teacher_id }
    fn name(&self) -> &str { &self.name }
    fn relevant_date(&self) -> NaiveDate { self.date }
    fn capacity(&self) -> u32 { self.capacity }
    fn booked(&self) -> u32 { self.booked_count }
    fn set_booked(&mut self, booked: u32) { self.booked_count = booked; }
    fn price(&self) -> f64 { self.price }

    fn from_request(id: String, teacher_id: String, request: CreateClassRequest, now: DateTime<Utc>) -> Self {
        Self {
            id,
            teacher_id,
            name: request.name,
            description: request.description,
            date: request.date,
            time: request.time,
            duration_minutes: request.duration_minutes,
            location: request.location,
            capacity: request.capacity,
            booked_count: 0,
            price: request.price,
            level: request.level,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_update(&mut self, update: UpdateClassRequest, now: DateTime<Utc>) {
        if let Some(name) = update.name { self.name = name; }
        if let Some(description) = update.description { self.description = Some(description); }
        if let Some(date) = update.date { self.date = date; }
        if let Some(time) = update.time { self.time = time; }
        if let Some(duration) = update.duration_minutes { self.duration_minutes = duration; }
        if let Some(location) = update.location { self.location = location; }
        if let Some(capacity) = update.capacity { self.capacity = capacity; }
        if let Some(price) = update.price { self.price = price; }
        if let Some(level) = update.level { self.level = level; }
        self.updated_at = now;
    }

    fn into_item(self) -> CatalogItem {
        CatalogItem::Class(self)
    }

    fn validate_specific(&self) -> Result<()> {
        if self.duration_minutes == 0 {
            return Err(YogaBookError::Validation("Class duration must be greater than 0".to_string()));
        }
        Ok(())
    }
}

impl CatalogEntry for Course {
    type Create = CreateCourseRequest;
    type Update = UpdateCourseRequest;

    const KIND: ItemKind = ItemKind::Course;

    fn id(&self) -> &str { &self.id }
    fn teacher_id(&self) -> &str { &self.teacher_id }
    fn name(&self) -> &str { &self.name }
    fn relevant_date(&self) -> NaiveDate { self.start_date }
    fn capacity(&self) -> u32 { self.capacity }
    fn booked(&self) -> u32 { self.enrolled_count }
    fn set_booked(&mut self, booked: u32) { self.enrolled_count = booked; }
    fn price(&self) -> f64 { self.price }

    fn from_request(id: String, teacher_id: String, request: CreateCourseRequest, now: DateTime<Utc>) -> Self {
        Self {
            id,
            teacher_id,
            name: request.name,
            description: request.description,
            start_date: request.start_date,
            end_date: request.end_date,
            weeks: request.weeks,
            time: request.time,
            location: request.location,
            capacity: request.capacity,
            enrolled_count: 0,
            price: request.price,
            level: request.level,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_update(&mut self, update: UpdateCourseRequest, now: DateTime<Utc>) {
        if let Some(name) = update.name { self.name = name; }
        if let Some(description) = update.description { self.description = Some(description); }
        if let Some(start_date) = update.start_date { self.start_date = start_date; }
        if let Some(end_date) = update.end_date { self.end_date = end_date; }
        if let Some(weeks) = update.weeks { self.weeks = weeks; }
        if let Some(time) = update.time { self.time = time; }
        if let Some(location) = update.location { self.location = location; }
        if let Some(capacity) = update.capacity { self.capacity = capacity; }
        if let Some(price) = update.price { self.price = price; }
        if let Some(level) = update.level { self.level = level; }
        self.updated_at = now;
    }

    fn into_item(self) -> CatalogItem {
        CatalogItem::Course(self)
    }

    fn validate_specific(&self) -> Result<()> {
        if self.end_date < self.start_date {
            return Err(YogaBookError::Validation("Course cannot end before it starts".to_string()));
        }
        if self.weeks == 0 {
            return Err(YogaBookError::Validation("Course must run for at least one week".to_string()));
        }
        Ok(())
    }
}

impl CatalogEntry for Event {
    type Create = CreateEventRequest;
    type Update = UpdateEventRequest;

    const KIND: ItemKind = ItemKind::Event;

    fn id(&self) -> &str { &self.id }
    fn teacher_id(&self) -> &str { &self.teacher_id }
    fn name(&self) -> &str { &self.name }
    fn relevant_date(&self) -> NaiveDate { self.date }
    fn capacity(&self) -> u32 { self.capacity }
    fn booked(&self) -> u32 { self.booked_count }
    fn set_booked(&mut self, booked: u32) { self.booked_count = booked; }
    fn price(&self) -> f64 { self.price }

    fn from_request(id: String, teacher_id: String, request: CreateEventRequest, now: DateTime<Utc>) -> Self {
        Self {
            id,
            teacher_id,
            name: request.name,
            description: request.description,
            date: request.date,
            time: request.time,
            location: request.location,
            capacity: request.capacity,
            booked_count: 0,
            price: request.price,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_update(&mut self, update: UpdateEventRequest, now: DateTime<Utc>) {
        if let Some(name) = update.name { self.name = name; }
        if let Some(description) = update.description { self.description = Some(description); }
        if let Some(date) = update.date { self.date = date; }
        if let Some(time) = update.time { self.time = time; }
        if let Some(location) = update.location { self.location = location; }
        if let Some(capacity) = update.capacity { self.capacity = capacity; }
        if let Some(price) = update.price { self.price = price; }
        self.updated_at = now;
    }

    fn into_item(self) -> CatalogItem {
        CatalogItem::Event(self)
    }
}

/// Any bookable item, tagged by kind as `{type, data}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum CatalogItem {
    Class(Class),
    Course(Course),
    Event(Event),
}

impl CatalogItem {
    pub fn kind(&self) -> ItemKind {
        match self {
            CatalogItem::Class(_) => ItemKind::Class,
            CatalogItem::Course(_) => ItemKind::Course,
            CatalogItem::Event(_) => ItemKind::Event,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            CatalogItem::Class(c) => c.id(),
            CatalogItem::Course(c) => c.id(),
            CatalogItem::Event(e) => e.id(),
        }
    }

    pub fn teacher_id(&self) -> &str {
        match self {
            CatalogItem::Class(c) => c.teacher_id(),
            CatalogItem::Course(c) => c.teacher_id(),
            CatalogItem::Event(e) => e.teacher_id(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            CatalogItem::Class(c) => c.name(),
            CatalogItem::Course(c) => c.name(),
            CatalogItem::Event(e) => e.name(),
        }
    }

    /// Course uses its start date; classes and events their single date
    pub fn relevant_date(&self) -> NaiveDate {
        match self {
            CatalogItem::Class(c) => c.relevant_date(),
            CatalogItem::Course(c) => c.relevant_date(),
            CatalogItem::Event(e) => e.relevant_date(),
        }
    }

    pub fn time(&self) -> NaiveTime {
        match self {
            CatalogItem::Class(c) => c.time,
            CatalogItem::Course(c) => c.time,
            CatalogItem::Event(e) => e.time,
        }
    }

    pub fn location(&self) -> &str {
        match self {
            CatalogItem::Class(c) => &c.location,
            CatalogItem::Course(c) => &c.location,
            CatalogItem::Event(e) => &e.location,
        }
    }

    pub fn capacity(&self) -> u32 {
        match self {
            CatalogItem::Class(c) => c.capacity(),
            CatalogItem::Course(c) => c.capacity(),
            CatalogItem::Event(e) => e.capacity(),
        }
    }

    pub fn booked(&self) -> u32 {
        match self {
            CatalogItem::Class(c) => c.booked(),
            CatalogItem::Course(c) => c.booked(),
            CatalogItem::Event(e) => e.booked(),
        }
    }

    pub fn price(&self) -> f64 {
        match self {
            CatalogItem::Class(c) => c.price(),
            CatalogItem::Course(c) => c.price(),
            CatalogItem::Event(e) => e.price(),
        }
    }

    pub fn fill_percentage(&self) -> u32 {
        fill_percentage(self.booked(), self.capacity())
    }
}
