//! Data models module
//!
//! This module contains all data structures used throughout the application

pub mod user;
pub mod catalog;
pub mod booking;
pub mod payment;
pub mod pagination;

// Re-export commonly used models
pub use user::{User, Role, TeacherProfile, CreateUserRequest, UpdateUserRequest};
pub use catalog::{
    CatalogEntry, CatalogItem, ItemKind, Level,
    Class, Course, Event,
    CreateClassRequest, CreateCourseRequest, CreateEventRequest,
    UpdateClassRequest, UpdateCourseRequest, UpdateEventRequest,
};
pub use booking::{Booking, BookingStatus, CreateBookingRequest};
pub use payment::{Payment, PaymentStatus, CreatePaymentRequest};
pub use pagination::{CatalogFilter, Pagination, PaginatedResult};
