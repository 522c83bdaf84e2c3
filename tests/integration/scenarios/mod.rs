//! Integration test scenarios
//!
//! Complete user journeys through several services at once.

pub mod student_journey_test;
pub mod teacher_dashboard_test;
pub mod seed_file_test;
