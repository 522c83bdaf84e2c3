//! Service-level integration tests

pub mod auth_test;
pub mod catalog_test;
