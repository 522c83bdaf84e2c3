//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{YogaBookError, Result};
use crate::utils::helpers::is_valid_email;
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_catalog_config(&settings.catalog)?;
    validate_booking_config(&settings.booking)?;
    validate_dashboard_config(&settings.dashboard)?;
    validate_auth_config(&settings.auth)?;
    validate_logging_config(&settings.logging)?;
    validate_demo_config(&settings.demo, settings.auth.min_password_length)?;

    if let Some(ref path) = settings.seed.path {
        if path.trim().is_empty() {
            return Err(YogaBookError::Config(
                "Seed path cannot be blank".to_string()
            ));
        }
    }

    Ok(())
}

/// Validate catalog configuration
fn validate_catalog_config(config: &super::CatalogConfig) -> Result<()> {
    if config.default_page_size == 0 {
        return Err(YogaBookError::Config(
            "Default page size must be greater than 0".to_string()
        ));
    }

    if config.default_page_size > config.max_page_size {
        return Err(YogaBookError::Config(
            "Default page size cannot be greater than max page size".to_string()
        ));
    }

    Ok(())
}

/// Validate booking configuration
fn validate_booking_config(config: &super::BookingConfig) -> Result<()> {
    if config.payment_due_days < 0 {
        return Err(YogaBookError::Config(
            "Payment due days cannot be negative".to_string()
        ));
    }

    Ok(())
}

/// Validate dashboard configuration
fn validate_dashboard_config(config: &super::DashboardConfig) -> Result<()> {
    if config.upcoming_limit == 0 {
        return Err(YogaBookError::Config(
            "Upcoming item limit must be greater than 0".to_string()
        ));
    }

    if config.recent_booking_days <= 0 {
        return Err(YogaBookError::Config(
            "Recent booking window must be at least one day".to_string()
        ));
    }

    Ok(())
}

/// Validate identity store configuration
fn validate_auth_config(config: &super::AuthConfig) -> Result<()> {
    if config.min_password_length < 4 {
        return Err(YogaBookError::Config(
            "Minimum password length must be at least 4".to_string()
        ));
    }

    // 2^20 rounds already needs a gigabyte of memory per hash
    if config.scrypt_log_n == 0 || config.scrypt_log_n > 20 {
        return Err(YogaBookError::Config(
            format!("Invalid scrypt cost parameter: {}", config.scrypt_log_n)
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(YogaBookError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    let base_level = config.level.split(',').next().unwrap_or_default().trim();
    if !base_level.contains('=') && !valid_levels.contains(&base_level) {
        return Err(YogaBookError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    if config.file_prefix.is_empty() {
        return Err(YogaBookError::Config(
            "Log file prefix is required".to_string()
        ));
    }

    Ok(())
}

/// Validate demo account configuration
fn validate_demo_config(config: &super::DemoConfig, min_password_length: usize) -> Result<()> {
    if !is_valid_email(&config.email) {
        return Err(YogaBookError::Config(
            format!("Demo email is not a valid address: {}", config.email)
        ));
    }

    if config.password.chars().count() < min_password_length {
        return Err(YogaBookError::Config(
            "Demo password is shorter than the minimum password length".to_string()
        ));
    }

    Ok(())
}
