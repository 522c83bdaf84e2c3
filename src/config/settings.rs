//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use std::path::Path;
use serde::{Deserialize, Serialize};

/// Main application configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub catalog: CatalogConfig,
    pub booking: BookingConfig,
    pub dashboard: DashboardConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
    pub seed: SeedConfig,
    pub demo: DemoConfig,
}

/// Catalog listing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub default_page_size: usize,
    pub max_page_size: usize,
}

/// Booking ledger configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BookingConfig {
    /// New bookings start confirmed instead of pending
    pub auto_confirm: bool,
    /// Attach a pending payment for paid items when a booking is created
    pub create_pending_payment: bool,
    pub payment_due_days: i64,
}

/// Dashboard aggregation configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub upcoming_limit: usize,
    pub recent_booking_days: i64,
}

/// Identity store configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AuthConfig {
    pub min_password_length: usize,
    /// scrypt cost parameter (log2 of N)
    pub scrypt_log_n: u8,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// Directory for the daily rolling log file; stdout only when unset
    pub directory: Option<String>,
    pub file_prefix: String,
    pub json: bool,
}

/// Demo data configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SeedConfig {
    pub enabled: bool,
    /// TOML seed file; the built-in demo data is used when unset
    pub path: Option<String>,
}

/// Account the binary signs in with
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DemoConfig {
    pub email: String,
    pub password: String,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("YOGABOOK").separator("__"))
            .build()?;

        settings.try_deserialize()
    }

    /// Load settings from an explicit TOML file, still honouring environment overrides
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path.as_ref()).format(config::FileFormat::Toml))
            .add_source(config::Environment::with_prefix("YOGABOOK").separator("__"))
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::YogaBookError> {
        super::validation::validate_settings(self)
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            default_page_size: 10,
            max_page_size: 100,
        }
    }
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            auto_confirm: false,
            create_pending_payment: true,
            payment_due_days: 7,
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            upcoming_limit: 5,
            recent_booking_days: 7,
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            min_password_length: 6,
            scrypt_log_n: 15,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
            file_prefix: "yogabook.log".to_string(),
            json: false,
        }
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: None,
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            email: "teacher@yogabook.dev".to_string(),
            password: "namaste123".to_string(),
        }
    }
}
