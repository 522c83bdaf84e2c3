//! Test context for unified test setup
//!
//! Builds the full service stack over a fresh in-memory store with settings
//! tuned for tests (cheap password hashing, no file logging).

use std::sync::Arc;
use tempfile::TempDir;
use YogaBook::config::Settings;
use YogaBook::database::seed::apply_seed;
use YogaBook::database::StoreStats;
use YogaBook::models::{Role, User};
use YogaBook::services::{MemorySessionStore, RegisterRequest, ServiceFactory};
use YogaBook::MemoryStore;

use crate::fixtures::{TestFixtures, TEST_PASSWORD};

/// scrypt cost used by every test account
pub const TEST_SCRYPT_LOG_N: u8 = 4;

/// Test context configuration
#[derive(Debug, Clone, Default)]
pub struct TestConfig {
    pub load_fixtures: bool,
    pub auto_confirm: bool,
}

/// Unified test context that manages all test components
pub struct TestContext {
    pub services: ServiceFactory,
    pub store: MemoryStore,
    pub sessions: Arc<MemorySessionStore>,
    pub settings: Settings,
    pub temp_dir: TempDir,
}

impl TestContext {
    /// Create a new test context with an empty store
    pub async fn new() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        Self::new_with_config(TestConfig::default()).await
    }

    /// Create a new test context with custom configuration
    pub async fn new_with_config(config: TestConfig) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let temp_dir = tempfile::tempdir()?;
        let settings = Self::create_test_settings(&config);

        let store = MemoryStore::new();
        let sessions = Arc::new(MemorySessionStore::new());
        let services = ServiceFactory::new(&settings, store.clone(), sessions.clone());

        let ctx = Self {
            services,
            store,
            sessions,
            settings,
            temp_dir,
        };

        if config.load_fixtures {
            ctx.load_fixtures().await?;
        }

        Ok(ctx)
    }

    /// Create test-specific settings
    fn create_test_settings(config: &TestConfig) -> Settings {
        let mut settings = Settings::default();

        settings.auth.scrypt_log_n = TEST_SCRYPT_LOG_N;
        settings.booking.auto_confirm = config.auto_confirm;
        settings.logging.level = "debug".to_string();
        settings.logging.directory = None;
        settings.seed.enabled = false;

        settings
    }

    /// Load test fixtures into the store
    pub async fn load_fixtures(&self) -> Result<StoreStats, YogaBook::YogaBookError> {
        apply_seed(&self.services.database, TestFixtures::new().seed_data(), TEST_SCRYPT_LOG_N).await
    }

    /// Sign in with a fixture account
    pub async fn sign_in(&self, email: &str) -> Result<User, YogaBook::YogaBookError> {
        self.services.auth_service.login(email, TEST_PASSWORD).await
    }

    /// Register a fresh account; registration also signs it in
    pub async fn register(&self, name: &str, email: &str, role: Role) -> Result<User, YogaBook::YogaBookError> {
        self.services.auth_service.register(RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: TEST_PASSWORD.to_string(),
            confirm_password: TEST_PASSWORD.to_string(),
            role,
            phone: None,
        }).await
    }

    /// Clean up all test data
    pub async fn cleanup(&self) {
        self.services.auth_service.logout();
        self.store.clear().await;
    }
}
