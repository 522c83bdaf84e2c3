//! Integration tests module
//!
//! Integration tests for YogaBook, organized by service and by end-to-end
//! scenario.

pub mod scenarios;
pub mod services;

use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize logging for tests (called once)
pub fn init_test_logging() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .try_init();
    });
}

/// Common setup function for integration tests: fixtures loaded, nobody signed in
pub async fn setup_integration_test() -> Result<crate::helpers::TestContext, Box<dyn std::error::Error + Send + Sync>> {
    init_test_logging();

    let config = crate::helpers::TestConfig {
        load_fixtures: true,
        auto_confirm: false,
    };

    crate::helpers::TestContext::new_with_config(config).await
}

/// Common teardown function for integration tests
pub async fn teardown_integration_test(ctx: crate::helpers::TestContext) {
    ctx.cleanup().await;
}
