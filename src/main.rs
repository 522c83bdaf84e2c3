//! YogaBook
//!
//! Main application entry point: seeds the store, signs in the demo account
//! and prints its dashboard.

use std::sync::Arc;
use chrono::Utc;
use tracing::{info, warn, error};

use YogaBook::{
    config::Settings,
    database::seed::{apply_seed, demo_seed, load_seed_file},
    models::Role,
    presentation::{render_student_page, render_teacher_page, ViewState},
    services::{MemorySessionStore, ServiceFactory},
    utils::logging,
    MemoryStore,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging; the guard flushes the log file on exit
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", YogaBook::info());

    let services = ServiceFactory::new(&settings, MemoryStore::new(), Arc::new(MemorySessionStore::new()));

    if settings.seed.enabled {
        let data = match settings.seed.path {
            Some(ref path) => {
                info!(path = %path, "Loading seed file...");
                load_seed_file(path).await?
            }
            None => demo_seed(Utc::now(), &settings.demo.password),
        };
        apply_seed(&services.database, data, settings.auth.scrypt_log_n).await?;
    } else {
        warn!("Seeding disabled, starting with an empty store");
    }

    let user = match services.auth_service.login(&settings.demo.email, &settings.demo.password).await {
        Ok(user) => user,
        Err(e) => {
            error!(error = %e, email = %settings.demo.email, "Demo sign-in failed");
            return Err(e.into());
        }
    };

    let health = services.health_check().await;
    for issue in health.get_issues() {
        warn!("{}", issue);
    }

    let now = Utc::now();
    let page = match user.role {
        Role::Student => {
            let state = ViewState::from_result(services.dashboard_service.student_overview(&user.id, now).await);
            render_student_page(&user.name, &state)
        }
        Role::Teacher => {
            let state = ViewState::from_result(services.dashboard_service.teacher_dashboard(&user.id, now).await);
            render_teacher_page(&user.name, &state)
        }
    };
    println!("{}", page);

    services.auth_service.logout();
    info!("{} has been shut down.", YogaBook::NAME);

    Ok(())
}
