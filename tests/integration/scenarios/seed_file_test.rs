//! Seeding from a TOML file on disk

use chrono::{TimeZone, Utc};
use serial_test::serial;
use YogaBook::database::seed::{apply_seed, demo_seed, load_seed_file};
use YogaBook::YogaBookError;

use crate::fixtures::SEED_TOML;
use crate::helpers::{TestContext, TEST_SCRYPT_LOG_N};

#[tokio::test]
#[serial]
async fn test_seed_file_round_trip_to_dashboard() {
    let ctx = TestContext::new().await.expect("Failed to create test context");

    let path = ctx.temp_dir.path().join("seed.toml");
    std::fs::write(&path, SEED_TOML).unwrap();

    let data = load_seed_file(&path).await.expect("Seed file should parse");
    let stats = apply_seed(&ctx.services.database, data, TEST_SCRYPT_LOG_N).await.unwrap();
    assert_eq!(stats.users, 2);
    assert_eq!(stats.classes, 1);
    assert_eq!(stats.bookings, 1);

    let teacher = ctx.sign_in("file-teacher@test.yogabook.dev").await.expect("Seeded password should work");
    assert_eq!(teacher.profile.specialties, vec!["Hatha"]);

    let now = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
    let dashboard = ctx.services.dashboard_service.teacher_dashboard(&teacher.id, now).await.unwrap();
    assert_eq!(dashboard.upcoming.len(), 1);
    assert_eq!(dashboard.total_students_count, 1);
    assert_eq!(dashboard.recent_bookings_count, 1);

    ctx.cleanup().await;
}

#[tokio::test]
#[serial]
async fn test_missing_seed_file() {
    let ctx = TestContext::new().await.expect("Failed to create test context");

    let result = load_seed_file(ctx.temp_dir.path().join("absent.toml")).await;
    assert!(matches!(result, Err(YogaBookError::Io(_))));

    ctx.cleanup().await;
}

#[tokio::test]
#[serial]
async fn test_demo_seed_signs_in_demo_teacher() {
    let ctx = TestContext::new().await.expect("Failed to create test context");

    let demo = &ctx.settings.demo;
    apply_seed(&ctx.services.database, demo_seed(Utc::now(), &demo.password), TEST_SCRYPT_LOG_N)
        .await
        .unwrap();

    let user = ctx.services.auth_service.login(&demo.email, &demo.password).await.unwrap();
    assert!(user.is_teacher());

    let dashboard = ctx.services.dashboard_service.teacher_dashboard(&user.id, Utc::now()).await.unwrap();
    assert!(!dashboard.upcoming.is_empty());
    assert!(dashboard.total_students_count > 0);

    let health = ctx.services.health_check().await;
    assert!(health.is_healthy());
    assert!(health.get_issues().is_empty());

    ctx.cleanup().await;
}
