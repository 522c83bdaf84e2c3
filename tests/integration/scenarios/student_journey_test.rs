//! Student journey scenario tests
//!
//! A student signs in, looks at their bookings, books and cancels, and the
//! bookings page follows along.

use chrono::{Duration, TimeZone, Utc};
use serial_test::serial;
use YogaBook::models::{BookingStatus, ItemKind};
use YogaBook::presentation::{render_student_page, ViewState};

use crate::fixtures::reference_now;
use crate::integration::{setup_integration_test, teardown_integration_test};

#[tokio::test]
#[serial]
async fn test_fixture_student_view() {
    let ctx = setup_integration_test().await.expect("Failed to setup integration test");

    let sam = ctx.sign_in("s-sam@test.yogabook.dev").await.unwrap();
    let (view, summary) = ctx.services.dashboard_service
        .student_overview(&sam.id, reference_now())
        .await
        .expect("Student view should load");

    let upcoming: Vec<&str> = view.upcoming.iter().map(|b| b.booking.id.as_str()).collect();
    let past: Vec<&str> = view.past.iter().map(|b| b.booking.id.as_str()).collect();
    assert_eq!(upcoming, vec!["b1", "b2"]);
    assert_eq!(past, vec!["b3"]);

    assert_eq!(summary.upcoming_count, 2);
    assert_eq!(summary.past_count, 1);
    assert_eq!(summary.total_paid, 36.0);
    assert_eq!(summary.outstanding, 120.0);

    teardown_integration_test(ctx).await;
}

#[tokio::test]
#[serial]
async fn test_course_booking_moves_to_past_when_cancelled() {
    let ctx = setup_integration_test().await.expect("Failed to setup integration test");
    let dashboard = &ctx.services.dashboard_service;

    let sam = ctx.sign_in("s-sam@test.yogabook.dev").await.unwrap();
    let before = dashboard.student_bookings(&sam.id, reference_now()).await.unwrap();
    assert!(before.upcoming.iter().any(|b| b.booking.id == "b2"));

    ctx.services.booking_service.cancel(&sam, "b2").await.unwrap();

    let after = dashboard.student_bookings(&sam.id, reference_now()).await.unwrap();
    assert!(after.upcoming.iter().all(|b| b.booking.id != "b2"));
    let moved = after.past.iter().find(|b| b.booking.id == "b2").expect("Cancelled booking should be past");
    assert_eq!(moved.booking.status, BookingStatus::Cancelled);

    teardown_integration_test(ctx).await;
}

#[tokio::test]
#[serial]
async fn test_new_booking_is_listed_first() {
    let ctx = setup_integration_test().await.expect("Failed to setup integration test");

    let sam = ctx.sign_in("s-sam@test.yogabook.dev").await.unwrap();
    ctx.services.booking_service
        .book(&sam, ItemKind::Event, "e-moon", None, reference_now())
        .await
        .unwrap();

    let view = ctx.services.dashboard_service.student_bookings(&sam.id, reference_now()).await.unwrap();
    assert_eq!(view.upcoming.len(), 3);
    assert_eq!(view.upcoming[0].item.id(), "e-moon");

    teardown_integration_test(ctx).await;
}

#[tokio::test]
#[serial]
async fn test_time_passing_moves_bookings_to_past() {
    let ctx = setup_integration_test().await.expect("Failed to setup integration test");

    // k-flow runs on Mar 3; the course starts on Jun 1
    let later = Utc.with_ymd_and_hms(2025, 3, 4, 8, 0, 0).unwrap();
    let view = ctx.services.dashboard_service.student_bookings("s-sam", later).await.unwrap();

    let upcoming: Vec<&str> = view.upcoming.iter().map(|b| b.booking.id.as_str()).collect();
    assert_eq!(upcoming, vec!["b2"]);
    assert_eq!(view.past.len(), 2);

    let much_later = later + Duration::days(365);
    let view = ctx.services.dashboard_service.student_bookings("s-sam", much_later).await.unwrap();
    assert!(view.upcoming.is_empty());

    teardown_integration_test(ctx).await;
}

#[tokio::test]
#[serial]
async fn test_rendered_student_page() {
    let ctx = setup_integration_test().await.expect("Failed to setup integration test");

    let sam = ctx.sign_in("s-sam@test.yogabook.dev").await.unwrap();
    let state = ViewState::from_result(
        ctx.services.dashboard_service.student_overview(&sam.id, reference_now()).await
    );
    let page = render_student_page(&sam.name, &state);

    assert!(page.contains("Hi Sam Rivera!"));
    assert!(page.contains("📅 Upcoming (2)"));
    assert!(page.contains("Foundations"));
    assert!(page.contains("$120.00 outstanding"));

    teardown_integration_test(ctx).await;
}

#[tokio::test]
#[serial]
async fn test_student_without_bookings() {
    let ctx = setup_integration_test().await.expect("Failed to setup integration test");

    let newcomer = ctx
        .register("Newcomer", "newcomer@test.yogabook.dev", YogaBook::models::Role::Student)
        .await
        .unwrap();
    let (view, summary) = ctx.services.dashboard_service.student_overview(&newcomer.id, reference_now()).await.unwrap();

    assert!(view.is_empty());
    assert_eq!(summary.total_paid, 0.0);

    teardown_integration_test(ctx).await;
}
