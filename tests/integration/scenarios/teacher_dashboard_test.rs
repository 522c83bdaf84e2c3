//! Teacher dashboard scenario tests

use chrono::Duration;
use serial_test::serial;
use YogaBook::models::{ItemKind, Role};
use YogaBook::presentation::{render_teacher_page, ViewState};

use crate::fixtures::reference_now;
use crate::helpers::{create_test_class_request, create_test_event_request};
use crate::integration::{setup_integration_test, teardown_integration_test};

#[tokio::test]
#[serial]
async fn test_fixture_teacher_dashboard() {
    let ctx = setup_integration_test().await.expect("Failed to setup integration test");

    let maya = ctx.sign_in("t-maya@test.yogabook.dev").await.unwrap();
    let dashboard = ctx.services.dashboard_service
        .teacher_dashboard(&maya.id, reference_now())
        .await
        .expect("Dashboard should load");

    let upcoming: Vec<(ItemKind, &str)> = dashboard.upcoming
        .iter()
        .map(|u| (u.kind, u.data.id()))
        .collect();
    assert_eq!(upcoming, vec![
        (ItemKind::Class, "k-flow"),
        (ItemKind::Event, "e-moon"),
        (ItemKind::Course, "c-found"),
    ]);

    // b1, b2 and b4 fall within the last week; b3 and b5 are older
    assert_eq!(dashboard.recent_bookings_count, 3);
    assert_eq!(dashboard.total_students_count, 2);

    let stats = &dashboard.stats;
    assert_eq!((stats.class_count, stats.course_count, stats.event_count), (2, 1, 1));
    assert_eq!(stats.total_revenue, 36.0);
    assert_eq!(stats.pending_revenue, 120.0);
    // 20%, 13%, 8% and 0%
    assert_eq!(stats.average_fill, 10);

    teardown_integration_test(ctx).await;
}

#[tokio::test]
#[serial]
async fn test_teacher_without_items() {
    let ctx = setup_integration_test().await.expect("Failed to setup integration test");

    let fresh = ctx.register("Fresh Teacher", "fresh@test.yogabook.dev", Role::Teacher).await.unwrap();
    let dashboard = ctx.services.dashboard_service.teacher_dashboard(&fresh.id, reference_now()).await.unwrap();

    assert!(dashboard.upcoming.is_empty());
    assert_eq!(dashboard.recent_bookings_count, 0);
    assert_eq!(dashboard.total_students_count, 0);
    assert_eq!(dashboard.stats.average_fill, 0);

    teardown_integration_test(ctx).await;
}

#[tokio::test]
#[serial]
async fn test_upcoming_is_capped_at_five() {
    let ctx = setup_integration_test().await.expect("Failed to setup integration test");

    let leo = ctx.sign_in("t-leo@test.yogabook.dev").await.unwrap();
    let today = reference_now().date_naive();
    for offset in (1..=4).rev() {
        ctx.services.class_service
            .create(&leo, create_test_class_request(&format!("Led class {}", offset), today + Duration::days(offset), 10))
            .await
            .unwrap();
    }
    ctx.services.event_service
        .create(&leo, create_test_event_request("Workshop", today + Duration::days(30), 40.0))
        .await
        .unwrap();
    ctx.services.event_service
        .create(&leo, create_test_event_request("Retreat", today + Duration::days(60), 300.0))
        .await
        .unwrap();

    let dashboard = ctx.services.dashboard_service.teacher_dashboard(&leo.id, reference_now()).await.unwrap();
    assert_eq!(dashboard.upcoming.len(), 5);
    assert!(dashboard.upcoming.windows(2).all(|w| w[0].date <= w[1].date));
    assert!(dashboard.upcoming.iter().all(|u| u.data.name() != "Retreat"));

    teardown_integration_test(ctx).await;
}

#[tokio::test]
#[serial]
async fn test_new_booking_shows_up_on_dashboard() {
    let ctx = setup_integration_test().await.expect("Failed to setup integration test");

    let ana = ctx.sign_in("s-ana@test.yogabook.dev").await.unwrap();
    ctx.services.booking_service
        .book(&ana, ItemKind::Class, "k-mysore", None, reference_now())
        .await
        .unwrap();

    let dashboard = ctx.services.dashboard_service.teacher_dashboard("t-leo", reference_now()).await.unwrap();
    assert_eq!(dashboard.recent_bookings_count, 1);
    assert_eq!(dashboard.total_students_count, 1);
    assert_eq!(dashboard.upcoming[0].data.booked(), 1);
    assert_eq!(dashboard.stats.pending_revenue, 18.0);

    teardown_integration_test(ctx).await;
}

#[tokio::test]
#[serial]
async fn test_rendered_teacher_page() {
    let ctx = setup_integration_test().await.expect("Failed to setup integration test");

    let maya = ctx.sign_in("t-maya@test.yogabook.dev").await.unwrap();
    let state = ViewState::from_result(
        ctx.services.dashboard_service.teacher_dashboard(&maya.id, reference_now()).await
    );
    let page = render_teacher_page(&maya.name, &state);

    assert!(page.contains("Welcome back, Maya Patel!"));
    assert!(page.contains("3 bookings in the last week"));
    assert!(page.contains("2 students in total"));
    assert!(page.contains("Morning Flow"));
    assert!(page.contains("Revenue $36.00"));

    teardown_integration_test(ctx).await;
}
