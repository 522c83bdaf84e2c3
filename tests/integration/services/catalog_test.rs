//! Catalog provider integration tests

use assert_matches::assert_matches;
use chrono::NaiveDate;
use serial_test::serial;
use YogaBook::models::{CatalogFilter, Pagination, UpdateClassRequest, UpdateCourseRequest};
use YogaBook::YogaBookError;

use crate::helpers::{create_test_class_request, create_test_course_request};
use crate::integration::{setup_integration_test, teardown_integration_test};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
#[serial]
async fn test_list_filters_by_teacher_and_date() {
    let ctx = setup_integration_test().await.expect("Failed to setup integration test");
    let classes = &ctx.services.class_service;

    let all = classes.list(&CatalogFilter::default(), None).await.unwrap();
    assert_eq!(all.total, 3);
    // insertion order is kept
    let ids: Vec<&str> = all.data.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["k-flow", "k-yin", "k-mysore"]);

    let mayas = classes.list(&CatalogFilter::for_teacher("t-maya"), None).await.unwrap();
    assert_eq!(mayas.total, 2);

    let upcoming = classes
        .list(&CatalogFilter::for_teacher("t-maya").from_date(date(2025, 3, 1)), None)
        .await
        .unwrap();
    assert_eq!(upcoming.total, 1);
    assert_eq!(upcoming.data[0].id, "k-flow");

    teardown_integration_test(ctx).await;
}

#[tokio::test]
#[serial]
async fn test_course_date_filter_uses_start_date() {
    let ctx = setup_integration_test().await.expect("Failed to setup integration test");
    let courses = &ctx.services.course_service;

    let from_june = courses.list(&CatalogFilter::default().from_date(date(2025, 6, 1)), None).await.unwrap();
    assert_eq!(from_june.total, 1);

    let after_start = courses.list(&CatalogFilter::default().from_date(date(2025, 6, 2)), None).await.unwrap();
    assert_eq!(after_start.total, 0);

    teardown_integration_test(ctx).await;
}

#[tokio::test]
#[serial]
async fn test_pagination() {
    let ctx = setup_integration_test().await.expect("Failed to setup integration test");
    let classes = &ctx.services.class_service;

    let page = classes.list(&CatalogFilter::default(), Some(Pagination::new(2, 2))).await.unwrap();
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.total, 3);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.page, 2);

    let beyond = classes.list(&CatalogFilter::default(), Some(Pagination::new(5, 2))).await.unwrap();
    assert!(beyond.data.is_empty());
    assert_eq!(beyond.total, 3);

    teardown_integration_test(ctx).await;
}

#[tokio::test]
#[serial]
async fn test_teacher_creates_updates_and_deletes() {
    let ctx = setup_integration_test().await.expect("Failed to setup integration test");
    let classes = &ctx.services.class_service;

    let maya = ctx.sign_in("t-maya@test.yogabook.dev").await.unwrap();
    let created = classes
        .create(&maya, create_test_class_request("Lunchtime Flow", date(2025, 3, 4), 8))
        .await
        .expect("Teacher should create a class");
    assert_eq!(created.teacher_id, "t-maya");
    assert_eq!(created.booked_count, 0);

    let patched = classes
        .update(&maya, &created.id, UpdateClassRequest { capacity: Some(12), ..Default::default() })
        .await
        .unwrap();
    assert_eq!(patched.capacity, 12);
    assert_eq!(patched.name, "Lunchtime Flow");

    classes.delete(&maya, &created.id).await.unwrap();
    assert_matches!(classes.get_by_id(&created.id).await, Err(YogaBookError::ItemNotFound { .. }));
    assert_matches!(classes.delete(&maya, &created.id).await, Err(YogaBookError::ItemNotFound { .. }));

    teardown_integration_test(ctx).await;
}

#[tokio::test]
#[serial]
async fn test_validation_and_ownership() {
    let ctx = setup_integration_test().await.expect("Failed to setup integration test");
    let courses = &ctx.services.course_service;
    let classes = &ctx.services.class_service;

    let leo = ctx.sign_in("t-leo@test.yogabook.dev").await.unwrap();
    let sam = ctx.services.database.users.find_by_id("s-sam").await.unwrap().unwrap();

    assert_matches!(
        courses.create(&sam, create_test_course_request("Sneaky", date(2025, 5, 1), 4)).await,
        Err(YogaBookError::PermissionDenied(_))
    );
    assert_matches!(
        courses.update(&leo, "c-found", UpdateCourseRequest { weeks: Some(8), ..Default::default() }).await,
        Err(YogaBookError::PermissionDenied(_))
    );

    let mut backwards = create_test_course_request("Backwards", date(2025, 5, 1), 4);
    backwards.end_date = date(2025, 4, 1);
    assert_matches!(courses.create(&leo, backwards).await, Err(YogaBookError::Validation(_)));

    let maya = ctx.sign_in("t-maya@test.yogabook.dev").await.unwrap();
    // k-flow already has two places taken
    assert_matches!(
        classes.update(&maya, "k-flow", UpdateClassRequest { capacity: Some(1), ..Default::default() }).await,
        Err(YogaBookError::Validation(_))
    );

    teardown_integration_test(ctx).await;
}
