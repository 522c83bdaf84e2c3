//! Identity store integration tests

use assert_matches::assert_matches;
use serial_test::serial;
use YogaBook::models::{Role, UpdateUserRequest};
use YogaBook::YogaBookError;

use crate::integration::{setup_integration_test, teardown_integration_test};

#[tokio::test]
#[serial]
async fn test_login_and_logout() {
    let ctx = setup_integration_test().await.expect("Failed to setup integration test");
    let auth = &ctx.services.auth_service;

    assert!(auth.current_user().is_none());

    let user = ctx.sign_in("t-maya@test.yogabook.dev").await.expect("Fixture login should work");
    assert_eq!(user.id, "t-maya");
    assert_eq!(auth.current_user().map(|u| u.id), Some("t-maya".to_string()));

    auth.logout();
    assert!(auth.current_user().is_none());
    assert_matches!(auth.require_user(), Err(YogaBookError::Authentication(_)));

    teardown_integration_test(ctx).await;
}

#[tokio::test]
#[serial]
async fn test_login_is_case_insensitive_on_email() {
    let ctx = setup_integration_test().await.expect("Failed to setup integration test");

    let user = ctx.sign_in("  S-SAM@Test.YogaBook.dev ").await.expect("Normalized email should match");
    assert_eq!(user.role, Role::Student);

    teardown_integration_test(ctx).await;
}

#[tokio::test]
#[serial]
async fn test_wrong_password_and_unknown_email_look_the_same() {
    let ctx = setup_integration_test().await.expect("Failed to setup integration test");
    let auth = &ctx.services.auth_service;

    let wrong = auth.login("t-maya@test.yogabook.dev", "not-the-password").await;
    let unknown = auth.login("nobody@test.yogabook.dev", "namaste123").await;

    match (wrong, unknown) {
        (Err(YogaBookError::Authentication(a)), Err(YogaBookError::Authentication(b))) => assert_eq!(a, b),
        other => panic!("Expected two authentication errors, got {:?}", other),
    }
    assert!(auth.current_user().is_none());

    teardown_integration_test(ctx).await;
}

#[tokio::test]
#[serial]
async fn test_register_rejects_taken_email() {
    let ctx = setup_integration_test().await.expect("Failed to setup integration test");

    let result = ctx.register("Another Sam", "s-sam@test.yogabook.dev", Role::Student).await;
    assert_matches!(result, Err(YogaBookError::Validation(_)));

    let fresh = ctx.register("Priya", "priya@test.yogabook.dev", Role::Student).await.expect("Registration should work");
    assert_eq!(ctx.services.auth_service.current_user(), Some(fresh));

    teardown_integration_test(ctx).await;
}

#[tokio::test]
#[serial]
async fn test_switch_role_only_changes_session() {
    let ctx = setup_integration_test().await.expect("Failed to setup integration test");
    let auth = &ctx.services.auth_service;

    ctx.sign_in("s-sam@test.yogabook.dev").await.unwrap();
    assert_matches!(auth.require_role(Role::Teacher), Err(YogaBookError::PermissionDenied(_)));

    let switched = auth.switch_role(Role::Teacher).unwrap();
    assert_eq!(switched.role, Role::Teacher);
    assert!(auth.require_role(Role::Teacher).is_ok());

    let stored = ctx.services.database.users.find_by_id("s-sam").await.unwrap().unwrap();
    assert_eq!(stored.role, Role::Student);

    teardown_integration_test(ctx).await;
}

#[tokio::test]
#[serial]
async fn test_update_profile_validates_and_persists() {
    let ctx = setup_integration_test().await.expect("Failed to setup integration test");
    let auth = &ctx.services.auth_service;

    ctx.sign_in("t-maya@test.yogabook.dev").await.unwrap();

    let bad = auth.update_profile(UpdateUserRequest {
        email: Some("not-an-email".to_string()),
        ..Default::default()
    }).await;
    assert_matches!(bad, Err(YogaBookError::Validation(_)));

    let updated = auth.update_profile(UpdateUserRequest {
        bio: Some("Teaching since 2012".to_string()),
        specialties: Some(vec!["Yin".to_string(), "yin".to_string(), "Restorative".to_string()]),
        ..Default::default()
    }).await.expect("Profile update should work");

    assert_eq!(updated.profile.bio.as_deref(), Some("Teaching since 2012"));
    assert_eq!(updated.profile.specialties, vec!["Yin", "Restorative"]);
    assert_eq!(auth.current_user().map(|u| u.profile), Some(updated.profile.clone()));

    teardown_integration_test(ctx).await;
}

#[tokio::test]
#[serial]
async fn test_role_override() {
    let ctx = setup_integration_test().await.expect("Failed to setup integration test");

    let forced = ctx.services.auth_service.clone().with_role_override(Role::Teacher);
    ctx.sign_in("s-ana@test.yogabook.dev").await.unwrap();

    assert_eq!(forced.current_user().map(|u| u.role), Some(Role::Teacher));
    assert_eq!(ctx.services.auth_service.current_user().map(|u| u.role), Some(Role::Student));

    teardown_integration_test(ctx).await;
}
