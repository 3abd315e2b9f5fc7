//! Integration tests for registration and login.

mod common;

use crate::common::{create_organizer, create_stallholder, TestHarness, TEST_PASSWORD};
use server_core::common::{DomainError, ValidationCode};
use server_core::domains::profiles::models::organizer_profile::OrganizerProfile;
use server_core::domains::profiles::models::stallholder_profile::{
    ProfileReviewStatus, StallholderProfile,
};
use server_core::domains::users::actions::{authenticate_user, register_user};
use server_core::domains::users::models::user::{User, UserRole};
use test_context::test_context;

#[test_context(TestHarness)]
#[tokio::test]
async fn register_stallholder_creates_empty_profile(ctx: &TestHarness) {
    let user = create_stallholder(&ctx.db_pool).await.unwrap();

    let profile = StallholderProfile::find_by_user(user.id, &ctx.db_pool)
        .await
        .unwrap()
        .expect("profile should exist after registration");
    assert_eq!(profile.business_name, "");
    assert_eq!(profile.review_status, ProfileReviewStatus::Pending);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn registered_rows_get_time_ordered_ids(ctx: &TestHarness) {
    let user = create_stallholder(&ctx.db_pool).await.unwrap();
    let profile = StallholderProfile::find_by_user(user.id, &ctx.db_pool)
        .await
        .unwrap()
        .expect("profile should exist after registration");

    // Stored ids come from the application, not a database default, so
    // they are sortable v7 UUIDs.
    assert_eq!(user.id.as_uuid().get_version_num(), 7);
    assert_eq!(profile.id.as_uuid().get_version_num(), 7);

    let second = create_stallholder(&ctx.db_pool).await.unwrap();
    assert!(second.id.as_uuid() > user.id.as_uuid());
}

#[test_context(TestHarness)]
#[tokio::test]
async fn register_organizer_creates_empty_profile(ctx: &TestHarness) {
    let user = create_organizer(&ctx.db_pool).await.unwrap();

    let profile = OrganizerProfile::find_by_user(user.id, &ctx.db_pool)
        .await
        .unwrap()
        .expect("profile should exist after registration");
    assert_eq!(profile.organization_name, "");
}

#[test_context(TestHarness)]
#[tokio::test]
async fn duplicate_email_is_rejected(ctx: &TestHarness) {
    let email = crate::common::unique_email("dup");
    register_user(&email, TEST_PASSWORD, UserRole::Stallholder, false, &ctx.db_pool)
        .await
        .unwrap();

    let err = register_user(&email, TEST_PASSWORD, UserRole::Organizer, false, &ctx.db_pool)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Invalid(ValidationCode::EmailExists)
    ));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn admin_registration_is_gated(ctx: &TestHarness) {
    let email = crate::common::unique_email("admin-gate");
    let err = register_user(&email, TEST_PASSWORD, UserRole::Admin, false, &ctx.db_pool)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Invalid(ValidationCode::AdminRegistrationNotAllowed)
    ));

    // The same call succeeds through the privileged path
    let admin = register_user(&email, TEST_PASSWORD, UserRole::Admin, true, &ctx.db_pool)
        .await
        .unwrap();
    assert_eq!(admin.role, UserRole::Admin);
    assert!(User::admin_exists(&ctx.db_pool).await.unwrap());
}

#[test_context(TestHarness)]
#[tokio::test]
async fn password_length_is_validated(ctx: &TestHarness) {
    let err = register_user(
        &crate::common::unique_email("shortpw"),
        "short",
        UserRole::Stallholder,
        false,
        &ctx.db_pool,
    )
    .await
    .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Invalid(ValidationCode::PasswordTooShort)
    ));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn login_succeeds_and_stamps_last_login(ctx: &TestHarness) {
    let user = create_stallholder(&ctx.db_pool).await.unwrap();
    assert!(user.last_login_at.is_none());

    let logged_in = authenticate_user(&user.email, TEST_PASSWORD, &ctx.db_pool)
        .await
        .unwrap();
    assert_eq!(logged_in.id, user.id);
    assert!(logged_in.last_login_at.is_some());
}

#[test_context(TestHarness)]
#[tokio::test]
async fn wrong_password_and_unknown_email_look_identical(ctx: &TestHarness) {
    let user = create_stallholder(&ctx.db_pool).await.unwrap();

    let err = authenticate_user(&user.email, "wrong-password", &ctx.db_pool)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Invalid(ValidationCode::InvalidCredentials)
    ));

    let err = authenticate_user("nobody@test.example", TEST_PASSWORD, &ctx.db_pool)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Invalid(ValidationCode::InvalidCredentials)
    ));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn deactivated_account_cannot_log_in(ctx: &TestHarness) {
    let user = create_stallholder(&ctx.db_pool).await.unwrap();
    User::set_active(user.id, false, &ctx.db_pool).await.unwrap();

    let err = authenticate_user(&user.email, TEST_PASSWORD, &ctx.db_pool)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Invalid(ValidationCode::InactiveAccount)
    ));
}
