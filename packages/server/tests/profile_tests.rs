//! Integration tests for stallholder profile editing.

mod common;

use crate::common::{create_organizer, create_stallholder, TestHarness};
use server_core::common::{AuthzCode, DomainError};
use server_core::domains::profiles::actions::update_stallholder_profile;
use test_context::test_context;

#[test_context(TestHarness)]
#[tokio::test]
async fn stallholder_can_edit_their_profile(ctx: &TestHarness) {
    let stallholder = create_stallholder(&ctx.db_pool).await.unwrap();

    let profile = update_stallholder_profile(
        &stallholder,
        "The Cheese Stall",
        "food",
        "Small-batch cheeses.",
        Some("https://cheese.example"),
        None,
        &ctx.db_pool,
    )
    .await
    .unwrap();
    assert_eq!(profile.business_name, "The Cheese Stall");
    assert_eq!(profile.genre, "food");
    assert_eq!(profile.website_url.as_deref(), Some("https://cheese.example"));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn other_roles_cannot_edit_stallholder_profiles(ctx: &TestHarness) {
    let organizer = create_organizer(&ctx.db_pool).await.unwrap();

    let err = update_stallholder_profile(
        &organizer,
        "Not a stall",
        "",
        "",
        None,
        None,
        &ctx.db_pool,
    )
    .await
    .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Unauthorized(AuthzCode::RoleRequiredStallholder)
    ));
}
