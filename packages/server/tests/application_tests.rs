//! Integration tests for stall applications: apply, decide, cancel.

mod common;

use crate::common::{
    create_application, create_draft_event, create_open_event, create_organizer,
    create_stallholder, TestHarness,
};
use server_core::common::{AuthzCode, DomainError, ValidationCode};
use server_core::domains::applications::actions::{
    apply_to_event, cancel_application, decide_application,
};
use server_core::domains::applications::models::application::ApplicationStatus;
use server_core::domains::notifications::models::notification::{
    Notification, NotificationEvent,
};
use test_context::test_context;

#[test_context(TestHarness)]
#[tokio::test]
async fn apply_creates_pending_application_and_notifies_organizer(ctx: &TestHarness) {
    let organizer = create_organizer(&ctx.db_pool).await.unwrap();
    let stallholder = create_stallholder(&ctx.db_pool).await.unwrap();
    let event = create_open_event(&ctx.db_pool, &organizer, "Open Market")
        .await
        .unwrap();

    let application = apply_to_event(&stallholder, event.id, Some("hello"), &ctx.db_pool)
        .await
        .unwrap();
    assert_eq!(application.status, ApplicationStatus::Pending);
    assert_eq!(application.memo.as_deref(), Some("hello"));

    let notifications = Notification::list_for_user(organizer.id, &ctx.db_pool)
        .await
        .unwrap();
    assert!(notifications
        .iter()
        .any(|n| n.event_type == NotificationEvent::ApplicationSubmitted));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn cannot_apply_to_unopened_event(ctx: &TestHarness) {
    let organizer = create_organizer(&ctx.db_pool).await.unwrap();
    let stallholder = create_stallholder(&ctx.db_pool).await.unwrap();
    let event = create_draft_event(&ctx.db_pool, &organizer, "Still a draft")
        .await
        .unwrap();

    let err = apply_to_event(&stallholder, event.id, None, &ctx.db_pool)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Invalid(ValidationCode::EventNotOpen)
    ));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn duplicate_application_is_rejected(ctx: &TestHarness) {
    let organizer = create_organizer(&ctx.db_pool).await.unwrap();
    let stallholder = create_stallholder(&ctx.db_pool).await.unwrap();
    let event = create_open_event(&ctx.db_pool, &organizer, "One per stall")
        .await
        .unwrap();

    create_application(&ctx.db_pool, &stallholder, &event)
        .await
        .unwrap();
    let err = apply_to_event(&stallholder, event.id, None, &ctx.db_pool)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Invalid(ValidationCode::ApplicationExists)
    ));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn organizer_role_cannot_apply(ctx: &TestHarness) {
    let organizer = create_organizer(&ctx.db_pool).await.unwrap();
    let event = create_open_event(&ctx.db_pool, &organizer, "Organizer applying")
        .await
        .unwrap();

    let err = apply_to_event(&organizer, event.id, None, &ctx.db_pool)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Unauthorized(AuthzCode::RoleRequiredStallholder)
    ));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn approval_stamps_decision_and_notifies_stallholder(ctx: &TestHarness) {
    let organizer = create_organizer(&ctx.db_pool).await.unwrap();
    let stallholder = create_stallholder(&ctx.db_pool).await.unwrap();
    let event = create_open_event(&ctx.db_pool, &organizer, "Decide")
        .await
        .unwrap();
    let application = create_application(&ctx.db_pool, &stallholder, &event)
        .await
        .unwrap();

    let application = decide_application(&organizer, application.id, true, &ctx.db_pool)
        .await
        .unwrap();
    assert_eq!(application.status, ApplicationStatus::Approved);
    assert!(application.decided_at.is_some());

    let notifications = Notification::list_for_user(stallholder.id, &ctx.db_pool)
        .await
        .unwrap();
    assert!(notifications
        .iter()
        .any(|n| n.event_type == NotificationEvent::ApplicationApproved));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn decisions_are_final(ctx: &TestHarness) {
    let organizer = create_organizer(&ctx.db_pool).await.unwrap();
    let stallholder = create_stallholder(&ctx.db_pool).await.unwrap();
    let event = create_open_event(&ctx.db_pool, &organizer, "Final")
        .await
        .unwrap();
    let application = create_application(&ctx.db_pool, &stallholder, &event)
        .await
        .unwrap();

    decide_application(&organizer, application.id, false, &ctx.db_pool)
        .await
        .unwrap();
    let err = decide_application(&organizer, application.id, true, &ctx.db_pool)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Invalid(ValidationCode::ApplicationAlreadyDecided)
    ));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn only_the_events_organizer_can_decide(ctx: &TestHarness) {
    let organizer = create_organizer(&ctx.db_pool).await.unwrap();
    let other = create_organizer(&ctx.db_pool).await.unwrap();
    let stallholder = create_stallholder(&ctx.db_pool).await.unwrap();
    let event = create_open_event(&ctx.db_pool, &organizer, "Not yours")
        .await
        .unwrap();
    let application = create_application(&ctx.db_pool, &stallholder, &event)
        .await
        .unwrap();

    let err = decide_application(&other, application.id, true, &ctx.db_pool)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Unauthorized(AuthzCode::EventNotOwned)
    ));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn cancel_works_for_pending_and_approved_only(ctx: &TestHarness) {
    let organizer = create_organizer(&ctx.db_pool).await.unwrap();
    let stallholder = create_stallholder(&ctx.db_pool).await.unwrap();
    let event = create_open_event(&ctx.db_pool, &organizer, "Cancelable")
        .await
        .unwrap();
    let application = create_application(&ctx.db_pool, &stallholder, &event)
        .await
        .unwrap();

    let cancelled = cancel_application(&stallholder, application.id, &ctx.db_pool)
        .await
        .unwrap();
    assert_eq!(cancelled.status, ApplicationStatus::Cancelled);

    // Cancelled is terminal
    let err = cancel_application(&stallholder, application.id, &ctx.db_pool)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Invalid(ValidationCode::ApplicationNotCancellable)
    ));

    let notifications = Notification::list_for_user(organizer.id, &ctx.db_pool)
        .await
        .unwrap();
    assert!(notifications
        .iter()
        .any(|n| n.event_type == NotificationEvent::ApplicationCancelled));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn rejected_application_cannot_be_cancelled(ctx: &TestHarness) {
    let organizer = create_organizer(&ctx.db_pool).await.unwrap();
    let stallholder = create_stallholder(&ctx.db_pool).await.unwrap();
    let event = create_open_event(&ctx.db_pool, &organizer, "Rejected stays")
        .await
        .unwrap();
    let application = create_application(&ctx.db_pool, &stallholder, &event)
        .await
        .unwrap();
    decide_application(&organizer, application.id, false, &ctx.db_pool)
        .await
        .unwrap();

    let err = cancel_application(&stallholder, application.id, &ctx.db_pool)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Invalid(ValidationCode::ApplicationNotCancellable)
    ));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn cancel_requires_ownership(ctx: &TestHarness) {
    let organizer = create_organizer(&ctx.db_pool).await.unwrap();
    let stallholder = create_stallholder(&ctx.db_pool).await.unwrap();
    let other = create_stallholder(&ctx.db_pool).await.unwrap();
    let event = create_open_event(&ctx.db_pool, &organizer, "Someone else's")
        .await
        .unwrap();
    let application = create_application(&ctx.db_pool, &stallholder, &event)
        .await
        .unwrap();

    let err = cancel_application(&other, application.id, &ctx.db_pool)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Unauthorized(AuthzCode::ApplicationNotOwned)
    ));
}
