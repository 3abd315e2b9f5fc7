//! Integration tests for per-application message rooms.

mod common;

use crate::common::{
    create_admin, create_application, create_open_event, create_organizer, create_stallholder,
    TestHarness,
};
use server_core::common::{AuthzCode, DomainError, ValidationCode};
use server_core::domains::applications::actions::{cancel_application, decide_application};
use server_core::domains::messages::actions::{open_room, send_message};
use server_core::domains::messages::models::message::Message;
use server_core::domains::notifications::models::notification::{
    Notification, NotificationEvent,
};
use test_context::test_context;

#[test_context(TestHarness)]
#[tokio::test]
async fn messages_flow_between_participants(ctx: &TestHarness) {
    let organizer = create_organizer(&ctx.db_pool).await.unwrap();
    let stallholder = create_stallholder(&ctx.db_pool).await.unwrap();
    let event = create_open_event(&ctx.db_pool, &organizer, "Chatty")
        .await
        .unwrap();
    let application = create_application(&ctx.db_pool, &stallholder, &event)
        .await
        .unwrap();
    let application = decide_application(&organizer, application.id, true, &ctx.db_pool)
        .await
        .unwrap();

    send_message(&application, &stallholder, "When can we set up?", &ctx.db_pool)
        .await
        .unwrap();
    send_message(&application, &organizer, "From 7am on the day.", &ctx.db_pool)
        .await
        .unwrap();

    let messages = Message::list_for_application(application.id, &ctx.db_pool)
        .await
        .unwrap();
    assert_eq!(messages.len(), 2);
    // Chronological order
    assert_eq!(messages[0].sender_id, stallholder.id);
    assert_eq!(messages[1].sender_id, organizer.id);

    // Each side was notified about the other's message
    let organizer_notifications = Notification::list_for_user(organizer.id, &ctx.db_pool)
        .await
        .unwrap();
    assert!(organizer_notifications
        .iter()
        .any(|n| n.event_type == NotificationEvent::MessageReceived));
    let stallholder_notifications = Notification::list_for_user(stallholder.id, &ctx.db_pool)
        .await
        .unwrap();
    assert!(stallholder_notifications
        .iter()
        .any(|n| n.event_type == NotificationEvent::MessageReceived));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn room_opens_only_after_approval(ctx: &TestHarness) {
    let organizer = create_organizer(&ctx.db_pool).await.unwrap();
    let stallholder = create_stallholder(&ctx.db_pool).await.unwrap();
    let event = create_open_event(&ctx.db_pool, &organizer, "Not yet")
        .await
        .unwrap();
    let application = create_application(&ctx.db_pool, &stallholder, &event)
        .await
        .unwrap();

    let err = send_message(&application, &stallholder, "hello?", &ctx.db_pool)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Invalid(ValidationCode::ApplicationNotApproved)
    ));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn cancelled_room_hides_its_history(ctx: &TestHarness) {
    let organizer = create_organizer(&ctx.db_pool).await.unwrap();
    let stallholder = create_stallholder(&ctx.db_pool).await.unwrap();
    let event = create_open_event(&ctx.db_pool, &organizer, "Short-lived")
        .await
        .unwrap();
    let application = create_application(&ctx.db_pool, &stallholder, &event)
        .await
        .unwrap();
    let application = decide_application(&organizer, application.id, true, &ctx.db_pool)
        .await
        .unwrap();

    send_message(&application, &stallholder, "see you there", &ctx.db_pool)
        .await
        .unwrap();
    cancel_application(&stallholder, application.id, &ctx.db_pool)
        .await
        .unwrap();

    // Cancelling closes the room for both participants, even though
    // messages already exist.
    for participant in [&stallholder, &organizer] {
        let err = open_room(participant, application.id, &ctx.db_pool)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DomainError::Invalid(ValidationCode::ApplicationNotApproved)
        ));
    }
}

#[test_context(TestHarness)]
#[tokio::test]
async fn rooms_reject_non_participants(ctx: &TestHarness) {
    let organizer = create_organizer(&ctx.db_pool).await.unwrap();
    let stallholder = create_stallholder(&ctx.db_pool).await.unwrap();
    let admin = create_admin(&ctx.db_pool).await.unwrap();
    let other_stallholder = create_stallholder(&ctx.db_pool).await.unwrap();
    let event = create_open_event(&ctx.db_pool, &organizer, "Private")
        .await
        .unwrap();
    let application = create_application(&ctx.db_pool, &stallholder, &event)
        .await
        .unwrap();
    decide_application(&organizer, application.id, true, &ctx.db_pool)
        .await
        .unwrap();

    for outsider in [&admin, &other_stallholder] {
        let err = open_room(outsider, application.id, &ctx.db_pool)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DomainError::Unauthorized(AuthzCode::Forbidden)
        ));
    }

    // Participants still get in.
    open_room(&stallholder, application.id, &ctx.db_pool)
        .await
        .unwrap();
    open_room(&organizer, application.id, &ctx.db_pool)
        .await
        .unwrap();
}

#[test_context(TestHarness)]
#[tokio::test]
async fn empty_messages_are_rejected(ctx: &TestHarness) {
    let organizer = create_organizer(&ctx.db_pool).await.unwrap();
    let stallholder = create_stallholder(&ctx.db_pool).await.unwrap();
    let event = create_open_event(&ctx.db_pool, &organizer, "Empty")
        .await
        .unwrap();
    let application = create_application(&ctx.db_pool, &stallholder, &event)
        .await
        .unwrap();
    let application = decide_application(&organizer, application.id, true, &ctx.db_pool)
        .await
        .unwrap();

    let err = send_message(&application, &stallholder, "", &ctx.db_pool)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Invalid(ValidationCode::ContentRequired)
    ));
}
