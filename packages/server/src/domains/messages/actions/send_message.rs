//! Send message action.

use sqlx::PgPool;
use tracing::info;

use crate::common::{DomainError, DomainResult, UserId, ValidationCode};
use crate::domains::applications::models::application::{Application, ApplicationStatus};
use crate::domains::events::models::event::Event;
use crate::domains::messages::models::message::Message;
use crate::domains::notifications::models::notification::{Notification, NotificationEvent};
use crate::domains::users::models::user::{User, UserRole};

/// Truncate the notification preview without splitting a UTF-8 char.
fn preview(content: &str) -> &str {
    match content.char_indices().nth(50) {
        Some((idx, _)) => &content[..idx],
        None => content,
    }
}

/// Send a message in an application's conversation.
///
/// Only works on approved applications, and the recipient is always the
/// sender's counterpart: stallholder -> organizer, organizer ->
/// applicant. The message and its notification commit together.
pub async fn send_message(
    application: &Application,
    sender: &User,
    content: &str,
    pool: &PgPool,
) -> DomainResult<Message> {
    if application.status != ApplicationStatus::Approved {
        return Err(DomainError::Invalid(ValidationCode::ApplicationNotApproved));
    }
    if content.is_empty() {
        return Err(DomainError::Invalid(ValidationCode::ContentRequired));
    }

    let event = Event::find_by_id(application.event_id, pool).await?;
    let recipient_id: Option<UserId> = match sender.role {
        UserRole::Stallholder => event.as_ref().map(|e| e.organizer_id),
        UserRole::Organizer => Some(application.stallholder_id),
        UserRole::Admin => None,
    };

    let mut tx = pool.begin().await?;
    let message = Message::insert_in_tx(application.id, sender.id, content, &mut tx).await?;
    if let Some(recipient_id) = recipient_id {
        Notification::create_in_tx(
            recipient_id,
            NotificationEvent::MessageReceived,
            "New message received",
            preview(content),
            Some("message"),
            Some(message.id.into_uuid()),
            &mut tx,
        )
        .await?;
    }
    tx.commit().await?;

    info!(message_id = %message.id, application_id = %application.id, "message sent");
    Ok(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_truncates_at_fifty_chars() {
        let long = "x".repeat(80);
        assert_eq!(preview(&long).len(), 50);
        assert_eq!(preview("short"), "short");
    }

    #[test]
    fn preview_respects_multibyte_boundaries() {
        let kana = "あ".repeat(60);
        let p = preview(&kana);
        assert_eq!(p.chars().count(), 50);
    }
}
