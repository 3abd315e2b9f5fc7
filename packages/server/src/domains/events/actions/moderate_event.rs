//! Admin decision on a submitted event.

use sqlx::PgPool;
use tracing::info;

use crate::common::{DomainError, DomainResult, EventId, ValidationCode};
use crate::domains::events::models::event::{Event, EventStatus};
use crate::domains::notifications::models::notification::{Notification, NotificationEvent};
use crate::domains::users::models::user::User;

/// Approve or reject an event that is pending review.
///
/// Admin-only; pending_review -> open on approve, -> closed on reject.
/// The status change and the organizer's notification commit atomically.
pub async fn moderate_event(
    admin: &User,
    event_id: EventId,
    approve: bool,
    pool: &PgPool,
) -> DomainResult<Event> {
    admin.require_admin()?;
    let Some(event) = Event::find_by_id(event_id, pool).await? else {
        return Err(DomainError::Invalid(ValidationCode::EventNotFound));
    };
    if event.status != EventStatus::PendingReview {
        return Err(DomainError::Invalid(ValidationCode::EventStatusInvalid));
    }

    let next = if approve {
        EventStatus::Open
    } else {
        EventStatus::Closed
    };

    let mut tx = pool.begin().await?;
    let event = Event::set_status_in_tx(event.id, next, &mut tx).await?;
    Notification::create_in_tx(
        event.organizer_id,
        if approve {
            NotificationEvent::EventUpdated
        } else {
            NotificationEvent::EventRejected
        },
        "Event review complete",
        &format!("Review of your event \"{}\" has finished.", event.title),
        Some("event"),
        Some(event.id.into_uuid()),
        &mut tx,
    )
    .await?;
    tx.commit().await?;

    info!(event_id = %event.id, approve, "event moderated");
    Ok(event)
}
