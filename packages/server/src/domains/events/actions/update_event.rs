//! Update event action.

use sqlx::PgPool;
use tracing::info;

use crate::common::{DomainError, DomainResult, EventId, ValidationCode};
use crate::domains::applications::models::application::{Application, ApplicationStatus};
use crate::domains::events::actions::{get_event_for_organizer, validate_event_fields};
use crate::domains::events::models::event::{Event, EventDraft, EventStatus};
use crate::domains::notifications::models::notification::{Notification, NotificationEvent};
use crate::domains::users::models::user::User;

/// Overwrite an event's fields.
///
/// Owner-only and draft-only. If the event ends up visible in `open`
/// status, every stallholder with an approved application is told it
/// changed; the field update and the notifications commit together.
pub async fn update_event(
    organizer: &User,
    event_id: EventId,
    draft: EventDraft,
    pool: &PgPool,
) -> DomainResult<Event> {
    let event = get_event_for_organizer(organizer, event_id, pool).await?;
    if event.status != EventStatus::Draft {
        return Err(DomainError::Invalid(ValidationCode::EventNotEditable));
    }
    validate_event_fields(&draft)?;

    let mut tx = pool.begin().await?;
    let event = Event::update_fields_in_tx(event.id, &draft, &mut tx).await?;

    if event.status == EventStatus::Open {
        let approved =
            Application::list_for_event_with_status(event.id, ApplicationStatus::Approved, pool)
                .await?;
        for application in &approved {
            Notification::create_in_tx(
                application.stallholder_id,
                NotificationEvent::EventUpdated,
                "Event details updated",
                &format!("The event \"{}\" has been updated.", event.title),
                Some("event"),
                Some(event.id.into_uuid()),
                &mut tx,
            )
            .await?;
        }
    }

    tx.commit().await?;

    info!(event_id = %event.id, "event updated");
    Ok(event)
}
