//! Apply-to-event action.

use sqlx::PgPool;
use tracing::info;

use crate::common::{DomainError, DomainResult, EventId, ValidationCode};
use crate::domains::applications::models::application::Application;
use crate::domains::events::models::event::{Event, EventStatus};
use crate::domains::notifications::models::notification::{Notification, NotificationEvent};
use crate::domains::users::models::user::User;

/// Apply to an open event.
///
/// Stallholder role required, one application per (event, stallholder).
/// The new pending application and the organizer's notification commit
/// together.
pub async fn apply_to_event(
    stallholder: &User,
    event_id: EventId,
    memo: Option<&str>,
    pool: &PgPool,
) -> DomainResult<Application> {
    stallholder.require_stallholder()?;

    let Some(event) = Event::find_by_id(event_id, pool).await? else {
        return Err(DomainError::Invalid(ValidationCode::EventNotFound));
    };
    if event.status != EventStatus::Open {
        return Err(DomainError::Invalid(ValidationCode::EventNotOpen));
    }

    let existing =
        Application::find_by_event_and_stallholder(event.id, stallholder.id, pool).await?;
    if existing.is_some() {
        return Err(DomainError::Invalid(ValidationCode::ApplicationExists));
    }

    let mut tx = pool.begin().await?;
    let application = Application::insert_in_tx(event.id, stallholder.id, memo, &mut tx).await?;
    Notification::create_in_tx(
        event.organizer_id,
        NotificationEvent::ApplicationSubmitted,
        "New application received",
        &format!("Event: {}", event.title),
        Some("application"),
        Some(application.id.into_uuid()),
        &mut tx,
    )
    .await?;
    tx.commit().await?;

    info!(
        application_id = %application.id,
        event_id = %event.id,
        stallholder_id = %stallholder.id,
        "application submitted"
    );
    Ok(application)
}
