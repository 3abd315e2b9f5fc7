//! Create event action.

use sqlx::PgPool;
use tracing::info;

use crate::common::DomainResult;
use crate::domains::events::actions::validate_event_fields;
use crate::domains::events::models::event::{Event, EventDraft};
use crate::domains::users::models::user::User;

/// Create a new event in `draft` status.
///
/// Organizer role required; all field invariants checked up front.
pub async fn create_event(
    organizer: &User,
    draft: EventDraft,
    pool: &PgPool,
) -> DomainResult<Event> {
    organizer.require_organizer()?;
    validate_event_fields(&draft)?;

    let event = Event::insert(organizer.id, &draft, pool).await?;
    info!(event_id = %event.id, organizer_id = %organizer.id, "event created");
    Ok(event)
}
