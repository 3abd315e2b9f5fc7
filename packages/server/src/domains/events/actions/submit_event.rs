//! Submit-for-review action.

use sqlx::PgPool;
use tracing::info;

use crate::common::{DomainError, DomainResult, EventId, ValidationCode};
use crate::domains::events::actions::get_event_for_organizer;
use crate::domains::events::models::event::{Event, EventStatus};
use crate::domains::users::models::user::User;

/// Hand a draft event to the admins: draft -> pending_review.
pub async fn submit_event_for_review(
    organizer: &User,
    event_id: EventId,
    pool: &PgPool,
) -> DomainResult<Event> {
    let event = get_event_for_organizer(organizer, event_id, pool).await?;
    if event.status != EventStatus::Draft {
        return Err(DomainError::Invalid(ValidationCode::EventStatusInvalid));
    }

    let event = Event::set_status(event.id, EventStatus::PendingReview, pool).await?;
    info!(event_id = %event.id, "event submitted for review");
    Ok(event)
}
