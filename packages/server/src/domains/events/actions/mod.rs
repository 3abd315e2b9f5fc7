mod create_event;
mod moderate_event;
mod submit_event;
mod update_event;

pub use create_event::create_event;
pub use moderate_event::moderate_event;
pub use submit_event::submit_event_for_review;
pub use update_event::update_event;

use sqlx::PgPool;

use crate::common::{AuthzCode, DomainError, DomainResult, EventId, ValidationCode};
use crate::domains::events::models::event::{Event, EventDraft};
use crate::domains::users::models::user::User;

/// Load an event and prove the caller is its organizer.
///
/// Shared by every organizer-side operation: role check first, then
/// existence, then ownership.
pub async fn get_event_for_organizer(
    organizer: &User,
    event_id: EventId,
    pool: &PgPool,
) -> DomainResult<Event> {
    organizer.require_organizer()?;
    let Some(event) = Event::find_by_id(event_id, pool).await? else {
        return Err(DomainError::Invalid(ValidationCode::EventNotFound));
    };
    if event.organizer_id != organizer.id {
        return Err(DomainError::Unauthorized(AuthzCode::EventNotOwned));
    }
    Ok(event)
}

/// Field validation shared by create and update.
pub(crate) fn validate_event_fields(draft: &EventDraft) -> DomainResult<()> {
    if draft.title.is_empty() {
        return Err(DomainError::Invalid(ValidationCode::TitleRequired));
    }
    if draft.capacity < 1 {
        return Err(DomainError::Invalid(ValidationCode::CapacityInvalid));
    }
    if draft.end_date < draft.start_date {
        return Err(DomainError::Invalid(ValidationCode::DateOrderInvalid));
    }
    if draft.application_deadline > draft.start_date {
        return Err(DomainError::Invalid(ValidationCode::DeadlineInvalid));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn draft() -> EventDraft {
        let start = Utc::now() + Duration::days(7);
        EventDraft {
            title: "Spring market".to_string(),
            description: "".to_string(),
            region: "north".to_string(),
            venue_address: "1 Main St".to_string(),
            genre: "food".to_string(),
            start_date: start,
            end_date: start + Duration::days(1),
            application_deadline: start - Duration::days(2),
            capacity: 10,
        }
    }

    #[test]
    fn accepts_well_formed_draft() {
        assert!(validate_event_fields(&draft()).is_ok());
    }

    #[test]
    fn rejects_empty_title() {
        let mut d = draft();
        d.title.clear();
        assert!(matches!(
            validate_event_fields(&d),
            Err(DomainError::Invalid(ValidationCode::TitleRequired))
        ));
    }

    #[test]
    fn rejects_zero_capacity() {
        let mut d = draft();
        d.capacity = 0;
        assert!(matches!(
            validate_event_fields(&d),
            Err(DomainError::Invalid(ValidationCode::CapacityInvalid))
        ));
    }

    #[test]
    fn rejects_end_before_start() {
        let mut d = draft();
        d.end_date = d.start_date - Duration::days(1);
        assert!(matches!(
            validate_event_fields(&d),
            Err(DomainError::Invalid(ValidationCode::DateOrderInvalid))
        ));
    }

    #[test]
    fn rejects_deadline_after_start() {
        let mut d = draft();
        d.application_deadline = d.start_date + Duration::hours(1);
        assert!(matches!(
            validate_event_fields(&d),
            Err(DomainError::Invalid(ValidationCode::DeadlineInvalid))
        ));
    }
}
