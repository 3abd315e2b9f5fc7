//! Room access control.

use sqlx::PgPool;

use crate::common::{ApplicationId, AuthzCode, DomainError, DomainResult, ValidationCode};
use crate::domains::applications::models::application::{Application, ApplicationStatus};
use crate::domains::events::models::event::Event;
use crate::domains::users::models::user::{User, UserRole};

/// Resolve a message room to its application, rejecting everyone but the
/// two participants.
///
/// Stallholders must own the application and organizers must own the
/// event; admins have no seat in a room. The room only exists while the
/// application is approved, so a cancelled or rejected application hides
/// its history from both sides.
pub async fn open_room(
    user: &User,
    application_id: ApplicationId,
    pool: &PgPool,
) -> DomainResult<Application> {
    let Some(application) = Application::find_by_id(application_id, pool).await? else {
        return Err(DomainError::Invalid(ValidationCode::ApplicationNotFound));
    };

    match user.role {
        UserRole::Stallholder => {
            if application.stallholder_id != user.id {
                return Err(DomainError::Unauthorized(AuthzCode::Forbidden));
            }
        }
        UserRole::Organizer => {
            let event = Event::find_by_id(application.event_id, pool).await?;
            if event.map(|e| e.organizer_id) != Some(user.id) {
                return Err(DomainError::Unauthorized(AuthzCode::Forbidden));
            }
        }
        UserRole::Admin => {
            return Err(DomainError::Unauthorized(AuthzCode::Forbidden));
        }
    }

    if application.status != ApplicationStatus::Approved {
        return Err(DomainError::Invalid(ValidationCode::ApplicationNotApproved));
    }

    Ok(application)
}
