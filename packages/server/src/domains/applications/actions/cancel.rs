//! Stallholder withdrawal of an application.

use sqlx::PgPool;
use tracing::info;

use crate::common::{ApplicationId, AuthzCode, DomainError, DomainResult, ValidationCode};
use crate::domains::applications::models::application::Application;
use crate::domains::events::models::event::Event;
use crate::domains::notifications::models::notification::{Notification, NotificationEvent};
use crate::domains::users::models::user::User;

/// Cancel one's own application.
///
/// Allowed only from pending or approved; rejected and cancelled are
/// terminal. The organizer is told about the withdrawal in the same
/// transaction.
pub async fn cancel_application(
    stallholder: &User,
    application_id: ApplicationId,
    pool: &PgPool,
) -> DomainResult<Application> {
    stallholder.require_stallholder()?;

    let Some(application) = Application::find_by_id(application_id, pool).await? else {
        return Err(DomainError::Invalid(ValidationCode::ApplicationNotFound));
    };
    if application.stallholder_id != stallholder.id {
        return Err(DomainError::Unauthorized(AuthzCode::ApplicationNotOwned));
    }
    if !application.status.is_cancellable() {
        return Err(DomainError::Invalid(
            ValidationCode::ApplicationNotCancellable,
        ));
    }

    let event = Event::find_by_id(application.event_id, pool).await?;

    let mut tx = pool.begin().await?;
    let application = Application::cancel_in_tx(application.id, &mut tx).await?;
    if let Some(event) = &event {
        Notification::create_in_tx(
            event.organizer_id,
            NotificationEvent::ApplicationCancelled,
            "Application withdrawn",
            &format!("An application to \"{}\" was cancelled.", event.title),
            Some("application"),
            Some(application.id.into_uuid()),
            &mut tx,
        )
        .await?;
    }
    tx.commit().await?;

    info!(application_id = %application.id, "application cancelled");
    Ok(application)
}
