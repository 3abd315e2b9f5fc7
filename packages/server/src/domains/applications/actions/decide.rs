//! Organizer decision on an application.

use sqlx::PgPool;
use tracing::info;

use crate::common::{ApplicationId, DomainError, DomainResult, ValidationCode};
use crate::domains::applications::models::application::{Application, ApplicationStatus};
use crate::domains::events::actions::get_event_for_organizer;
use crate::domains::notifications::models::notification::{Notification, NotificationEvent};
use crate::domains::users::models::user::User;

/// Approve or reject a pending application.
///
/// One-shot: once status leaves `pending` the decision cannot be
/// repeated or reversed. The status change and the stallholder's
/// notification commit atomically.
pub async fn decide_application(
    organizer: &User,
    application_id: ApplicationId,
    approved: bool,
    pool: &PgPool,
) -> DomainResult<Application> {
    let Some(application) = Application::find_by_id(application_id, pool).await? else {
        return Err(DomainError::Invalid(ValidationCode::ApplicationNotFound));
    };
    get_event_for_organizer(organizer, application.event_id, pool).await?;

    if application.status != ApplicationStatus::Pending {
        return Err(DomainError::Invalid(
            ValidationCode::ApplicationAlreadyDecided,
        ));
    }

    let next = if approved {
        ApplicationStatus::Approved
    } else {
        ApplicationStatus::Rejected
    };

    let mut tx = pool.begin().await?;
    let application = Application::decide_in_tx(application.id, next, &mut tx).await?;
    Notification::create_in_tx(
        application.stallholder_id,
        if approved {
            NotificationEvent::ApplicationApproved
        } else {
            NotificationEvent::ApplicationRejected
        },
        "Application decision posted",
        "Check the outcome of your application.",
        Some("application"),
        Some(application.id.into_uuid()),
        &mut tx,
    )
    .await?;
    tx.commit().await?;

    info!(application_id = %application.id, approved, "application decided");
    Ok(application)
}
