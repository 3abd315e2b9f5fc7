//! Mark-read action - the only mutation a notification ever receives.

use sqlx::PgPool;

use crate::common::{AuthzCode, DomainError, DomainResult, NotificationId, ValidationCode};
use crate::domains::notifications::models::notification::Notification;
use crate::domains::users::models::user::User;

/// Mark one of the viewer's notifications as read.
///
/// Owner-only: reading someone else's notification is an authorization
/// failure, not a silent no-op.
pub async fn mark_notification_read(
    viewer: &User,
    notification_id: NotificationId,
    pool: &PgPool,
) -> DomainResult<Notification> {
    let Some(notification) = Notification::find_by_id(notification_id, pool).await? else {
        return Err(DomainError::Invalid(ValidationCode::NotificationNotFound));
    };
    if notification.user_id != viewer.id {
        return Err(DomainError::Unauthorized(AuthzCode::Forbidden));
    }

    Ok(Notification::mark_read(notification.id, pool).await?)
}
