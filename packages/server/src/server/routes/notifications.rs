//! Notification feed for the logged-in user.

use axum::extract::{Extension, Path};
use axum::Json;
use serde::Serialize;

use crate::common::{DomainError, NotificationId};
use crate::domains::notifications::actions::mark_notification_read;
use crate::domains::notifications::models::notification::Notification;
use crate::server::app::AppState;
use crate::server::error::ApiResult;
use crate::server::middleware::AuthUser;
use crate::server::routes::current_user;

#[derive(Serialize)]
pub struct NotificationsResponse {
    pub notifications: Vec<Notification>,
    pub unread_count: i64,
}

pub async fn list_notifications_handler(
    Extension(state): Extension<AppState>,
    auth: Option<Extension<AuthUser>>,
) -> ApiResult<Json<NotificationsResponse>> {
    let user = current_user(&state, auth.map(|Extension(a)| a)).await?;

    let notifications = Notification::list_for_user(user.id, &state.db_pool)
        .await
        .map_err(DomainError::from)?;
    let unread_count = Notification::unread_count(user.id, &state.db_pool)
        .await
        .map_err(DomainError::from)?;

    Ok(Json(NotificationsResponse {
        notifications,
        unread_count,
    }))
}

pub async fn mark_read_handler(
    Extension(state): Extension<AppState>,
    auth: Option<Extension<AuthUser>>,
    Path(notification_id): Path<NotificationId>,
) -> ApiResult<Json<Notification>> {
    let user = current_user(&state, auth.map(|Extension(a)| a)).await?;
    let notification = mark_notification_read(&user, notification_id, &state.db_pool).await?;
    Ok(Json(notification))
}
