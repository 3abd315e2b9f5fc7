//! Per-application message rooms.
//!
//! A room belongs to an approved application; only its stallholder and
//! the event's organizer may read or post.

use axum::extract::{Extension, Path};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::common::{ApplicationId, DomainError};
use crate::domains::messages::actions::{open_room, send_message};
use crate::domains::messages::models::message::Message;
use crate::server::app::AppState;
use crate::server::error::ApiResult;
use crate::server::middleware::AuthUser;
use crate::server::routes::current_user;

pub async fn list_messages_handler(
    Extension(state): Extension<AppState>,
    auth: Option<Extension<AuthUser>>,
    Path(application_id): Path<ApplicationId>,
) -> ApiResult<Json<Vec<Message>>> {
    let user = current_user(&state, auth.map(|Extension(a)| a)).await?;
    let application = open_room(&user, application_id, &state.db_pool).await?;

    let messages = Message::list_for_application(application.id, &state.db_pool)
        .await
        .map_err(DomainError::from)?;
    Ok(Json(messages))
}

#[derive(Deserialize)]
pub struct SendMessageRequest {
    pub content: String,
}

pub async fn send_message_handler(
    Extension(state): Extension<AppState>,
    auth: Option<Extension<AuthUser>>,
    Path(application_id): Path<ApplicationId>,
    Json(req): Json<SendMessageRequest>,
) -> ApiResult<(StatusCode, Json<Message>)> {
    let user = current_user(&state, auth.map(|Extension(a)| a)).await?;
    let application = open_room(&user, application_id, &state.db_pool).await?;

    let message = send_message(&application, &user, &req.content, &state.db_pool).await?;
    Ok((StatusCode::CREATED, Json(message)))
}
