//! One-time admin bootstrap.
//!
//! Guarded two ways: the request must carry the deployment's SETUP_TOKEN,
//! and the endpoint refuses outright once any admin account exists.

use axum::extract::Extension;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use tracing::warn;

use crate::common::{AuthzCode, DomainError, ValidationCode};
use crate::domains::users::actions::register_user;
use crate::domains::users::models::user::{User, UserRole};
use crate::server::app::AppState;
use crate::server::error::ApiResult;
use crate::server::routes::auth::UserView;

#[derive(Deserialize)]
pub struct SetupAdminRequest {
    pub setup_token: String,
    pub email: String,
    pub password: String,
}

pub async fn setup_admin_handler(
    Extension(state): Extension<AppState>,
    Json(req): Json<SetupAdminRequest>,
) -> ApiResult<(StatusCode, Json<UserView>)> {
    let expected = state
        .setup_token
        .as_deref()
        .ok_or(DomainError::Unauthorized(AuthzCode::Forbidden))?;
    if req.setup_token != expected {
        warn!("admin bootstrap attempted with wrong setup token");
        return Err(DomainError::Unauthorized(AuthzCode::Forbidden).into());
    }

    if User::admin_exists(&state.db_pool).await.map_err(DomainError::from)? {
        return Err(DomainError::Invalid(ValidationCode::AdminRegistrationNotAllowed).into());
    }

    let user = register_user(&req.email, &req.password, UserRole::Admin, true, &state.db_pool)
        .await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}
