//! Registration, login, logout and the current-user endpoint.

use axum::extract::Extension;
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{DomainError, UserId, ValidationCode};
use crate::domains::users::actions::authenticate_user;
use crate::domains::users::actions::register_user;
use crate::domains::users::models::user::{User, UserRole};
use crate::server::app::AppState;
use crate::server::error::ApiResult;
use crate::server::middleware::AuthUser;
use crate::server::routes::current_user;

/// Public projection of a user (the password hash never leaves the server).
#[derive(Serialize)]
pub struct UserView {
    pub id: UserId,
    pub email: String,
    pub role: UserRole,
    pub is_active: bool,
    pub last_login_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        UserView {
            id: user.id,
            email: user.email,
            role: user.role,
            is_active: user.is_active,
            last_login_at: user.last_login_at,
            created_at: user.created_at,
        }
    }
}

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub role: String,
}

pub async fn register_handler(
    Extension(state): Extension<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<UserView>)> {
    let role = UserRole::parse(&req.role)
        .ok_or(DomainError::Invalid(ValidationCode::RoleInvalid))?;

    let user = register_user(&req.email, &req.password, role, false, &state.db_pool).await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserView,
}

pub async fn login_handler(
    Extension(state): Extension<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let user = authenticate_user(&req.email, &req.password, &state.db_pool).await?;
    let token = state.sessions.create_session(user.id, user.role).await;

    Ok(Json(LoginResponse {
        token,
        user: user.into(),
    }))
}

pub async fn logout_handler(
    Extension(state): Extension<AppState>,
    headers: HeaderMap,
) -> StatusCode {
    if let Some(token) = bearer_token(&headers) {
        state.sessions.delete_session(token).await;
    }
    StatusCode::NO_CONTENT
}

pub async fn me_handler(
    Extension(state): Extension<AppState>,
    auth: Option<Extension<AuthUser>>,
) -> ApiResult<Json<UserView>> {
    let user = current_user(&state, auth.map(|Extension(a)| a)).await?;
    Ok(Json(user.into()))
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let auth_str = headers.get("authorization")?.to_str().ok()?;
    Some(auth_str.strip_prefix("Bearer ").unwrap_or(auth_str))
}
