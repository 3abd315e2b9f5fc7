// HTTP routes
pub mod admin;
pub mod auth;
pub mod guides;
pub mod health;
pub mod messages;
pub mod notifications;
pub mod organizer;
pub mod setup;
pub mod stallholder;

use crate::common::{AuthzCode, DomainError, ValidationCode};
use crate::domains::users::models::user::User;
use crate::server::app::AppState;
use crate::server::error::ApiError;
use crate::server::middleware::AuthUser;

/// Resolve the session's user, rejecting anonymous or deactivated accounts.
///
/// Handlers call this first; the session middleware never blocks, so a
/// missing [`AuthUser`] extension means no valid bearer token was sent.
pub(crate) async fn current_user(
    state: &AppState,
    auth: Option<AuthUser>,
) -> Result<User, ApiError> {
    let auth = auth.ok_or(DomainError::Unauthorized(AuthzCode::LoginRequired))?;

    let user = User::find_by_id(auth.user_id, &state.db_pool)
        .await
        .map_err(DomainError::from)?
        .ok_or(DomainError::Unauthorized(AuthzCode::LoginRequired))?;

    if !user.is_active {
        return Err(DomainError::Invalid(ValidationCode::InactiveAccount).into());
    }

    Ok(user)
}
