//! Authenticate user action - credential check for login.

use sqlx::PgPool;
use tracing::{info, warn};

use crate::common::{DomainError, DomainResult, ValidationCode};
use crate::domains::users::models::user::User;
use crate::domains::users::password::verify_password;

/// Verify credentials and stamp `last_login_at`.
///
/// Unknown email and wrong password produce the same `invalid_credentials`
/// code; disabled accounts are rejected after the password check so the
/// error does not reveal whether the password was right.
pub async fn authenticate_user(email: &str, password: &str, pool: &PgPool) -> DomainResult<User> {
    let Some(user) = User::find_by_email(email, pool).await? else {
        warn!(email, "login attempt for unknown email");
        return Err(DomainError::Invalid(ValidationCode::InvalidCredentials));
    };

    if !verify_password(password, &user.hashed_password) {
        warn!(user_id = %user.id, "login attempt with bad password");
        return Err(DomainError::Invalid(ValidationCode::InvalidCredentials));
    }

    if !user.is_active {
        return Err(DomainError::Invalid(ValidationCode::InactiveAccount));
    }

    let user = User::touch_last_login(user.id, pool).await?;
    info!(user_id = %user.id, "user authenticated");
    Ok(user)
}
