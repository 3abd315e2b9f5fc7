//! Account enable/disable.

use sqlx::PgPool;
use tracing::info;

use crate::common::{DomainError, DomainResult, UserId, ValidationCode};
use crate::domains::users::models::user::User;

/// Enable or disable another user's account.
pub async fn toggle_user_active(
    admin: &User,
    user_id: UserId,
    is_active: bool,
    pool: &PgPool,
) -> DomainResult<User> {
    admin.require_admin()?;

    let Some(user) = User::set_active(user_id, is_active, pool).await? else {
        return Err(DomainError::Invalid(ValidationCode::UserNotFound));
    };
    info!(user_id = %user.id, is_active, "user active flag changed");
    Ok(user)
}
