//! Register user action - account creation plus the role-matching profile.

use sqlx::PgPool;
use tracing::info;

use crate::common::{
    DomainError, DomainResult, OrganizerProfileId, StallholderProfileId, UserId, ValidationCode,
};
use crate::domains::users::models::user::{User, UserRole};
use crate::domains::users::password::hash_password;

fn validate_registration(email: &str, password: &str) -> DomainResult<()> {
    if email.is_empty() {
        return Err(DomainError::Invalid(ValidationCode::EmailRequired));
    }
    if !email.contains('@') {
        return Err(DomainError::Invalid(ValidationCode::EmailInvalid));
    }
    if password.len() < 8 {
        return Err(DomainError::Invalid(ValidationCode::PasswordTooShort));
    }
    if password.len() > 72 {
        return Err(DomainError::Invalid(ValidationCode::PasswordTooLong));
    }
    Ok(())
}

/// Register a new account.
///
/// Admin accounts can only be created when `allow_admin` is set (bootstrap
/// endpoint and the create_admin CLI). The user row and its empty
/// stallholder/organizer profile are inserted in one transaction.
pub async fn register_user(
    email: &str,
    password: &str,
    role: UserRole,
    allow_admin: bool,
    pool: &PgPool,
) -> DomainResult<User> {
    validate_registration(email, password)?;
    if role == UserRole::Admin && !allow_admin {
        return Err(DomainError::Invalid(
            ValidationCode::AdminRegistrationNotAllowed,
        ));
    }

    if User::find_by_email(email, pool).await?.is_some() {
        return Err(DomainError::Invalid(ValidationCode::EmailExists));
    }

    let hashed = hash_password(password)?;

    let mut tx = pool.begin().await?;

    let user = sqlx::query_as::<_, User>(
        "INSERT INTO users (id, email, hashed_password, role)
         VALUES ($1, $2, $3, $4)
         RETURNING *",
    )
    .bind(UserId::new())
    .bind(email)
    .bind(&hashed)
    .bind(role)
    .fetch_one(&mut *tx)
    .await?;

    match role {
        UserRole::Stallholder => {
            sqlx::query(
                "INSERT INTO stallholder_profiles (id, user_id, business_name, genre, bio)
                 VALUES ($1, $2, '', '', '')",
            )
            .bind(StallholderProfileId::new())
            .bind(user.id)
            .execute(&mut *tx)
            .await?;
        }
        UserRole::Organizer => {
            sqlx::query(
                "INSERT INTO organizer_profiles (id, user_id, organization_name, description)
                 VALUES ($1, $2, '', '')",
            )
            .bind(OrganizerProfileId::new())
            .bind(user.id)
            .execute(&mut *tx)
            .await?;
        }
        UserRole::Admin => {}
    }

    tx.commit().await?;

    info!(user_id = %user.id, role = %user.role, "user registered");
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_validation_order() {
        assert!(matches!(
            validate_registration("", "longenough"),
            Err(DomainError::Invalid(ValidationCode::EmailRequired))
        ));
        assert!(matches!(
            validate_registration("no-at-sign", "longenough"),
            Err(DomainError::Invalid(ValidationCode::EmailInvalid))
        ));
        assert!(matches!(
            validate_registration("a@b.c", "short"),
            Err(DomainError::Invalid(ValidationCode::PasswordTooShort))
        ));
        assert!(matches!(
            validate_registration("a@b.c", &"x".repeat(73)),
            Err(DomainError::Invalid(ValidationCode::PasswordTooLong))
        ));
        assert!(validate_registration("a@b.c", "longenough").is_ok());
    }
}
