use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::{AuthzCode, DomainError, DomainResult, UserId};

/// Account role. Immutable after creation; authorization branches on it
/// everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Stallholder,
    Organizer,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Stallholder => "stallholder",
            UserRole::Organizer => "organizer",
            UserRole::Admin => "admin",
        }
    }

    /// Parse a role from form input. Unknown strings are a validation
    /// failure, not a panic.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "stallholder" => Some(UserRole::Stallholder),
            "organizer" => Some(UserRole::Organizer),
            "admin" => Some(UserRole::Admin),
            _ => None,
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User account - SQL persistence layer
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub hashed_password: String,
    pub role: UserRole,
    pub is_active: bool,
    pub last_login_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Find user by ID
    pub async fn find_by_id(id: UserId, pool: &PgPool) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find user by email
    pub async fn find_by_email(email: &str, pool: &PgPool) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Whether any admin account exists (bootstrap guard)
    pub async fn admin_exists(pool: &PgPool) -> Result<bool, sqlx::Error> {
        let row: (bool,) =
            sqlx::query_as("SELECT EXISTS (SELECT 1 FROM users WHERE role = 'admin')")
                .fetch_one(pool)
                .await?;
        Ok(row.0)
    }

    /// Stamp a successful login
    pub async fn touch_last_login(id: UserId, pool: &PgPool) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "UPDATE users SET last_login_at = now(), updated_at = now()
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_one(pool)
        .await
    }

    /// Enable or disable an account
    pub async fn set_active(id: UserId, is_active: bool, pool: &PgPool) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "UPDATE users SET is_active = $2, updated_at = now()
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(is_active)
        .fetch_optional(pool)
        .await
    }

    // ------------------------------------------------------------------
    // Role checks used by every action
    // ------------------------------------------------------------------

    pub fn require_organizer(&self) -> DomainResult<()> {
        if self.role != UserRole::Organizer {
            return Err(DomainError::Unauthorized(AuthzCode::RoleRequiredOrganizer));
        }
        Ok(())
    }

    pub fn require_stallholder(&self) -> DomainResult<()> {
        if self.role != UserRole::Stallholder {
            return Err(DomainError::Unauthorized(AuthzCode::RoleRequiredStallholder));
        }
        Ok(())
    }

    pub fn require_admin(&self) -> DomainResult<()> {
        if self.role != UserRole::Admin {
            return Err(DomainError::Unauthorized(AuthzCode::RoleRequiredAdmin));
        }
        Ok(())
    }
}
