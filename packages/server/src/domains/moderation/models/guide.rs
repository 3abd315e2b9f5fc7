use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::GuideId;
use crate::domains::users::models::user::UserRole;

/// Which role a guide is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "guide_audience", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum GuideAudience {
    Stallholder,
    Organizer,
    All,
}

impl GuideAudience {
    pub fn as_str(&self) -> &'static str {
        match self {
            GuideAudience::Stallholder => "stallholder",
            GuideAudience::Organizer => "organizer",
            GuideAudience::All => "all",
        }
    }

    /// Parse from form input; unknown strings are a validation failure.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "stallholder" => Some(GuideAudience::Stallholder),
            "organizer" => Some(GuideAudience::Organizer),
            "all" => Some(GuideAudience::All),
            _ => None,
        }
    }

    /// Whether a guide written for this audience is visible to a role.
    pub fn includes(&self, role: UserRole) -> bool {
        match self {
            GuideAudience::All => true,
            GuideAudience::Stallholder => role == UserRole::Stallholder,
            GuideAudience::Organizer => role == UserRole::Organizer,
        }
    }
}

impl std::fmt::Display for GuideAudience {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Published help article - SQL persistence layer
#[derive(sqlx::FromRow, Debug, Clone, Serialize)]
pub struct Guide {
    pub id: GuideId,
    pub target_role: GuideAudience,
    pub title: String,
    pub body: String,
    pub is_published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Guide {
    /// Find guide by ID
    pub async fn find_by_id(id: GuideId, pool: &PgPool) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>("SELECT * FROM guides WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All guides (admin listing), newest first
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>("SELECT * FROM guides ORDER BY created_at DESC")
            .fetch_all(pool)
            .await
    }

    /// Published guides visible to a role, newest publication first
    pub async fn list_published_for_role(
        role: UserRole,
        pool: &PgPool,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM guides
             WHERE is_published = true AND (target_role = 'all' OR target_role::text = $1)
             ORDER BY published_at DESC",
        )
        .bind(role.as_str())
        .fetch_all(pool)
        .await
    }

    /// Create a guide
    pub async fn insert(
        target_role: GuideAudience,
        title: &str,
        body: &str,
        publish: bool,
        pool: &PgPool,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO guides (id, target_role, title, body, is_published, published_at)
             VALUES ($1, $2, $3, $4, $5, CASE WHEN $5 THEN now() END)
             RETURNING *",
        )
        .bind(GuideId::new())
        .bind(target_role)
        .bind(title)
        .bind(body)
        .bind(publish)
        .fetch_one(pool)
        .await
    }

    /// Overwrite title, body, and publication state.
    pub async fn update_fields(
        id: GuideId,
        title: &str,
        body: &str,
        publish: bool,
        pool: &PgPool,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "UPDATE guides SET
               title = $2, body = $3, is_published = $4,
               published_at = CASE WHEN $4 THEN now() END,
               updated_at = now()
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(title)
        .bind(body)
        .bind(publish)
        .fetch_one(pool)
        .await
    }

    /// Delete a guide
    pub async fn delete(id: GuideId, pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM guides WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn audience_visibility() {
        assert!(GuideAudience::All.includes(UserRole::Stallholder));
        assert!(GuideAudience::Stallholder.includes(UserRole::Stallholder));
        assert!(!GuideAudience::Stallholder.includes(UserRole::Organizer));
        assert!(GuideAudience::Organizer.includes(UserRole::Organizer));
    }
}
