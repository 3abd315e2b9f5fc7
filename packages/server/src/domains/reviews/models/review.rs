use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{PgPool, Postgres, Transaction};

use crate::common::{ApplicationId, ReviewId, UserId};

/// Post-event rating one party leaves for its counterpart.
///
/// At most one row per (application_id, author_id); backed by a unique
/// constraint.
#[derive(sqlx::FromRow, Debug, Clone, Serialize)]
pub struct Review {
    pub id: ReviewId,
    pub application_id: ApplicationId,
    pub author_id: UserId,
    pub target_id: UserId,
    pub score: i32,
    pub comment: String,
    pub is_hidden: bool,
    pub created_at: DateTime<Utc>,
}

impl Review {
    /// Find the review an author left on an application, if any
    pub async fn find_by_application_and_author(
        application_id: ApplicationId,
        author_id: UserId,
        pool: &PgPool,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM reviews WHERE application_id = $1 AND author_id = $2",
        )
        .bind(application_id)
        .bind(author_id)
        .fetch_optional(pool)
        .await
    }

    /// Visible reviews about a user, newest first
    pub async fn list_for_target(
        target_id: UserId,
        pool: &PgPool,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM reviews
             WHERE target_id = $1 AND is_hidden = false
             ORDER BY created_at DESC",
        )
        .bind(target_id)
        .fetch_all(pool)
        .await
    }

    /// Insert a review inside an open transaction.
    pub async fn insert_in_tx(
        application_id: ApplicationId,
        author_id: UserId,
        target_id: UserId,
        score: i32,
        comment: &str,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO reviews (id, application_id, author_id, target_id, score, comment)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING *",
        )
        .bind(ReviewId::new())
        .bind(application_id)
        .bind(author_id)
        .bind(target_id)
        .bind(score)
        .bind(comment)
        .fetch_one(&mut **tx)
        .await
    }
}
