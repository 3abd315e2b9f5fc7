use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::common::{AdminNoteId, UserId};

/// Internal admin note attached to a user or an event.
#[derive(sqlx::FromRow, Debug, Clone, Serialize)]
pub struct AdminNote {
    pub id: AdminNoteId,
    pub author_id: UserId,
    pub target_type: String,
    pub target_id: Uuid,
    pub note: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AdminNote {
    /// Attach a note
    pub async fn insert(
        author_id: UserId,
        target_type: &str,
        target_id: Uuid,
        note: &str,
        pool: &PgPool,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO admin_notes (id, author_id, target_type, target_id, note)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING *",
        )
        .bind(AdminNoteId::new())
        .bind(author_id)
        .bind(target_type)
        .bind(target_id)
        .bind(note)
        .fetch_one(pool)
        .await
    }
}
