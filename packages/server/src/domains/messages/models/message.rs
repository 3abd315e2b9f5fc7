use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{PgPool, Postgres, Transaction};

use crate::common::{ApplicationId, MessageId, UserId};

/// Message between an applicant and the event organizer, scoped to one
/// approved application.
#[derive(sqlx::FromRow, Debug, Clone, Serialize)]
pub struct Message {
    pub id: MessageId,
    pub application_id: ApplicationId,
    pub sender_id: UserId,
    pub content: String,
    pub is_read: bool,
    pub read_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Conversation for an application, oldest first
    pub async fn list_for_application(
        application_id: ApplicationId,
        pool: &PgPool,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM messages WHERE application_id = $1 ORDER BY created_at ASC",
        )
        .bind(application_id)
        .fetch_all(pool)
        .await
    }

    /// Insert a message inside an open transaction.
    pub async fn insert_in_tx(
        application_id: ApplicationId,
        sender_id: UserId,
        content: &str,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO messages (id, application_id, sender_id, content)
             VALUES ($1, $2, $3, $4)
             RETURNING *",
        )
        .bind(MessageId::new())
        .bind(application_id)
        .bind(sender_id)
        .bind(content)
        .fetch_one(&mut **tx)
        .await
    }
}
