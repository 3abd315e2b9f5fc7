use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::common::{NotificationId, UserId};

/// What happened. One variant per state change the platform reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "notification_event", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum NotificationEvent {
    ApplicationSubmitted,
    ApplicationApproved,
    ApplicationRejected,
    ApplicationCancelled,
    EventUpdated,
    EventRejected,
    ModerationResult,
    ReviewPosted,
    LowRating,
    MessageReceived,
}

/// Delivery state. There is no dispatcher in this codebase, so `Queued`
/// is terminal; `Sent`/`Failed` exist for a future outbound channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, Default)]
#[sqlx(type_name = "delivery_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatus {
    #[default]
    Queued,
    Sent,
    Failed,
}

/// In-app notification - SQL persistence layer
///
/// Write-once-then-read-flag: rows are never mutated after insert except
/// to mark them read.
#[derive(sqlx::FromRow, Debug, Clone, Serialize)]
pub struct Notification {
    pub id: NotificationId,
    pub user_id: UserId,
    pub event_type: NotificationEvent,
    pub channel: String,
    pub title: String,
    pub body: String,
    pub related_type: Option<String>,
    pub related_id: Option<Uuid>,
    pub delivery_status: DeliveryStatus,
    pub is_read: bool,
    pub sent_at: Option<DateTime<Utc>>,
    pub read_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

const INSERT_SQL: &str = "INSERT INTO notifications
     (id, user_id, event_type, channel, title, body, related_type, related_id)
     VALUES ($1, $2, $3, 'in_app', $4, $5, $6, $7)
     RETURNING *";

impl Notification {
    /// Insert a queued, unread notification.
    pub async fn create(
        user_id: UserId,
        event_type: NotificationEvent,
        title: &str,
        body: &str,
        related_type: Option<&str>,
        related_id: Option<Uuid>,
        pool: &PgPool,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(INSERT_SQL)
            .bind(NotificationId::new())
            .bind(user_id)
            .bind(event_type)
            .bind(title)
            .bind(body)
            .bind(related_type)
            .bind(related_id)
            .fetch_one(pool)
            .await
    }

    /// Insert inside an open transaction, so the notification commits
    /// atomically with the state change that caused it.
    pub async fn create_in_tx(
        user_id: UserId,
        event_type: NotificationEvent,
        title: &str,
        body: &str,
        related_type: Option<&str>,
        related_id: Option<Uuid>,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(INSERT_SQL)
            .bind(NotificationId::new())
            .bind(user_id)
            .bind(event_type)
            .bind(title)
            .bind(body)
            .bind(related_type)
            .bind(related_id)
            .fetch_one(&mut **tx)
            .await
    }

    /// Find by ID
    pub async fn find_by_id(
        id: NotificationId,
        pool: &PgPool,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>("SELECT * FROM notifications WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All notifications for a user, newest first
    pub async fn list_for_user(user_id: UserId, pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM notifications WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// Unread count for a user
    pub async fn unread_count(user_id: UserId, pool: &PgPool) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM notifications WHERE user_id = $1 AND is_read = false",
        )
        .bind(user_id)
        .fetch_one(pool)
        .await?;
        Ok(row.0)
    }

    /// Flip the read flag and stamp `read_at`.
    pub async fn mark_read(id: NotificationId, pool: &PgPool) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "UPDATE notifications SET is_read = true, read_at = now()
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_one(pool)
        .await
    }
}
