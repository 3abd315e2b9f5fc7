use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{PgPool, Postgres, Transaction};

use crate::common::{EventId, UserId};

/// Event lifecycle: draft -> pending_review -> {open | closed}.
///
/// Only `Draft` is organizer-editable; only `PendingReview` is
/// admin-decidable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, Default)]
#[sqlx(type_name = "event_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum EventStatus {
    #[default]
    Draft,
    PendingReview,
    Open,
    Closed,
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Draft => "draft",
            EventStatus::PendingReview => "pending_review",
            EventStatus::Open => "open",
            EventStatus::Closed => "closed",
        }
    }
}

impl std::fmt::Display for EventStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields shared by create and update.
#[derive(Debug, Clone, Deserialize)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub region: String,
    pub venue_address: String,
    pub genre: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub application_deadline: DateTime<Utc>,
    pub capacity: i32,
}

/// Event model - SQL persistence layer
#[derive(sqlx::FromRow, Debug, Clone, Serialize)]
pub struct Event {
    pub id: EventId,
    pub organizer_id: UserId,
    pub title: String,
    pub description: String,
    pub region: String,
    pub venue_address: String,
    pub genre: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub application_deadline: DateTime<Utc>,
    pub capacity: i32,
    pub status: EventStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Event {
    /// Find event by ID
    pub async fn find_by_id(id: EventId, pool: &PgPool) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>("SELECT * FROM events WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All events belonging to an organizer, newest first
    pub async fn list_for_organizer(
        organizer_id: UserId,
        pool: &PgPool,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM events WHERE organizer_id = $1 ORDER BY created_at DESC",
        )
        .bind(organizer_id)
        .fetch_all(pool)
        .await
    }

    /// Events awaiting admin review, oldest first
    pub async fn list_pending_review(pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM events WHERE status = 'pending_review' ORDER BY created_at ASC",
        )
        .fetch_all(pool)
        .await
    }

    /// Open events filtered by region, genre, and a date that must fall
    /// inside [start_date, end_date].
    pub async fn search_open(
        region: Option<&str>,
        genre: Option<&str>,
        date: Option<NaiveDate>,
        pool: &PgPool,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM events
             WHERE status = 'open'
               AND ($1::text IS NULL OR region = $1)
               AND ($2::text IS NULL OR genre = $2)
               AND ($3::date IS NULL OR (start_date::date <= $3 AND end_date::date >= $3))
             ORDER BY start_date ASC",
        )
        .bind(region)
        .bind(genre)
        .bind(date)
        .fetch_all(pool)
        .await
    }

    /// Insert a new draft event
    pub async fn insert(
        organizer_id: UserId,
        draft: &EventDraft,
        pool: &PgPool,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO events
             (id, organizer_id, title, description, region, venue_address, genre,
              start_date, end_date, application_deadline, capacity, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, 'draft')
             RETURNING *",
        )
        .bind(EventId::new())
        .bind(organizer_id)
        .bind(&draft.title)
        .bind(&draft.description)
        .bind(&draft.region)
        .bind(&draft.venue_address)
        .bind(&draft.genre)
        .bind(draft.start_date)
        .bind(draft.end_date)
        .bind(draft.application_deadline)
        .bind(draft.capacity)
        .fetch_one(pool)
        .await
    }

    /// Overwrite the editable fields inside an open transaction.
    pub async fn update_fields_in_tx(
        id: EventId,
        draft: &EventDraft,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "UPDATE events SET
               title = $2, description = $3, region = $4, venue_address = $5,
               genre = $6, start_date = $7, end_date = $8,
               application_deadline = $9, capacity = $10, updated_at = now()
             WHERE id = $1
             RETURNING *",
        )
        .bind(id)
        .bind(&draft.title)
        .bind(&draft.description)
        .bind(&draft.region)
        .bind(&draft.venue_address)
        .bind(&draft.genre)
        .bind(draft.start_date)
        .bind(draft.end_date)
        .bind(draft.application_deadline)
        .bind(draft.capacity)
        .fetch_one(&mut **tx)
        .await
    }

    /// Move the event to a new lifecycle status.
    pub async fn set_status(
        id: EventId,
        status: EventStatus,
        pool: &PgPool,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "UPDATE events SET status = $2, updated_at = now()
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_one(pool)
        .await
    }

    /// Status change inside an open transaction (used when a notification
    /// must commit with it).
    pub async fn set_status_in_tx(
        id: EventId,
        status: EventStatus,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "UPDATE events SET status = $2, updated_at = now()
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_one(&mut **tx)
        .await
    }
}
