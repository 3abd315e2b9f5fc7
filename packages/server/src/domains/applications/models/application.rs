use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{PgPool, Postgres, Transaction};

use crate::common::{ApplicationId, EventId, UserId};

/// Application lifecycle.
///
/// pending -> {approved | rejected} (organizer, one-shot) or
/// pending/approved -> cancelled (stallholder). Rejected and cancelled
/// are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, Default)]
#[sqlx(type_name = "application_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    Cancelled,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Approved => "approved",
            ApplicationStatus::Rejected => "rejected",
            ApplicationStatus::Cancelled => "cancelled",
        }
    }

    /// A stallholder may withdraw only before the event locks them out.
    pub fn is_cancellable(&self) -> bool {
        matches!(self, ApplicationStatus::Pending | ApplicationStatus::Approved)
    }
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Application model - SQL persistence layer
///
/// At most one row per (event_id, stallholder_id); the table carries a
/// unique constraint backing the domain check.
#[derive(sqlx::FromRow, Debug, Clone, Serialize)]
pub struct Application {
    pub id: ApplicationId,
    pub event_id: EventId,
    pub stallholder_id: UserId,
    pub memo: Option<String>,
    pub status: ApplicationStatus,
    pub decided_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Application {
    /// Find application by ID
    pub async fn find_by_id(
        id: ApplicationId,
        pool: &PgPool,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>("SELECT * FROM applications WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the application a stallholder made to an event, if any
    pub async fn find_by_event_and_stallholder(
        event_id: EventId,
        stallholder_id: UserId,
        pool: &PgPool,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM applications WHERE event_id = $1 AND stallholder_id = $2",
        )
        .bind(event_id)
        .bind(stallholder_id)
        .fetch_optional(pool)
        .await
    }

    /// All applications to an event, oldest first
    pub async fn list_for_event(event_id: EventId, pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM applications WHERE event_id = $1 ORDER BY created_at ASC",
        )
        .bind(event_id)
        .fetch_all(pool)
        .await
    }

    /// Applications to an event in a given status
    pub async fn list_for_event_with_status(
        event_id: EventId,
        status: ApplicationStatus,
        pool: &PgPool,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM applications
             WHERE event_id = $1 AND status = $2
             ORDER BY created_at ASC",
        )
        .bind(event_id)
        .bind(status)
        .fetch_all(pool)
        .await
    }

    /// All of a stallholder's applications, newest first
    pub async fn list_for_stallholder(
        stallholder_id: UserId,
        pool: &PgPool,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM applications WHERE stallholder_id = $1 ORDER BY created_at DESC",
        )
        .bind(stallholder_id)
        .fetch_all(pool)
        .await
    }

    /// Insert a pending application inside an open transaction.
    pub async fn insert_in_tx(
        event_id: EventId,
        stallholder_id: UserId,
        memo: Option<&str>,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO applications (id, event_id, stallholder_id, memo)
             VALUES ($1, $2, $3, $4)
             RETURNING *",
        )
        .bind(ApplicationId::new())
        .bind(event_id)
        .bind(stallholder_id)
        .bind(memo)
        .fetch_one(&mut **tx)
        .await
    }

    /// Record the organizer's one-shot decision.
    pub async fn decide_in_tx(
        id: ApplicationId,
        status: ApplicationStatus,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "UPDATE applications
             SET status = $2, decided_at = now(), updated_at = now()
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_one(&mut **tx)
        .await
    }

    /// Withdraw an application.
    pub async fn cancel_in_tx(
        id: ApplicationId,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "UPDATE applications
             SET status = 'cancelled', updated_at = now()
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_one(&mut **tx)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancellable_states() {
        assert!(ApplicationStatus::Pending.is_cancellable());
        assert!(ApplicationStatus::Approved.is_cancellable());
        assert!(!ApplicationStatus::Rejected.is_cancellable());
        assert!(!ApplicationStatus::Cancelled.is_cancellable());
    }
}
