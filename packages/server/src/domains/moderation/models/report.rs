use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::common::{ReportId, UserId};

/// Handling state of a user report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, Default)]
#[sqlx(type_name = "report_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    #[default]
    Open,
    InProgress,
    Closed,
}

impl ReportStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Open => "open",
            ReportStatus::InProgress => "in_progress",
            ReportStatus::Closed => "closed",
        }
    }

    /// Parse from form input; unknown strings are a validation failure.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "open" => Some(ReportStatus::Open),
            "in_progress" => Some(ReportStatus::InProgress),
            "closed" => Some(ReportStatus::Closed),
            _ => None,
        }
    }
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User report - SQL persistence layer
#[derive(sqlx::FromRow, Debug, Clone, Serialize)]
pub struct Report {
    pub id: ReportId,
    pub reporter_id: UserId,
    pub target_type: String,
    pub target_id: Uuid,
    pub reason_code: Option<String>,
    pub reason_detail: Option<String>,
    pub status: ReportStatus,
    pub handled_by: Option<UserId>,
    pub handled_at: Option<DateTime<Utc>>,
    pub resolution_note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Report {
    /// Find report by ID
    pub async fn find_by_id(id: ReportId, pool: &PgPool) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>("SELECT * FROM reports WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All reports, newest first
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>("SELECT * FROM reports ORDER BY created_at DESC")
            .fetch_all(pool)
            .await
    }

    /// File a new report
    pub async fn insert(
        reporter_id: UserId,
        target_type: &str,
        target_id: Uuid,
        reason_code: Option<&str>,
        reason_detail: Option<&str>,
        pool: &PgPool,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO reports (id, reporter_id, target_type, target_id, reason_code, reason_detail)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING *",
        )
        .bind(ReportId::new())
        .bind(reporter_id)
        .bind(target_type)
        .bind(target_id)
        .bind(reason_code)
        .bind(reason_detail)
        .fetch_one(pool)
        .await
    }

    /// Record the handling decision.
    pub async fn set_status(
        id: ReportId,
        status: ReportStatus,
        handled_by: UserId,
        resolution_note: Option<&str>,
        pool: &PgPool,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "UPDATE reports SET
               status = $2, handled_by = $3, handled_at = now(),
               resolution_note = $4, updated_at = now()
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .bind(handled_by)
        .bind(resolution_note)
        .fetch_one(pool)
        .await
    }
}
