use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{PgPool, Postgres, Transaction};

use crate::common::{StallholderProfileId, UserId};

/// Admin review state of a stallholder profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, Default)]
#[sqlx(type_name = "profile_review_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ProfileReviewStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl ProfileReviewStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileReviewStatus::Pending => "pending",
            ProfileReviewStatus::Approved => "approved",
            ProfileReviewStatus::Rejected => "rejected",
        }
    }
}

impl std::fmt::Display for ProfileReviewStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stallholder profile - SQL persistence layer (1:1 with users)
#[derive(sqlx::FromRow, Debug, Clone, Serialize)]
pub struct StallholderProfile {
    pub id: StallholderProfileId,
    pub user_id: UserId,
    pub business_name: String,
    pub genre: String,
    pub bio: String,
    pub profile_image: Option<String>,
    pub past_achievements: Option<String>,
    pub website_url: Option<String>,
    pub review_status: ProfileReviewStatus,
    pub reviewed_by: Option<UserId>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub review_note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl StallholderProfile {
    /// Find profile by ID
    pub async fn find_by_id(
        id: StallholderProfileId,
        pool: &PgPool,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>("SELECT * FROM stallholder_profiles WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the profile belonging to a user
    pub async fn find_by_user(user_id: UserId, pool: &PgPool) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>("SELECT * FROM stallholder_profiles WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Profiles awaiting admin review, oldest first
    pub async fn list_pending_review(pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM stallholder_profiles
             WHERE review_status = 'pending' ORDER BY created_at ASC",
        )
        .fetch_all(pool)
        .await
    }

    /// Overwrite the stallholder-editable fields.
    pub async fn update_fields(
        id: StallholderProfileId,
        business_name: &str,
        genre: &str,
        bio: &str,
        website_url: Option<&str>,
        past_achievements: Option<&str>,
        pool: &PgPool,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "UPDATE stallholder_profiles SET
               business_name = $2, genre = $3, bio = $4,
               website_url = $5, past_achievements = $6, updated_at = now()
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(business_name)
        .bind(genre)
        .bind(bio)
        .bind(website_url)
        .bind(past_achievements)
        .fetch_one(pool)
        .await
    }

    /// Record the admin's review decision inside an open transaction.
    pub async fn set_review_in_tx(
        id: StallholderProfileId,
        status: ProfileReviewStatus,
        reviewer: UserId,
        note: Option<&str>,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "UPDATE stallholder_profiles SET
               review_status = $2, reviewed_by = $3, reviewed_at = now(),
               review_note = $4, updated_at = now()
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .bind(reviewer)
        .bind(note)
        .fetch_one(&mut **tx)
        .await
    }
}
