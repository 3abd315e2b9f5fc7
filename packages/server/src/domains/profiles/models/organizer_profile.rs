use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;

use crate::common::{OrganizerProfileId, UserId};

/// Organizer profile - SQL persistence layer (1:1 with users)
#[derive(sqlx::FromRow, Debug, Clone, Serialize)]
pub struct OrganizerProfile {
    pub id: OrganizerProfileId,
    pub user_id: UserId,
    pub organization_name: String,
    pub description: String,
    pub profile_image: Option<String>,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl OrganizerProfile {
    /// Find the profile belonging to a user
    pub async fn find_by_user(user_id: UserId, pool: &PgPool) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>("SELECT * FROM organizer_profiles WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }
}
