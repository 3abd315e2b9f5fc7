//! Stallholder profile self-service update.

use sqlx::PgPool;
use tracing::info;

use crate::common::{DomainError, DomainResult, ValidationCode};
use crate::domains::profiles::models::stallholder_profile::StallholderProfile;
use crate::domains::users::models::user::User;

/// Update one's own stallholder profile fields.
pub async fn update_stallholder_profile(
    stallholder: &User,
    business_name: &str,
    genre: &str,
    bio: &str,
    website_url: Option<&str>,
    past_achievements: Option<&str>,
    pool: &PgPool,
) -> DomainResult<StallholderProfile> {
    stallholder.require_stallholder()?;

    let Some(profile) = StallholderProfile::find_by_user(stallholder.id, pool).await? else {
        return Err(DomainError::Invalid(ValidationCode::ProfileNotFound));
    };

    let profile = StallholderProfile::update_fields(
        profile.id,
        business_name,
        genre,
        bio,
        website_url,
        past_achievements,
        pool,
    )
    .await?;

    info!(profile_id = %profile.id, "stallholder profile updated");
    Ok(profile)
}
