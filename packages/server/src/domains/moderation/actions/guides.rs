//! Guide management.

use sqlx::PgPool;
use tracing::info;

use crate::common::{DomainError, DomainResult, GuideId, ValidationCode};
use crate::domains::moderation::models::guide::{Guide, GuideAudience};
use crate::domains::users::models::user::User;

/// Create a guide, optionally publishing it immediately.
pub async fn create_guide(
    admin: &User,
    target_role: GuideAudience,
    title: &str,
    body: &str,
    publish: bool,
    pool: &PgPool,
) -> DomainResult<Guide> {
    admin.require_admin()?;

    let guide = Guide::insert(target_role, title, body, publish, pool).await?;
    info!(guide_id = %guide.id, publish, "guide created");
    Ok(guide)
}

/// Edit a guide's content and publication state.
pub async fn update_guide(
    admin: &User,
    guide_id: GuideId,
    title: &str,
    body: &str,
    publish: bool,
    pool: &PgPool,
) -> DomainResult<Guide> {
    admin.require_admin()?;

    let Some(guide) = Guide::find_by_id(guide_id, pool).await? else {
        return Err(DomainError::Invalid(ValidationCode::GuideNotFound));
    };

    let guide = Guide::update_fields(guide.id, title, body, publish, pool).await?;
    info!(guide_id = %guide.id, "guide updated");
    Ok(guide)
}

/// Remove a guide.
pub async fn delete_guide(admin: &User, guide_id: GuideId, pool: &PgPool) -> DomainResult<()> {
    admin.require_admin()?;

    let deleted = Guide::delete(guide_id, pool).await?;
    if deleted == 0 {
        return Err(DomainError::Invalid(ValidationCode::GuideNotFound));
    }
    info!(guide_id = %guide_id, "guide deleted");
    Ok(())
}
