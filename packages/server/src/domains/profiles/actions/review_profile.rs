//! Admin review of a stallholder profile.

use sqlx::PgPool;
use tracing::info;

use crate::common::{DomainError, DomainResult, StallholderProfileId, ValidationCode};
use crate::domains::notifications::models::notification::{Notification, NotificationEvent};
use crate::domains::profiles::models::stallholder_profile::{
    ProfileReviewStatus, StallholderProfile,
};
use crate::domains::users::models::user::User;

/// Approve or reject a stallholder profile.
///
/// Admin-only. Stamps reviewer id, timestamp, and note; the decision and
/// the owner's notification commit atomically.
pub async fn review_stallholder_profile(
    admin: &User,
    profile_id: StallholderProfileId,
    approved: bool,
    review_note: Option<&str>,
    pool: &PgPool,
) -> DomainResult<StallholderProfile> {
    admin.require_admin()?;

    let Some(profile) = StallholderProfile::find_by_id(profile_id, pool).await? else {
        return Err(DomainError::Invalid(ValidationCode::ProfileNotFound));
    };

    let status = if approved {
        ProfileReviewStatus::Approved
    } else {
        ProfileReviewStatus::Rejected
    };

    let mut tx = pool.begin().await?;
    let profile =
        StallholderProfile::set_review_in_tx(profile.id, status, admin.id, review_note, &mut tx)
            .await?;
    Notification::create_in_tx(
        profile.user_id,
        NotificationEvent::ModerationResult,
        "Profile review complete",
        "The review of your profile has been updated.",
        Some("stallholder_profile"),
        Some(profile.id.into_uuid()),
        &mut tx,
    )
    .await?;
    tx.commit().await?;

    info!(profile_id = %profile.id, approved, "stallholder profile reviewed");
    Ok(profile)
}
