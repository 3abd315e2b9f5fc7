//! Admin notes.

use sqlx::PgPool;
use uuid::Uuid;

use crate::common::{DomainError, DomainResult, ValidationCode};
use crate::domains::moderation::models::admin_note::AdminNote;
use crate::domains::users::models::user::User;

/// Targets an admin note may attach to.
const NOTE_TARGETS: &[&str] = &["user", "event"];

/// Attach an internal note to a user or event.
pub async fn create_admin_note(
    admin: &User,
    target_type: &str,
    target_id: Uuid,
    note: &str,
    pool: &PgPool,
) -> DomainResult<AdminNote> {
    admin.require_admin()?;
    if !NOTE_TARGETS.contains(&target_type) {
        return Err(DomainError::Invalid(ValidationCode::NoteTargetInvalid));
    }

    Ok(AdminNote::insert(admin.id, target_type, target_id, note, pool).await?)
}
