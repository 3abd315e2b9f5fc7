//! Report handling.

use sqlx::PgPool;
use tracing::info;

use crate::common::{DomainError, DomainResult, ReportId, ValidationCode};
use crate::domains::moderation::models::report::{Report, ReportStatus};
use crate::domains::users::models::user::User;

/// Move a report through its handling states, stamping who handled it.
pub async fn update_report_status(
    admin: &User,
    report_id: ReportId,
    status: ReportStatus,
    resolution_note: Option<&str>,
    pool: &PgPool,
) -> DomainResult<Report> {
    admin.require_admin()?;

    let Some(report) = Report::find_by_id(report_id, pool).await? else {
        return Err(DomainError::Invalid(ValidationCode::ReportNotFound));
    };

    let report = Report::set_status(report.id, status, admin.id, resolution_note, pool).await?;
    info!(report_id = %report.id, status = %report.status, "report updated");
    Ok(report)
}
