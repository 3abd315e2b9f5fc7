//! Admin endpoints: event and profile moderation, reports, notes,
//! guide management, and account suspension.

use axum::extract::{Extension, Path};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::common::{DomainError, EventId, GuideId, ReportId, StallholderProfileId, UserId, ValidationCode};
use crate::domains::events::actions::moderate_event;
use crate::domains::events::models::event::Event;
use crate::domains::moderation::actions::{create_guide, delete_guide, update_guide};
use crate::domains::moderation::actions::create_admin_note;
use crate::domains::moderation::actions::update_report_status;
use crate::domains::moderation::actions::toggle_user_active;
use crate::domains::moderation::models::admin_note::AdminNote;
use crate::domains::moderation::models::guide::{Guide, GuideAudience};
use crate::domains::moderation::models::report::{Report, ReportStatus};
use crate::domains::profiles::actions::review_stallholder_profile;
use crate::domains::profiles::models::stallholder_profile::StallholderProfile;
use crate::server::app::AppState;
use crate::server::error::ApiResult;
use crate::server::middleware::AuthUser;
use crate::server::routes::auth::UserView;
use crate::server::routes::current_user;

pub async fn list_pending_events_handler(
    Extension(state): Extension<AppState>,
    auth: Option<Extension<AuthUser>>,
) -> ApiResult<Json<Vec<Event>>> {
    let user = current_user(&state, auth.map(|Extension(a)| a)).await?;
    user.require_admin()?;

    let events = Event::list_pending_review(&state.db_pool)
        .await
        .map_err(DomainError::from)?;
    Ok(Json(events))
}

pub async fn approve_event_handler(
    Extension(state): Extension<AppState>,
    auth: Option<Extension<AuthUser>>,
    Path(event_id): Path<EventId>,
) -> ApiResult<Json<Event>> {
    let user = current_user(&state, auth.map(|Extension(a)| a)).await?;
    let event = moderate_event(&user, event_id, true, &state.db_pool).await?;
    Ok(Json(event))
}

pub async fn reject_event_handler(
    Extension(state): Extension<AppState>,
    auth: Option<Extension<AuthUser>>,
    Path(event_id): Path<EventId>,
) -> ApiResult<Json<Event>> {
    let user = current_user(&state, auth.map(|Extension(a)| a)).await?;
    let event = moderate_event(&user, event_id, false, &state.db_pool).await?;
    Ok(Json(event))
}

pub async fn list_pending_profiles_handler(
    Extension(state): Extension<AppState>,
    auth: Option<Extension<AuthUser>>,
) -> ApiResult<Json<Vec<StallholderProfile>>> {
    let user = current_user(&state, auth.map(|Extension(a)| a)).await?;
    user.require_admin()?;

    let profiles = StallholderProfile::list_pending_review(&state.db_pool)
        .await
        .map_err(DomainError::from)?;
    Ok(Json(profiles))
}

#[derive(Deserialize, Default)]
pub struct ProfileReviewRequest {
    pub note: Option<String>,
}

pub async fn approve_profile_handler(
    Extension(state): Extension<AppState>,
    auth: Option<Extension<AuthUser>>,
    Path(profile_id): Path<StallholderProfileId>,
    Json(req): Json<ProfileReviewRequest>,
) -> ApiResult<Json<StallholderProfile>> {
    let user = current_user(&state, auth.map(|Extension(a)| a)).await?;
    let profile = review_stallholder_profile(
        &user,
        profile_id,
        true,
        req.note.as_deref(),
        &state.db_pool,
    )
    .await?;
    Ok(Json(profile))
}

pub async fn reject_profile_handler(
    Extension(state): Extension<AppState>,
    auth: Option<Extension<AuthUser>>,
    Path(profile_id): Path<StallholderProfileId>,
    Json(req): Json<ProfileReviewRequest>,
) -> ApiResult<Json<StallholderProfile>> {
    let user = current_user(&state, auth.map(|Extension(a)| a)).await?;
    let profile = review_stallholder_profile(
        &user,
        profile_id,
        false,
        req.note.as_deref(),
        &state.db_pool,
    )
    .await?;
    Ok(Json(profile))
}

pub async fn list_reports_handler(
    Extension(state): Extension<AppState>,
    auth: Option<Extension<AuthUser>>,
) -> ApiResult<Json<Vec<Report>>> {
    let user = current_user(&state, auth.map(|Extension(a)| a)).await?;
    user.require_admin()?;

    let reports = Report::list_all(&state.db_pool)
        .await
        .map_err(DomainError::from)?;
    Ok(Json(reports))
}

#[derive(Deserialize)]
pub struct ReportStatusRequest {
    pub status: String,
    pub resolution_note: Option<String>,
}

pub async fn update_report_status_handler(
    Extension(state): Extension<AppState>,
    auth: Option<Extension<AuthUser>>,
    Path(report_id): Path<ReportId>,
    Json(req): Json<ReportStatusRequest>,
) -> ApiResult<Json<Report>> {
    let user = current_user(&state, auth.map(|Extension(a)| a)).await?;
    let status = ReportStatus::parse(&req.status)
        .ok_or(DomainError::Invalid(ValidationCode::ReportStatusInvalid))?;

    let report = update_report_status(
        &user,
        report_id,
        status,
        req.resolution_note.as_deref(),
        &state.db_pool,
    )
    .await?;
    Ok(Json(report))
}

#[derive(Deserialize)]
pub struct AdminNoteRequest {
    pub target_type: String,
    pub target_id: Uuid,
    pub note: String,
}

pub async fn create_note_handler(
    Extension(state): Extension<AppState>,
    auth: Option<Extension<AuthUser>>,
    Json(req): Json<AdminNoteRequest>,
) -> ApiResult<(StatusCode, Json<AdminNote>)> {
    let user = current_user(&state, auth.map(|Extension(a)| a)).await?;
    let note = create_admin_note(
        &user,
        &req.target_type,
        req.target_id,
        &req.note,
        &state.db_pool,
    )
    .await?;
    Ok((StatusCode::CREATED, Json(note)))
}

#[derive(Deserialize)]
pub struct GuideRequest {
    pub target_role: String,
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub publish: bool,
}

pub async fn create_guide_handler(
    Extension(state): Extension<AppState>,
    auth: Option<Extension<AuthUser>>,
    Json(req): Json<GuideRequest>,
) -> ApiResult<(StatusCode, Json<Guide>)> {
    let user = current_user(&state, auth.map(|Extension(a)| a)).await?;
    let audience = GuideAudience::parse(&req.target_role)
        .ok_or(DomainError::Invalid(ValidationCode::GuideRoleInvalid))?;

    let guide = create_guide(
        &user,
        audience,
        &req.title,
        &req.body,
        req.publish,
        &state.db_pool,
    )
    .await?;
    Ok((StatusCode::CREATED, Json(guide)))
}

#[derive(Deserialize)]
pub struct GuideUpdateRequest {
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub publish: bool,
}

pub async fn update_guide_handler(
    Extension(state): Extension<AppState>,
    auth: Option<Extension<AuthUser>>,
    Path(guide_id): Path<GuideId>,
    Json(req): Json<GuideUpdateRequest>,
) -> ApiResult<Json<Guide>> {
    let user = current_user(&state, auth.map(|Extension(a)| a)).await?;
    let guide = update_guide(
        &user,
        guide_id,
        &req.title,
        &req.body,
        req.publish,
        &state.db_pool,
    )
    .await?;
    Ok(Json(guide))
}

pub async fn delete_guide_handler(
    Extension(state): Extension<AppState>,
    auth: Option<Extension<AuthUser>>,
    Path(guide_id): Path<GuideId>,
) -> ApiResult<StatusCode> {
    let user = current_user(&state, auth.map(|Extension(a)| a)).await?;
    delete_guide(&user, guide_id, &state.db_pool).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Deserialize)]
pub struct UserActiveRequest {
    pub is_active: bool,
}

pub async fn set_user_active_handler(
    Extension(state): Extension<AppState>,
    auth: Option<Extension<AuthUser>>,
    Path(user_id): Path<UserId>,
    Json(req): Json<UserActiveRequest>,
) -> ApiResult<Json<UserView>> {
    let user = current_user(&state, auth.map(|Extension(a)| a)).await?;
    let updated = toggle_user_active(&user, user_id, req.is_active, &state.db_pool).await?;
    Ok(Json(updated.into()))
}
