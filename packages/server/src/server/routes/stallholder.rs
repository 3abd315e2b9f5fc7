//! Stallholder-facing endpoints: event search, applications, profile,
//! and reviews of organizers.

use axum::extract::{Extension, Path, Query};
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;

use crate::common::{ApplicationId, AuthzCode, DomainError, EventId, ValidationCode};
use crate::domains::applications::actions::apply_to_event;
use crate::domains::applications::actions::cancel_application;
use crate::domains::applications::models::application::Application;
use crate::domains::events::models::event::{Event, EventStatus};
use crate::domains::profiles::actions::update_stallholder_profile;
use crate::domains::profiles::models::stallholder_profile::StallholderProfile;
use crate::domains::reviews::actions::create_review;
use crate::domains::reviews::models::review::Review;
use crate::domains::users::models::user::User;
use crate::server::app::AppState;
use crate::server::error::ApiResult;
use crate::server::middleware::AuthUser;
use crate::server::routes::current_user;
use crate::server::routes::organizer::ReviewRequest;

#[derive(Deserialize)]
pub struct EventSearchQuery {
    pub region: Option<String>,
    pub genre: Option<String>,
    pub date: Option<NaiveDate>,
}

pub async fn search_events_handler(
    Extension(state): Extension<AppState>,
    auth: Option<Extension<AuthUser>>,
    Query(query): Query<EventSearchQuery>,
) -> ApiResult<Json<Vec<Event>>> {
    let user = current_user(&state, auth.map(|Extension(a)| a)).await?;
    user.require_stallholder()?;

    let events = Event::search_open(
        query.region.as_deref(),
        query.genre.as_deref(),
        query.date,
        &state.db_pool,
    )
    .await
    .map_err(DomainError::from)?;
    Ok(Json(events))
}

/// Stallholders only see events that are open for applications.
pub async fn get_event_handler(
    Extension(state): Extension<AppState>,
    auth: Option<Extension<AuthUser>>,
    Path(event_id): Path<EventId>,
) -> ApiResult<Json<Event>> {
    let user = current_user(&state, auth.map(|Extension(a)| a)).await?;
    user.require_stallholder()?;

    let event = Event::find_by_id(event_id, &state.db_pool)
        .await
        .map_err(DomainError::from)?
        .filter(|e| e.status == EventStatus::Open)
        .ok_or(DomainError::Invalid(ValidationCode::EventNotFound))?;
    Ok(Json(event))
}

#[derive(Deserialize)]
pub struct ApplyRequest {
    pub memo: Option<String>,
}

pub async fn apply_handler(
    Extension(state): Extension<AppState>,
    auth: Option<Extension<AuthUser>>,
    Path(event_id): Path<EventId>,
    Json(req): Json<ApplyRequest>,
) -> ApiResult<(StatusCode, Json<Application>)> {
    let user = current_user(&state, auth.map(|Extension(a)| a)).await?;
    let application =
        apply_to_event(&user, event_id, req.memo.as_deref(), &state.db_pool).await?;
    Ok((StatusCode::CREATED, Json(application)))
}

pub async fn list_applications_handler(
    Extension(state): Extension<AppState>,
    auth: Option<Extension<AuthUser>>,
) -> ApiResult<Json<Vec<Application>>> {
    let user = current_user(&state, auth.map(|Extension(a)| a)).await?;
    user.require_stallholder()?;

    let applications = Application::list_for_stallholder(user.id, &state.db_pool)
        .await
        .map_err(DomainError::from)?;
    Ok(Json(applications))
}

pub async fn cancel_application_handler(
    Extension(state): Extension<AppState>,
    auth: Option<Extension<AuthUser>>,
    Path(application_id): Path<ApplicationId>,
) -> ApiResult<Json<Application>> {
    let user = current_user(&state, auth.map(|Extension(a)| a)).await?;
    let application = cancel_application(&user, application_id, &state.db_pool).await?;
    Ok(Json(application))
}

pub async fn get_profile_handler(
    Extension(state): Extension<AppState>,
    auth: Option<Extension<AuthUser>>,
) -> ApiResult<Json<StallholderProfile>> {
    let user = current_user(&state, auth.map(|Extension(a)| a)).await?;
    user.require_stallholder()?;

    let profile = StallholderProfile::find_by_user(user.id, &state.db_pool)
        .await
        .map_err(DomainError::from)?
        .ok_or(DomainError::Invalid(ValidationCode::ProfileNotFound))?;
    Ok(Json(profile))
}

#[derive(Deserialize)]
pub struct ProfileUpdateRequest {
    pub business_name: String,
    pub genre: String,
    pub bio: String,
    pub website_url: Option<String>,
    pub past_achievements: Option<String>,
}

pub async fn update_profile_handler(
    Extension(state): Extension<AppState>,
    auth: Option<Extension<AuthUser>>,
    Json(req): Json<ProfileUpdateRequest>,
) -> ApiResult<Json<StallholderProfile>> {
    let user = current_user(&state, auth.map(|Extension(a)| a)).await?;
    let profile = update_stallholder_profile(
        &user,
        &req.business_name,
        &req.genre,
        &req.bio,
        req.website_url.as_deref(),
        req.past_achievements.as_deref(),
        &state.db_pool,
    )
    .await?;
    Ok(Json(profile))
}

/// Stallholder reviews the organizer of an event they applied to.
pub async fn review_organizer_handler(
    Extension(state): Extension<AppState>,
    auth: Option<Extension<AuthUser>>,
    Path(application_id): Path<ApplicationId>,
    Json(req): Json<ReviewRequest>,
) -> ApiResult<(StatusCode, Json<Review>)> {
    let user = current_user(&state, auth.map(|Extension(a)| a)).await?;
    user.require_stallholder()?;

    let Some(application) = Application::find_by_id(application_id, &state.db_pool)
        .await
        .map_err(DomainError::from)?
    else {
        return Err(DomainError::Invalid(ValidationCode::ApplicationNotFound).into());
    };
    if application.stallholder_id != user.id {
        return Err(DomainError::Unauthorized(AuthzCode::ApplicationNotOwned).into());
    }

    let Some(event) = Event::find_by_id(application.event_id, &state.db_pool)
        .await
        .map_err(DomainError::from)?
    else {
        return Err(DomainError::Invalid(ValidationCode::EventNotFound).into());
    };
    let Some(target) = User::find_by_id(event.organizer_id, &state.db_pool)
        .await
        .map_err(DomainError::from)?
    else {
        return Err(DomainError::Invalid(ValidationCode::UserNotFound).into());
    };

    let review = create_review(
        &application,
        &user,
        &target,
        req.score,
        &req.comment,
        &state.db_pool,
    )
    .await?;
    Ok((StatusCode::CREATED, Json(review)))
}
