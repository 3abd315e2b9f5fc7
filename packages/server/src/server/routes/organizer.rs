//! Organizer-facing endpoints: event lifecycle, applicant decisions,
//! and reviews of stallholders.

use axum::extract::{Extension, Path};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::common::{ApplicationId, DomainError, EventId, ValidationCode};
use crate::domains::applications::actions::decide_application;
use crate::domains::applications::models::application::Application;
use crate::domains::events::actions::create_event;
use crate::domains::events::actions::get_event_for_organizer;
use crate::domains::events::actions::submit_event_for_review;
use crate::domains::events::actions::update_event;
use crate::domains::events::models::event::{Event, EventDraft};
use crate::domains::reviews::actions::create_review;
use crate::domains::reviews::models::review::Review;
use crate::domains::users::models::user::User;
use crate::server::app::AppState;
use crate::server::error::ApiResult;
use crate::server::middleware::AuthUser;
use crate::server::routes::current_user;

pub async fn list_events_handler(
    Extension(state): Extension<AppState>,
    auth: Option<Extension<AuthUser>>,
) -> ApiResult<Json<Vec<Event>>> {
    let user = current_user(&state, auth.map(|Extension(a)| a)).await?;
    user.require_organizer()?;

    let events = Event::list_for_organizer(user.id, &state.db_pool)
        .await
        .map_err(DomainError::from)?;
    Ok(Json(events))
}

pub async fn create_event_handler(
    Extension(state): Extension<AppState>,
    auth: Option<Extension<AuthUser>>,
    Json(draft): Json<EventDraft>,
) -> ApiResult<(StatusCode, Json<Event>)> {
    let user = current_user(&state, auth.map(|Extension(a)| a)).await?;
    let event = create_event(&user, draft, &state.db_pool).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

pub async fn get_event_handler(
    Extension(state): Extension<AppState>,
    auth: Option<Extension<AuthUser>>,
    Path(event_id): Path<EventId>,
) -> ApiResult<Json<Event>> {
    let user = current_user(&state, auth.map(|Extension(a)| a)).await?;
    let event = get_event_for_organizer(&user, event_id, &state.db_pool).await?;
    Ok(Json(event))
}

pub async fn update_event_handler(
    Extension(state): Extension<AppState>,
    auth: Option<Extension<AuthUser>>,
    Path(event_id): Path<EventId>,
    Json(draft): Json<EventDraft>,
) -> ApiResult<Json<Event>> {
    let user = current_user(&state, auth.map(|Extension(a)| a)).await?;
    let event = update_event(&user, event_id, draft, &state.db_pool).await?;
    Ok(Json(event))
}

pub async fn submit_event_handler(
    Extension(state): Extension<AppState>,
    auth: Option<Extension<AuthUser>>,
    Path(event_id): Path<EventId>,
) -> ApiResult<Json<Event>> {
    let user = current_user(&state, auth.map(|Extension(a)| a)).await?;
    let event = submit_event_for_review(&user, event_id, &state.db_pool).await?;
    Ok(Json(event))
}

pub async fn list_applications_handler(
    Extension(state): Extension<AppState>,
    auth: Option<Extension<AuthUser>>,
    Path(event_id): Path<EventId>,
) -> ApiResult<Json<Vec<Application>>> {
    let user = current_user(&state, auth.map(|Extension(a)| a)).await?;
    // Ownership check doubles as the 404 for foreign events
    get_event_for_organizer(&user, event_id, &state.db_pool).await?;

    let applications = Application::list_for_event(event_id, &state.db_pool)
        .await
        .map_err(DomainError::from)?;
    Ok(Json(applications))
}

pub async fn approve_application_handler(
    Extension(state): Extension<AppState>,
    auth: Option<Extension<AuthUser>>,
    Path(application_id): Path<ApplicationId>,
) -> ApiResult<Json<Application>> {
    let user = current_user(&state, auth.map(|Extension(a)| a)).await?;
    let application = decide_application(&user, application_id, true, &state.db_pool).await?;
    Ok(Json(application))
}

pub async fn reject_application_handler(
    Extension(state): Extension<AppState>,
    auth: Option<Extension<AuthUser>>,
    Path(application_id): Path<ApplicationId>,
) -> ApiResult<Json<Application>> {
    let user = current_user(&state, auth.map(|Extension(a)| a)).await?;
    let application = decide_application(&user, application_id, false, &state.db_pool).await?;
    Ok(Json(application))
}

#[derive(Deserialize)]
pub struct ReviewRequest {
    pub score: i32,
    #[serde(default)]
    pub comment: String,
}

/// Organizer reviews the stallholder behind one of their applications.
pub async fn review_stallholder_handler(
    Extension(state): Extension<AppState>,
    auth: Option<Extension<AuthUser>>,
    Path(application_id): Path<ApplicationId>,
    Json(req): Json<ReviewRequest>,
) -> ApiResult<(StatusCode, Json<Review>)> {
    let user = current_user(&state, auth.map(|Extension(a)| a)).await?;

    let Some(application) = Application::find_by_id(application_id, &state.db_pool)
        .await
        .map_err(DomainError::from)?
    else {
        return Err(DomainError::Invalid(ValidationCode::ApplicationNotFound).into());
    };
    get_event_for_organizer(&user, application.event_id, &state.db_pool).await?;

    let Some(target) = User::find_by_id(application.stallholder_id, &state.db_pool)
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
