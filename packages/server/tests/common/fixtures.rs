//! Test fixtures for creating test data.
//!
//! These fixtures use the model and action methods directly.

use anyhow::Result;
use chrono::{Duration, Utc};
use server_core::domains::applications::actions::apply_to_event;
use server_core::domains::applications::models::application::Application;
use server_core::domains::events::actions::create_event;
use server_core::domains::events::models::event::{Event, EventDraft, EventStatus};
use server_core::domains::users::actions::register_user;
use server_core::domains::users::models::user::{User, UserRole};
use sqlx::PgPool;
use uuid::Uuid;

pub const TEST_PASSWORD: &str = "password123";

/// Unique email per call so tests never collide on the email constraint.
pub fn unique_email(prefix: &str) -> String {
    format!("{}-{}@test.example", prefix, Uuid::new_v4())
}

pub async fn create_user(pool: &PgPool, role: UserRole) -> Result<User> {
    let email = unique_email(role.as_str());
    let user = register_user(
        &email,
        TEST_PASSWORD,
        role,
        role == UserRole::Admin,
        pool,
    )
    .await?;
    Ok(user)
}

pub async fn create_stallholder(pool: &PgPool) -> Result<User> {
    create_user(pool, UserRole::Stallholder).await
}

pub async fn create_organizer(pool: &PgPool) -> Result<User> {
    create_user(pool, UserRole::Organizer).await
}

pub async fn create_admin(pool: &PgPool) -> Result<User> {
    create_user(pool, UserRole::Admin).await
}

/// A valid draft a month out, deadline before the start date.
pub fn event_draft(title: &str) -> EventDraft {
    let start = Utc::now() + Duration::days(30);
    EventDraft {
        title: title.to_string(),
        description: "A market event".to_string(),
        region: "north".to_string(),
        venue_address: "1 Market Square".to_string(),
        genre: "food".to_string(),
        start_date: start,
        end_date: start + Duration::days(1),
        application_deadline: start - Duration::days(7),
        capacity: 10,
    }
}

pub async fn create_draft_event(pool: &PgPool, organizer: &User, title: &str) -> Result<Event> {
    let event = create_event(organizer, event_draft(title), pool).await?;
    Ok(event)
}

/// Draft pushed straight to open, bypassing moderation.
pub async fn create_open_event(pool: &PgPool, organizer: &User, title: &str) -> Result<Event> {
    let event = create_draft_event(pool, organizer, title).await?;
    let event = Event::set_status(event.id, EventStatus::Open, pool).await?;
    Ok(event)
}

pub async fn create_application(
    pool: &PgPool,
    stallholder: &User,
    event: &Event,
) -> Result<Application> {
    let application = apply_to_event(stallholder, event.id, Some("test memo"), pool).await?;
    Ok(application)
}
