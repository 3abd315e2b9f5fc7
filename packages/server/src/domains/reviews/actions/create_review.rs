//! Create review action.

use sqlx::PgPool;
use tracing::info;

use crate::common::{DomainError, DomainResult, ValidationCode};
use crate::domains::applications::models::application::Application;
use crate::domains::events::models::event::Event;
use crate::domains::notifications::models::notification::{Notification, NotificationEvent};
use crate::domains::reviews::models::review::Review;
use crate::domains::users::models::user::User;

/// Rating floor below which the event's organizer is escalated to.
const LOW_SCORE_THRESHOLD: i32 = 2;

/// Leave a 1-5 rating on a completed application.
///
/// One review per (application, author). The target is always notified;
/// scores at or below the threshold additionally escalate to the event's
/// organizer. Review plus notifications commit atomically.
pub async fn create_review(
    application: &Application,
    author: &User,
    target: &User,
    score: i32,
    comment: &str,
    pool: &PgPool,
) -> DomainResult<Review> {
    if !(1..=5).contains(&score) {
        return Err(DomainError::Invalid(ValidationCode::ScoreInvalid));
    }

    let existing =
        Review::find_by_application_and_author(application.id, author.id, pool).await?;
    if existing.is_some() {
        return Err(DomainError::Invalid(ValidationCode::ReviewExists));
    }

    let event = Event::find_by_id(application.event_id, pool).await?;

    let mut tx = pool.begin().await?;
    let review =
        Review::insert_in_tx(application.id, author.id, target.id, score, comment, &mut tx)
            .await?;

    Notification::create_in_tx(
        target.id,
        NotificationEvent::ReviewPosted,
        "New review posted",
        &format!("Score: {score}/5"),
        Some("review"),
        Some(review.id.into_uuid()),
        &mut tx,
    )
    .await?;

    if score <= LOW_SCORE_THRESHOLD {
        if let Some(event) = &event {
            Notification::create_in_tx(
                event.organizer_id,
                NotificationEvent::LowRating,
                "Low rating received",
                &format!("A low-score review was posted for \"{}\".", event.title),
                Some("review"),
                Some(review.id.into_uuid()),
                &mut tx,
            )
            .await?;
        }
    }
    tx.commit().await?;

    info!(review_id = %review.id, score, "review created");
    Ok(review)
}
