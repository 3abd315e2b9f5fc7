//! Published guides, filtered by the viewer's role.

use axum::extract::Extension;
use axum::Json;

use crate::common::DomainError;
use crate::domains::moderation::models::guide::Guide;
use crate::server::app::AppState;
use crate::server::error::ApiResult;
use crate::server::middleware::AuthUser;
use crate::server::routes::current_user;

pub async fn list_guides_handler(
    Extension(state): Extension<AppState>,
    auth: Option<Extension<AuthUser>>,
) -> ApiResult<Json<Vec<Guide>>> {
    let user = current_user(&state, auth.map(|Extension(a)| a)).await?;

    let guides = Guide::list_published_for_role(user.role, &state.db_pool)
        .await
        .map_err(DomainError::from)?;
    Ok(Json(guides))
}
