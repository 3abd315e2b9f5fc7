use axum::{extract::{Request, State}, http::HeaderMap, middleware::Next, response::Response};
use std::sync::Arc;

use crate::common::UserId;
use crate::domains::users::models::user::UserRole;
use crate::server::auth::SessionStore;

/// Authenticated user information from session
#[derive(Clone, Copy, Debug)]
pub struct AuthUser {
    pub user_id: UserId,
    pub role: UserRole,
}

/// Middleware to extract session and populate auth user
///
/// This middleware:
/// 1. Extracts session token from Authorization header
/// 2. Looks up session in SessionStore
/// 3. Stores AuthUser in request extensions
///
/// Note: This middleware does NOT block requests - it only extracts auth info.
/// Authorization checks happen in route handlers.
pub async fn session_auth_middleware(
    State(session_store): State<Arc<SessionStore>>,
    mut request: Request,
    next: Next,
) -> Response {
    let auth_user = extract_auth_user(request.headers(), session_store.as_ref()).await;

    if let Some(user) = auth_user {
        request.extensions_mut().insert(user);
    }

    next.run(request).await
}

/// Extract and verify auth user from request
async fn extract_auth_user(headers: &HeaderMap, session_store: &SessionStore) -> Option<AuthUser> {
    let auth_header = headers.get("authorization")?;
    let auth_str = auth_header.to_str().ok()?;

    // Remove "Bearer " prefix
    let token = auth_str.strip_prefix("Bearer ").unwrap_or(auth_str);

    let session = session_store.get_session(token).await?;

    Some(AuthUser {
        user_id: session.user_id,
        role: session.role,
    })
}
