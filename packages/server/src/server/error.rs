//! HTTP mapping for domain errors.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::common::{AuthzCode, DomainError};

/// Wrapper turning a [`DomainError`] into an HTTP response.
///
/// The body is always `{"error": "<code>"}`. Status codes:
/// - `login_required` -> 401
/// - other authorization codes -> 403
/// - `*_not_found` codes -> 404
/// - uniqueness conflicts -> 409
/// - other validation codes -> 400
/// - database / internal errors -> 500 (code `internal_error`)
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        ApiError(err)
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        ApiError(DomainError::Database(err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            DomainError::Unauthorized(AuthzCode::LoginRequired) => StatusCode::UNAUTHORIZED,
            DomainError::Unauthorized(_) => StatusCode::FORBIDDEN,
            DomainError::Invalid(code) if code.is_not_found() => StatusCode::NOT_FOUND,
            DomainError::Invalid(code) if code.is_conflict() => StatusCode::CONFLICT,
            DomainError::Invalid(_) => StatusCode::BAD_REQUEST,
            DomainError::Database(err) => {
                tracing::error!(error = %err, "database error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            DomainError::Internal(err) => {
                tracing::error!(error = %err, "internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(json!({ "error": self.0.code() }))).into_response()
    }
}

/// Result alias for route handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ValidationCode;

    #[test]
    fn login_required_is_401() {
        let resp = ApiError(DomainError::Unauthorized(AuthzCode::LoginRequired)).into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn ownership_failure_is_403() {
        let resp = ApiError(DomainError::Unauthorized(AuthzCode::EventNotOwned)).into_response();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn missing_entity_is_404() {
        let resp = ApiError(DomainError::Invalid(ValidationCode::EventNotFound)).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn conflict_is_409() {
        let resp = ApiError(DomainError::Invalid(ValidationCode::ApplicationExists)).into_response();
        assert_eq!(resp.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn plain_validation_is_400() {
        let resp = ApiError(DomainError::Invalid(ValidationCode::CapacityInvalid)).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
