//! Domain error type shared by every action.
//!
//! Two recoverable kinds: authorization failures (role/ownership mismatch)
//! and validation failures (bad field, wrong state for a transition,
//! uniqueness violation). Both carry a closed code enum whose `as_str()`
//! is the stable wire string surfaced to clients.

use thiserror::Error;

/// Result alias used throughout the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Authorization failure codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthzCode {
    LoginRequired,
    RoleRequiredOrganizer,
    RoleRequiredStallholder,
    RoleRequiredAdmin,
    EventNotOwned,
    ApplicationNotOwned,
    Forbidden,
}

impl AuthzCode {
    /// Stable wire string for this code.
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthzCode::LoginRequired => "login_required",
            AuthzCode::RoleRequiredOrganizer => "role_required_organizer",
            AuthzCode::RoleRequiredStallholder => "role_required_stallholder",
            AuthzCode::RoleRequiredAdmin => "role_required_admin",
            AuthzCode::EventNotOwned => "event_not_owned",
            AuthzCode::ApplicationNotOwned => "application_not_owned",
            AuthzCode::Forbidden => "forbidden",
        }
    }
}

impl std::fmt::Display for AuthzCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation failure codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationCode {
    // Registration / login
    EmailRequired,
    EmailInvalid,
    EmailExists,
    PasswordTooShort,
    PasswordTooLong,
    RoleInvalid,
    AdminRegistrationNotAllowed,
    InvalidCredentials,
    InactiveAccount,
    UserNotFound,
    // Events
    TitleRequired,
    CapacityInvalid,
    DateOrderInvalid,
    DeadlineInvalid,
    EventNotFound,
    EventNotEditable,
    EventStatusInvalid,
    EventNotOpen,
    // Applications
    ApplicationNotFound,
    ApplicationExists,
    ApplicationAlreadyDecided,
    ApplicationNotCancellable,
    ApplicationNotApproved,
    // Profiles
    ProfileNotFound,
    // Messages
    ContentRequired,
    // Reviews
    ScoreInvalid,
    ReviewExists,
    // Moderation
    ReportNotFound,
    ReportStatusInvalid,
    NoteTargetInvalid,
    GuideRoleInvalid,
    GuideNotFound,
    // Notifications
    NotificationNotFound,
}

impl ValidationCode {
    /// Stable wire string for this code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationCode::EmailRequired => "email_required",
            ValidationCode::EmailInvalid => "email_invalid",
            ValidationCode::EmailExists => "email_exists",
            ValidationCode::PasswordTooShort => "password_too_short",
            ValidationCode::PasswordTooLong => "password_too_long",
            ValidationCode::RoleInvalid => "role_invalid",
            ValidationCode::AdminRegistrationNotAllowed => "admin_registration_not_allowed",
            ValidationCode::InvalidCredentials => "invalid_credentials",
            ValidationCode::InactiveAccount => "inactive_account",
            ValidationCode::UserNotFound => "user_not_found",
            ValidationCode::TitleRequired => "title_required",
            ValidationCode::CapacityInvalid => "capacity_invalid",
            ValidationCode::DateOrderInvalid => "date_order_invalid",
            ValidationCode::DeadlineInvalid => "deadline_invalid",
            ValidationCode::EventNotFound => "event_not_found",
            ValidationCode::EventNotEditable => "event_not_editable",
            ValidationCode::EventStatusInvalid => "event_status_invalid",
            ValidationCode::EventNotOpen => "event_not_open",
            ValidationCode::ApplicationNotFound => "application_not_found",
            ValidationCode::ApplicationExists => "application_exists",
            ValidationCode::ApplicationAlreadyDecided => "application_already_decided",
            ValidationCode::ApplicationNotCancellable => "application_not_cancellable",
            ValidationCode::ApplicationNotApproved => "application_not_approved",
            ValidationCode::ProfileNotFound => "profile_not_found",
            ValidationCode::ContentRequired => "content_required",
            ValidationCode::ScoreInvalid => "score_invalid",
            ValidationCode::ReviewExists => "review_exists",
            ValidationCode::ReportNotFound => "report_not_found",
            ValidationCode::ReportStatusInvalid => "report_status_invalid",
            ValidationCode::NoteTargetInvalid => "note_target_invalid",
            ValidationCode::GuideRoleInvalid => "guide_role_invalid",
            ValidationCode::GuideNotFound => "guide_not_found",
            ValidationCode::NotificationNotFound => "notification_not_found",
        }
    }

    /// Whether this code names a missing entity (maps to 404).
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ValidationCode::UserNotFound
                | ValidationCode::EventNotFound
                | ValidationCode::ApplicationNotFound
                | ValidationCode::ProfileNotFound
                | ValidationCode::ReportNotFound
                | ValidationCode::GuideNotFound
                | ValidationCode::NotificationNotFound
        )
    }

    /// Whether this code names a uniqueness conflict (maps to 409).
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            ValidationCode::EmailExists
                | ValidationCode::ApplicationExists
                | ValidationCode::ReviewExists
        )
    }
}

impl std::fmt::Display for ValidationCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors produced by the domain action layer.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("unauthorized: {0}")]
    Unauthorized(AuthzCode),

    #[error("validation failed: {0}")]
    Invalid(ValidationCode),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl DomainError {
    /// The wire code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::Unauthorized(code) => code.as_str(),
            DomainError::Invalid(code) => code.as_str(),
            DomainError::Database(_) | DomainError::Internal(_) => "internal_error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_render_legacy_strings() {
        assert_eq!(
            ValidationCode::ApplicationAlreadyDecided.as_str(),
            "application_already_decided"
        );
        assert_eq!(
            AuthzCode::RoleRequiredOrganizer.as_str(),
            "role_required_organizer"
        );
    }

    #[test]
    fn not_found_and_conflict_classes() {
        assert!(ValidationCode::EventNotFound.is_not_found());
        assert!(ValidationCode::ApplicationExists.is_conflict());
        assert!(!ValidationCode::CapacityInvalid.is_not_found());
        assert!(!ValidationCode::CapacityInvalid.is_conflict());
    }

    #[test]
    fn error_code_passthrough() {
        let err = DomainError::Invalid(ValidationCode::EventNotOpen);
        assert_eq!(err.code(), "event_not_open");
    }
}
