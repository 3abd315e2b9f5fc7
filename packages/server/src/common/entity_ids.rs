//! Typed ID aliases for all domain entities.
//!
//! One marker type and alias per table. Using distinct types means the
//! compiler rejects a `UserId` where an `EventId` belongs.

pub use super::id::Id;

// ============================================================================
// Entity marker types
// ============================================================================

/// Marker type for User entities.
pub struct User;

/// Marker type for Event entities.
pub struct Event;

/// Marker type for Application entities.
pub struct Application;

/// Marker type for StallholderProfile entities.
pub struct StallholderProfile;

/// Marker type for OrganizerProfile entities.
pub struct OrganizerProfile;

/// Marker type for Message entities.
pub struct Message;

/// Marker type for Review entities.
pub struct Review;

/// Marker type for Report entities.
pub struct Report;

/// Marker type for AdminNote entities.
pub struct AdminNote;

/// Marker type for Guide entities.
pub struct Guide;

/// Marker type for Notification entities.
pub struct Notification;

// ============================================================================
// Type aliases - the primary API
// ============================================================================

/// Typed ID for User entities.
pub type UserId = Id<User>;

/// Typed ID for Event entities.
pub type EventId = Id<Event>;

/// Typed ID for Application entities.
pub type ApplicationId = Id<Application>;

/// Typed ID for StallholderProfile entities.
pub type StallholderProfileId = Id<StallholderProfile>;

/// Typed ID for OrganizerProfile entities.
pub type OrganizerProfileId = Id<OrganizerProfile>;

/// Typed ID for Message entities.
pub type MessageId = Id<Message>;

/// Typed ID for Review entities.
pub type ReviewId = Id<Review>;

/// Typed ID for Report entities.
pub type ReportId = Id<Report>;

/// Typed ID for AdminNote entities.
pub type AdminNoteId = Id<AdminNote>;

/// Typed ID for Guide entities.
pub type GuideId = Id<Guide>;

/// Typed ID for Notification entities.
pub type NotificationId = Id<Notification>;
