pub mod actions;
pub mod models;

pub use models::organizer_profile::OrganizerProfile;
pub use models::stallholder_profile::{ProfileReviewStatus, StallholderProfile};
