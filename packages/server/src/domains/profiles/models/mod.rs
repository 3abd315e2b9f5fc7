pub mod organizer_profile;
pub mod stallholder_profile;

pub use organizer_profile::OrganizerProfile;
pub use stallholder_profile::{ProfileReviewStatus, StallholderProfile};
