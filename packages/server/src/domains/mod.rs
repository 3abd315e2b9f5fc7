// Business domains
pub mod applications;
pub mod events;
pub mod messages;
pub mod moderation;
pub mod notifications;
pub mod profiles;
pub mod reviews;
pub mod users;
