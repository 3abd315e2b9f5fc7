pub mod actions;
pub mod models;

pub use models::notification::{DeliveryStatus, Notification, NotificationEvent};
