pub mod notification;

pub use notification::{DeliveryStatus, Notification, NotificationEvent};
