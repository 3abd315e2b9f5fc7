mod mark_read;

pub use mark_read::mark_notification_read;
