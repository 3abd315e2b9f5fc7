pub mod actions;
pub mod models;

pub use models::admin_note::AdminNote;
pub use models::guide::{Guide, GuideAudience};
pub use models::report::{Report, ReportStatus};
