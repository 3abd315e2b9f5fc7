pub mod admin_note;
pub mod guide;
pub mod report;

pub use admin_note::AdminNote;
pub use guide::{Guide, GuideAudience};
pub use report::{Report, ReportStatus};
