mod guides;
mod notes;
mod reports;
mod users;

pub use guides::{create_guide, delete_guide, update_guide};
pub use notes::create_admin_note;
pub use reports::update_report_status;
pub use users::toggle_user_active;
