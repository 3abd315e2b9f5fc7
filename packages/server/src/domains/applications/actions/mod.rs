mod apply;
mod cancel;
mod decide;

pub use apply::apply_to_event;
pub use cancel::cancel_application;
pub use decide::decide_application;
