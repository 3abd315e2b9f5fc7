mod review_profile;
mod update_profile;

pub use review_profile::review_stallholder_profile;
pub use update_profile::update_stallholder_profile;
