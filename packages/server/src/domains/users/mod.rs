pub mod actions;
pub mod models;
pub mod password;

pub use models::user::{User, UserRole};
