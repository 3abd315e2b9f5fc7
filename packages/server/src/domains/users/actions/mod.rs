mod authenticate;
mod register;

pub use authenticate::authenticate_user;
pub use register::register_user;
