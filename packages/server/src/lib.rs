// Fairstall - marketplace API core
//
// Backend for a marketplace connecting event organizers with stallholders.
// Architecture follows domain-driven design: each domain owns its models
// (SQL persistence) and its actions (business rules + notification side
// effects). Route handlers stay thin and map domain errors to HTTP.

pub mod common;
pub mod config;
pub mod domains;
pub mod server;

pub use config::*;
