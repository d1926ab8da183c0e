// All repositories module
pub mod auth;

pub use auth::*;
