// Shared errors
pub mod auth_error;
pub mod store_error;

pub use auth_error::*;
pub use store_error::*;
