// Shared middleware (request extractors)
pub mod auth;
pub mod json_body;

pub use auth::*;
pub use json_body::*;
