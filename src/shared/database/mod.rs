// Credential Store: 사용자 / Refresh Token 저장소
pub mod connection;
pub mod memory_store;
pub mod repositories;
pub mod store;

pub use connection::*;
pub use memory_store::*;
pub use repositories::*;
pub use store::*;
