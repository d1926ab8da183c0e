// 인증 서버 라이브러리
// Access/refresh token authentication server
pub mod docs;
pub mod domains;
pub mod routes;
pub mod shared;
