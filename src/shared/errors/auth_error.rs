use thiserror::Error;
use axum::{http::StatusCode, Json};
use serde_json::json;
use crate::shared::errors::StoreError;

/// Access Guard가 거절할 때 쓰는 공통 메시지 (원인을 구분하지 않음)
/// Single rejection message for every guard failure
pub const ACCESS_TOKEN_REJECTED: &str =
    "Access token expired or invalid. Please use /refresh-token endpoint to get a new access token.";

const INTERNAL_SERVER_ERROR: &str = "Internal server error";

/// 인증 관련 에러
/// Authentication-related errors
#[derive(Error, Debug)]
pub enum AuthError {
    /// 필수 입력 누락 또는 형식 오류
    /// Missing or malformed input
    #[error("{0}")]
    Validation(String),

    /// 이메일이 이미 존재함
    /// Email already registered
    #[error("User already exists")]
    DuplicateUser { email: String },

    /// 잘못된 이메일 또는 비밀번호 (원인 구분 없음)
    /// Unknown email or wrong password
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Refresh Token 서명/만료 검증 실패 또는 DB에 유효한 행이 없음
    /// Refresh token failed signature/expiry check or has no live row
    #[error("Invalid or expired refresh token")]
    InvalidOrExpiredRefreshToken,

    /// Authorization 헤더 누락 또는 형식 오류
    /// Missing or malformed Authorization header
    #[error("Missing or malformed authorization header")]
    MissingOrMalformedToken,

    /// Access Token 검증 실패 (위조, 만료 등)
    /// Access token failed verification
    #[error("Invalid or expired access token")]
    InvalidOrExpiredAccessToken,

    /// 비밀번호 해싱 실패
    /// Failed to hash password
    #[error("Failed to hash password: {0}")]
    PasswordHashingFailed(String),

    /// 데이터베이스 에러
    /// Database error
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 내부 서버 에러
    /// Internal server error
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AuthError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::Validation(_) | AuthError::DuplicateUser { .. } => StatusCode::BAD_REQUEST,
            AuthError::InvalidCredentials
            | AuthError::InvalidOrExpiredRefreshToken
            | AuthError::MissingOrMalformedToken
            | AuthError::InvalidOrExpiredAccessToken => StatusCode::UNAUTHORIZED,
            AuthError::PasswordHashingFailed(_)
            | AuthError::DatabaseError(_)
            | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 클라이언트에게 보여줄 메시지 (내부 정보 노출 없음)
    /// Message safe to show to the client
    pub fn public_message(&self) -> String {
        match self {
            AuthError::MissingOrMalformedToken | AuthError::InvalidOrExpiredAccessToken => {
                ACCESS_TOKEN_REJECTED.to_string()
            }
            AuthError::PasswordHashingFailed(_)
            | AuthError::DatabaseError(_)
            | AuthError::Internal(_) => INTERNAL_SERVER_ERROR.to_string(),
            _ => self.to_string(),
        }
    }
}

impl From<StoreError> for AuthError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateEmail { email } => AuthError::DuplicateUser { email },
            StoreError::Backend(e) => AuthError::DatabaseError(format!("{:#}", e)),
        }
    }
}

/// AuthError를 HTTP 응답으로 변환
/// Internal errors are logged here and returned opaquely
impl From<AuthError> for (StatusCode, Json<serde_json::Value>) {
    fn from(err: AuthError) -> Self {
        let status = err.status_code();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %err, "request failed with internal error");
        } else {
            tracing::debug!(error = %err, status = status.as_u16(), "request rejected");
        }

        (status, Json(json!({ "error": err.public_message() })))
    }
}
