use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use crate::domains::auth::models::jwt::Claims;

// 회원가입 요청 모델
// Fields are optional so that an absent field surfaces as a validation error
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[schema(as = RegisterRequest)]
pub struct RegisterRequest {
    /// Email address
    /// 이메일 주소
    #[schema(example = "a@x.com")]
    pub email: Option<String>,

    /// Password (will be hashed)
    /// 비밀번호 (해싱됨)
    #[schema(example = "pw123456")]
    pub password: Option<String>,
}

// 로그인 요청 모델
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[schema(as = LoginRequest)]
pub struct LoginRequest {
    /// Email address
    /// 이메일 주소
    #[schema(example = "a@x.com")]
    pub email: Option<String>,

    /// Password
    /// 비밀번호
    #[schema(example = "pw123456")]
    pub password: Option<String>,
}

// 회원가입/로그인 응답 모델
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = SessionResponse)]
pub struct SessionResponse {
    /// Success message
    /// 성공 메시지
    #[schema(example = "Login successful")]
    pub message: String,

    /// JWT Access Token (1분)
    /// JWT Access Token (60 seconds)
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub access_token: String,

    /// JWT Refresh Token (7일, DB에 저장)
    /// JWT Refresh Token (7 days, stored in database)
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub refresh_token: String,

    #[schema(example = 1)]
    pub user_id: u64,
}

// 토큰 갱신 요청 모델
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = RefreshTokenRequest)]
pub struct RefreshTokenRequest {
    /// Refresh Token
    /// 리프레시 토큰
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub refresh_token: Option<String>,
}

// 토큰 갱신 응답 모델 (Access Token만 재발급)
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = RefreshTokenResponse)]
pub struct RefreshTokenResponse {
    /// Success message
    /// 성공 메시지
    pub message: String,

    /// 새 Access Token
    /// New Access Token
    pub access_token: String,
}

// 보호된 라우트 응답 모델
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = ProfileResponse)]
pub struct ProfileResponse {
    pub message: String,

    /// Access Token에서 디코딩한 Claims
    /// Claims decoded from the access token
    pub user: Claims,
}

/// 서비스 계층 결과 (회원가입/로그인 성공 시)
/// Outcome of a successful register/login
#[derive(Debug, Clone)]
pub struct SessionTokens {
    pub user_id: u64,
    pub access_token: String,
    pub refresh_token: String,
}
