use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Access Token 수명 (초)
/// Access token lifetime in seconds
pub const ACCESS_TOKEN_TTL_SECS: i64 = 60;

/// Refresh Token 수명 (초, 7일)
/// Refresh token lifetime in seconds (7 days)
pub const REFRESH_TOKEN_TTL_SECS: i64 = 7 * 24 * 60 * 60;

/// 토큰 종류 (서명 키와 수명을 결정)
/// Token kind: selects the signing secret and the lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Access,
    Refresh,
}

impl TokenKind {
    pub fn lifetime(self) -> Duration {
        match self {
            TokenKind::Access => Duration::seconds(ACCESS_TOKEN_TTL_SECS),
            TokenKind::Refresh => Duration::seconds(REFRESH_TOKEN_TTL_SECS),
        }
    }
}

/// JWT Claims (토큰에 포함될 데이터)
/// JWT Claims (data to be included in token)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    /// 사용자 ID
    /// User ID
    #[schema(example = 1)]
    pub user_id: u64,

    /// 이메일
    /// Email
    #[schema(example = "a@x.com")]
    pub email: String,

    /// 발급 시간 (Unix timestamp)
    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// 만료 시간 (Unix timestamp)
    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// 토큰 고유 ID (같은 초에 발급돼도 토큰 문자열이 달라짐)
    /// Unique token id
    pub jti: String,
}

impl Claims {
    /// 새 Claims 생성 (만료 시간 자동 계산)
    /// Create new Claims, expiry derived from the token kind
    pub fn new(user_id: u64, email: String, kind: TokenKind, issued_at: DateTime<Utc>) -> Self {
        let iat = issued_at.timestamp();

        Self {
            user_id,
            email,
            iat,
            exp: iat + kind.lifetime().num_seconds(),
            jti: uuid::Uuid::new_v4().to_string(),
        }
    }
}
