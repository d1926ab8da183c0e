use chrono::{DateTime, Utc};

/// Refresh Token 모델 (DB 저장용)
/// Refresh Token record. The signed token is stored verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshToken {
    pub id: i64,
    pub user_id: u64,
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl RefreshToken {
    /// 만료 여부 (expires_at이 now 이하이면 무효)
    /// A row is usable only while `expires_at > now`
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at > now
    }
}

/// Refresh Token 생성 요청 (새 토큰 발급 시)
/// Refresh Token creation request (when issuing new token)
#[derive(Debug, Clone)]
pub struct RefreshTokenCreate {
    pub user_id: u64,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}
