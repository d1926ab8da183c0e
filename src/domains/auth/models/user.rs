use chrono::{DateTime, Utc};

/// 사용자 모델 (DB 저장용)
/// User record. Created on registration, never updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    /// 저장된 그대로의 이메일 (대소문자 구분)
    /// Email exactly as stored (case-sensitive)
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}
