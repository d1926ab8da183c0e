use thiserror::Error;

/// Credential Store 에러
/// Errors surfaced by a credential store implementation
#[derive(Error, Debug)]
pub enum StoreError {
    /// 이메일 유일성 제약 위반
    /// Email uniqueness constraint violated
    #[error("Email already exists: {email}")]
    DuplicateEmail { email: String },

    /// 그 외 저장소 에러 (연결, 쿼리 등)
    /// Any other backend failure
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}
