use async_trait::async_trait;
use chrono::{DateTime, Utc};
use crate::domains::auth::models::{RefreshToken, RefreshTokenCreate, User};
use crate::shared::database::{Database, RefreshTokenRepository, UserRepository};
use crate::shared::errors::StoreError;

/// PostgreSQL unique_violation
const UNIQUE_VIOLATION: &str = "23505";

/// Credential Store
/// 사용자와 Refresh Token을 저장하는 저장소 추상화
///
/// 세션 컨트롤러는 구현체를 생성 시점에 주입받습니다 (전역 커넥션 풀 없음).
/// The session controller receives an implementation at construction time.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// 이메일로 사용자 조회
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// 사용자 생성
    ///
    /// 이메일이 이미 있으면 `StoreError::DuplicateEmail`.
    /// 동시 가입 경쟁은 저장소의 유일성 제약으로 판정해야 합니다.
    async fn create_user(&self, email: &str, password_hash: &str) -> Result<User, StoreError>;

    /// Refresh Token 행 추가
    async fn insert_refresh_token(
        &self,
        user_id: u64,
        token: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), StoreError>;

    /// `token`과 일치하고 `expires_at > now`인 행만 반환
    async fn find_valid_refresh_token(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<RefreshToken>, StoreError>;

    /// 사용자의 모든 Refresh Token 만료 시각을 `at`으로 변경 (관리용)
    /// Administrative: set `expires_at = at` on every row of the user
    async fn expire_refresh_tokens_for_user(
        &self,
        user_id: u64,
        at: DateTime<Utc>,
    ) -> Result<u64, StoreError>;
}

/// PostgreSQL 기반 Credential Store
/// Credential store backed by the users / refresh_tokens tables
#[derive(Clone)]
pub struct PgCredentialStore {
    db: Database,
}

impl PgCredentialStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

fn is_unique_violation(err: &anyhow::Error) -> bool {
    match err.downcast_ref::<sqlx::Error>() {
        Some(sqlx::Error::Database(db_err)) => db_err.code().as_deref() == Some(UNIQUE_VIOLATION),
        _ => false,
    }
}

#[async_trait]
impl CredentialStore for PgCredentialStore {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let user_repo = UserRepository::new(self.db.pool().clone());
        Ok(user_repo.get_user_by_email(email).await?)
    }

    async fn create_user(&self, email: &str, password_hash: &str) -> Result<User, StoreError> {
        let user_repo = UserRepository::new(self.db.pool().clone());

        user_repo
            .create_user(email, password_hash)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    StoreError::DuplicateEmail { email: email.to_string() }
                } else {
                    StoreError::Backend(e)
                }
            })
    }

    async fn insert_refresh_token(
        &self,
        user_id: u64,
        token: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        let refresh_token_repo = RefreshTokenRepository::new(self.db.pool().clone());

        refresh_token_repo
            .create(RefreshTokenCreate {
                user_id,
                token: token.to_string(),
                expires_at,
            })
            .await?;

        Ok(())
    }

    async fn find_valid_refresh_token(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<RefreshToken>, StoreError> {
        let refresh_token_repo = RefreshTokenRepository::new(self.db.pool().clone());
        Ok(refresh_token_repo.find_valid(token, now).await?)
    }

    async fn expire_refresh_tokens_for_user(
        &self,
        user_id: u64,
        at: DateTime<Utc>,
    ) -> Result<u64, StoreError> {
        let refresh_token_repo = RefreshTokenRepository::new(self.db.pool().clone());
        Ok(refresh_token_repo.expire_all_for_user(user_id, at).await?)
    }
}
