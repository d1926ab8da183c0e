use anyhow::anyhow;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use crate::domains::auth::models::{RefreshToken, User};
use crate::shared::database::CredentialStore;
use crate::shared::errors::StoreError;

/// 메모리 기반 Credential Store
/// In-process credential store
///
/// DB 없이 서버를 띄우거나 테스트 더블로 사용합니다.
/// 하나의 Mutex 아래에서 중복 검사와 삽입이 함께 이루어지므로
/// 이메일 유일성은 PostgreSQL의 UNIQUE 제약과 같은 원자성을 가집니다.
#[derive(Default)]
pub struct MemoryCredentialStore {
    tables: Mutex<Tables>,
}

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    refresh_tokens: Vec<RefreshToken>,
    last_user_id: u64,
    last_refresh_token_id: i64,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 저장된 Refresh Token 행 개수
    pub fn refresh_token_count(&self) -> usize {
        self.tables.lock().refresh_tokens.len()
    }

    pub fn user_count(&self) -> usize {
        self.tables.lock().users.len()
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let tables = self.tables.lock();
        Ok(tables.users.iter().find(|u| u.email == email).cloned())
    }

    async fn create_user(&self, email: &str, password_hash: &str) -> Result<User, StoreError> {
        let mut tables = self.tables.lock();

        if tables.users.iter().any(|u| u.email == email) {
            return Err(StoreError::DuplicateEmail { email: email.to_string() });
        }

        tables.last_user_id += 1;
        let user = User {
            id: tables.last_user_id,
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            created_at: Utc::now(),
        };
        tables.users.push(user.clone());

        Ok(user)
    }

    async fn insert_refresh_token(
        &self,
        user_id: u64,
        token: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        let mut tables = self.tables.lock();

        // refresh_tokens.user_id → users.id 외래 키
        if !tables.users.iter().any(|u| u.id == user_id) {
            return Err(StoreError::Backend(anyhow!(
                "refresh token references unknown user id {}",
                user_id
            )));
        }

        tables.last_refresh_token_id += 1;
        let row = RefreshToken {
            id: tables.last_refresh_token_id,
            user_id,
            token: token.to_string(),
            expires_at,
            created_at: Utc::now(),
        };
        tables.refresh_tokens.push(row);

        Ok(())
    }

    async fn find_valid_refresh_token(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<RefreshToken>, StoreError> {
        let tables = self.tables.lock();
        Ok(tables
            .refresh_tokens
            .iter()
            .find(|t| t.token == token && t.is_valid_at(now))
            .cloned())
    }

    async fn expire_refresh_tokens_for_user(
        &self,
        user_id: u64,
        at: DateTime<Utc>,
    ) -> Result<u64, StoreError> {
        let mut tables = self.tables.lock();
        let mut affected = 0;

        for row in tables.refresh_tokens.iter_mut().filter(|t| t.user_id == user_id) {
            row.expires_at = at;
            affected += 1;
        }

        Ok(affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[tokio::test]
    async fn test_duplicate_email_is_rejected() {
        let store = MemoryCredentialStore::new();

        let first = store.create_user("a@x.com", "hash").await.unwrap();
        assert_eq!(first.id, 1);

        let second = store.create_user("a@x.com", "other").await;
        assert!(matches!(second, Err(StoreError::DuplicateEmail { .. })));
        assert_eq!(store.user_count(), 1);
    }

    #[tokio::test]
    async fn test_email_lookup_is_case_sensitive() {
        let store = MemoryCredentialStore::new();
        store.create_user("a@x.com", "hash").await.unwrap();

        assert!(store.find_user_by_email("a@x.com").await.unwrap().is_some());
        assert!(store.find_user_by_email("A@X.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_valid_refresh_token_respects_expiry() {
        let store = MemoryCredentialStore::new();
        let user = store.create_user("a@x.com", "hash").await.unwrap();
        let now = Utc::now();
        let expires_at = now + Duration::days(7);

        store.insert_refresh_token(user.id, "token-1", expires_at).await.unwrap();

        let found = store.find_valid_refresh_token("token-1", now).await.unwrap();
        assert_eq!(found.map(|t| t.user_id), Some(user.id));

        // expires_at == now 이면 이미 무효
        assert!(store.find_valid_refresh_token("token-1", expires_at).await.unwrap().is_none());
        assert!(store.find_valid_refresh_token("token-2", now).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_refresh_token_requires_existing_user() {
        let store = MemoryCredentialStore::new();

        let result = store.insert_refresh_token(42, "token", Utc::now()).await;
        assert!(matches!(result, Err(StoreError::Backend(_))));
        assert_eq!(store.refresh_token_count(), 0);
    }

    #[tokio::test]
    async fn test_expire_refresh_tokens_for_user() {
        let store = MemoryCredentialStore::new();
        let alice = store.create_user("alice@x.com", "hash").await.unwrap();
        let bob = store.create_user("bob@x.com", "hash").await.unwrap();
        let now = Utc::now();

        store.insert_refresh_token(alice.id, "a1", now + Duration::days(7)).await.unwrap();
        store.insert_refresh_token(alice.id, "a2", now + Duration::days(7)).await.unwrap();
        store.insert_refresh_token(bob.id, "b1", now + Duration::days(7)).await.unwrap();

        let affected = store
            .expire_refresh_tokens_for_user(alice.id, now - Duration::days(1))
            .await
            .unwrap();

        assert_eq!(affected, 2);
        assert!(store.find_valid_refresh_token("a1", now).await.unwrap().is_none());
        assert!(store.find_valid_refresh_token("a2", now).await.unwrap().is_none());
        assert!(store.find_valid_refresh_token("b1", now).await.unwrap().is_some());
    }
}
