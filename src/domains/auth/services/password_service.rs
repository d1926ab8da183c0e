use crate::shared::errors::AuthError;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use argon2::password_hash::{rand_core::OsRng, SaltString};

/// 비밀번호 해싱 서비스
/// Password hashing (Argon2id with the library's fixed default work factor)
#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordService;

impl PasswordService {
    pub fn new() -> Self {
        Self
    }

    /// 비밀번호 해싱 (호출마다 새 salt)
    /// Hash a password with a fresh random salt
    pub fn hash(&self, password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        let password_hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AuthError::PasswordHashingFailed(format!("Failed to hash password: {}", e)))?
            .to_string();

        Ok(password_hash)
    }

    /// 비밀번호 검증
    /// 불일치는 에러가 아니라 false
    pub fn verify(&self, password: &str, password_hash: &str) -> bool {
        let parsed_hash = match PasswordHash::new(password_hash) {
            Ok(hash) => hash,
            Err(e) => {
                tracing::warn!(error = %e, "stored password hash could not be parsed");
                return false;
            }
        };

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }
}
