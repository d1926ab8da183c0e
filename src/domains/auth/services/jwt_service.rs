// src/domains/auth/services/jwt_service.rs
use std::sync::Arc;
use crate::shared::errors::AuthError;
use crate::shared::utils::Clock;
use crate::domains::auth::models::jwt::{Claims, TokenKind};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

/// 토큰 종류별 서명 키
#[derive(Clone)]
struct SigningKeys {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl SigningKeys {
    fn from_secret(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }
}

/// JWT 서비스
/// Token codec: two independent HS256 signing contexts (access / refresh)
///
/// 만료 판단은 주입된 Clock 기준으로 `now < exp` 를 엄격히 적용합니다.
/// jsonwebtoken 자체의 exp 검사(leeway 포함)는 끕니다.
#[derive(Clone)]
pub struct JwtService {
    access: SigningKeys,
    refresh: SigningKeys,
    clock: Arc<dyn Clock>,
}

impl JwtService {
    /// JWT Service 생성
    /// Create JWT Service with distinct access / refresh secrets
    pub fn new(access_secret: &str, refresh_secret: &str, clock: Arc<dyn Clock>) -> Self {
        Self {
            access: SigningKeys::from_secret(access_secret),
            refresh: SigningKeys::from_secret(refresh_secret),
            clock,
        }
    }

    fn keys(&self, kind: TokenKind) -> &SigningKeys {
        match kind {
            TokenKind::Access => &self.access,
            TokenKind::Refresh => &self.refresh,
        }
    }

    /// 토큰 발급
    /// Issue a signed token of `kind` for the user; returns the token and its claims
    pub fn issue(&self, kind: TokenKind, user_id: u64, email: &str) -> Result<(String, Claims), AuthError> {
        let claims = Claims::new(user_id, email.to_string(), kind, self.clock.now());

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.keys(kind).encoding_key)
            .map_err(|e| AuthError::Internal(format!("Failed to generate {:?} token: {}", kind, e)))?;

        Ok((token, claims))
    }

    /// 토큰 검증
    /// 서명 불일치, 형식 오류, 만료 모두 None (원인 구분 없음)
    pub fn verify(&self, kind: TokenKind, token: &str) -> Option<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;

        let token_data = match decode::<Claims>(token, &self.keys(kind).decoding_key, &validation) {
            Ok(data) => data,
            Err(e) => {
                tracing::debug!(?kind, error = %e, "token rejected");
                return None;
            }
        };

        let claims = token_data.claims;
        if self.clock.now().timestamp() < claims.exp {
            Some(claims)
        } else {
            tracing::debug!(?kind, exp = claims.exp, "token expired");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::auth::models::jwt::{ACCESS_TOKEN_TTL_SECS, REFRESH_TOKEN_TTL_SECS};
    use crate::shared::utils::ManualClock;
    use chrono::Duration;

    fn jwt_service() -> (JwtService, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::starting_now());
        let service = JwtService::new("access-secret", "refresh-secret", clock.clone());
        (service, clock)
    }

    #[test]
    fn test_access_token_verifies_immediately() {
        let (jwt, _clock) = jwt_service();

        let (token, issued) = jwt.issue(TokenKind::Access, 7, "a@x.com").unwrap();
        let claims = jwt.verify(TokenKind::Access, &token).unwrap();

        assert_eq!(claims, issued);
        assert_eq!(claims.user_id, 7);
        assert_eq!(claims.email, "a@x.com");
        assert_eq!(claims.exp - claims.iat, ACCESS_TOKEN_TTL_SECS);
        // header.claims.signature
        assert_eq!(token.split('.').count(), 3);
    }

    #[test]
    fn test_access_token_expires_after_sixty_seconds() {
        let (jwt, clock) = jwt_service();
        let (token, _) = jwt.issue(TokenKind::Access, 7, "a@x.com").unwrap();

        clock.advance(Duration::seconds(59));
        assert!(jwt.verify(TokenKind::Access, &token).is_some());

        // now == exp 이면 이미 만료
        clock.advance(Duration::seconds(1));
        assert!(jwt.verify(TokenKind::Access, &token).is_none());

        clock.advance(Duration::seconds(1));
        assert!(jwt.verify(TokenKind::Access, &token).is_none());
    }

    #[test]
    fn test_refresh_token_lives_seven_days() {
        let (jwt, clock) = jwt_service();
        let (token, claims) = jwt.issue(TokenKind::Refresh, 7, "a@x.com").unwrap();

        assert_eq!(claims.exp - claims.iat, REFRESH_TOKEN_TTL_SECS);

        clock.advance(Duration::days(7) - Duration::seconds(1));
        assert!(jwt.verify(TokenKind::Refresh, &token).is_some());

        clock.advance(Duration::seconds(1));
        assert!(jwt.verify(TokenKind::Refresh, &token).is_none());
    }

    #[test]
    fn test_kinds_use_separate_secrets() {
        let (jwt, _clock) = jwt_service();

        let (access, _) = jwt.issue(TokenKind::Access, 7, "a@x.com").unwrap();
        let (refresh, _) = jwt.issue(TokenKind::Refresh, 7, "a@x.com").unwrap();

        assert!(jwt.verify(TokenKind::Refresh, &access).is_none());
        assert!(jwt.verify(TokenKind::Access, &refresh).is_none());
    }

    #[test]
    fn test_forged_and_malformed_tokens_are_rejected() {
        let (jwt, clock) = jwt_service();
        let forger = JwtService::new("wrong-secret", "refresh-secret", clock);

        let (forged, _) = forger.issue(TokenKind::Access, 7, "a@x.com").unwrap();
        assert!(jwt.verify(TokenKind::Access, &forged).is_none());

        assert!(jwt.verify(TokenKind::Access, "not.a.jwt").is_none());
        assert!(jwt.verify(TokenKind::Access, "").is_none());

        let (token, _) = jwt.issue(TokenKind::Access, 7, "a@x.com").unwrap();
        let mut tampered = token.clone();
        tampered.push('x');
        assert!(jwt.verify(TokenKind::Access, &tampered).is_none());
    }

    #[test]
    fn test_tokens_issued_in_same_second_differ() {
        let (jwt, _clock) = jwt_service();

        let (first, _) = jwt.issue(TokenKind::Access, 7, "a@x.com").unwrap();
        let (second, _) = jwt.issue(TokenKind::Access, 7, "a@x.com").unwrap();

        assert_ne!(first, second);
    }
}
