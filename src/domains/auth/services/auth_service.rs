use std::sync::Arc;
use chrono::{TimeZone, Utc};
use crate::shared::database::CredentialStore;
use crate::shared::errors::AuthError;
use crate::shared::utils::Clock;
use crate::domains::auth::models::{
    LoginRequest, RefreshTokenRequest, RegisterRequest, SessionTokens, TokenKind, User,
};
use crate::domains::auth::services::{JwtService, PasswordService};

/// 빈 문자열도 누락으로 취급
fn required(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.is_empty())
}

// 인증 서비스 (세션 라이프사이클 컨트롤러)
// AuthService: register / login / refresh state transitions
//
// 모든 단계는 순서대로 await 되며, 첫 실패에서 바로 반환합니다.
#[derive(Clone)]
pub struct AuthService {
    store: Arc<dyn CredentialStore>,
    jwt_service: JwtService,
    password_service: PasswordService,
    clock: Arc<dyn Clock>,
}

impl AuthService {
    pub fn new(
        store: Arc<dyn CredentialStore>,
        jwt_service: JwtService,
        password_service: PasswordService,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            store,
            jwt_service,
            password_service,
            clock,
        }
    }

    // 회원가입
    // 검증 → 중복 확인 → 해싱 → 사용자 생성 → 토큰 쌍 발급/저장
    pub async fn register(&self, request: RegisterRequest) -> Result<SessionTokens, AuthError> {
        let (email, password) = match (required(request.email), required(request.password)) {
            (Some(email), Some(password)) => (email, password),
            _ => return Err(AuthError::Validation("Email and password are required".to_string())),
        };

        // 1. 이메일 중복 확인 (빠른 실패용, 최종 판정은 저장소 UNIQUE 제약)
        if self.store.find_user_by_email(&email).await?.is_some() {
            return Err(AuthError::DuplicateUser { email });
        }

        // 2. 비밀번호 해싱
        let password_hash = self.password_service.hash(&password)?;

        // 3. 사용자 생성
        let user = self.store.create_user(&email, &password_hash).await?;
        tracing::info!(user_id = user.id, "user registered");

        // 4. 토큰 발급
        self.issue_session(&user).await
    }

    // 로그인
    // 이메일 없음 / 비밀번호 불일치 모두 InvalidCredentials
    pub async fn login(&self, request: LoginRequest) -> Result<SessionTokens, AuthError> {
        let (email, password) = match (required(request.email), required(request.password)) {
            (Some(email), Some(password)) => (email, password),
            _ => return Err(AuthError::Validation("Email and password are required".to_string())),
        };

        let user = self
            .store
            .find_user_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !self.password_service.verify(&password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials);
        }

        // 기존 Refresh Token은 그대로 둠 (다중 세션 허용)
        let session = self.issue_session(&user).await?;
        tracing::info!(user_id = user.id, "user logged in");

        Ok(session)
    }

    /// Refresh Token으로 새 Access Token 발급
    /// 서명/만료 검증 AND 저장소의 유효한 행, 둘 다 통과해야 함
    ///
    /// Refresh Token은 교체(rotate)하지 않습니다.
    pub async fn refresh(&self, request: RefreshTokenRequest) -> Result<String, AuthError> {
        let refresh_token = required(request.refresh_token)
            .ok_or_else(|| AuthError::Validation("Refresh token is required".to_string()))?;

        // 1. 서명 + 만료 검증
        let claims = self
            .jwt_service
            .verify(TokenKind::Refresh, &refresh_token)
            .ok_or(AuthError::InvalidOrExpiredRefreshToken)?;

        // 2. 저장된 행 확인 (token 일치 AND expires_at > now)
        let stored = self
            .store
            .find_valid_refresh_token(&refresh_token, self.clock.now())
            .await?;

        if stored.is_none() {
            tracing::debug!(user_id = claims.user_id, "refresh token has no live row");
            return Err(AuthError::InvalidOrExpiredRefreshToken);
        }

        // 3. 새 Access Token 발급
        let (access_token, _) = self
            .jwt_service
            .issue(TokenKind::Access, claims.user_id, &claims.email)?;

        tracing::info!(user_id = claims.user_id, "access token refreshed");
        Ok(access_token)
    }

    // 토큰 쌍 발급 + Refresh Token 저장
    // Issue access + refresh tokens and persist a new refresh row
    async fn issue_session(&self, user: &User) -> Result<SessionTokens, AuthError> {
        let (access_token, _) = self
            .jwt_service
            .issue(TokenKind::Access, user.id, &user.email)?;
        let (refresh_token, refresh_claims) = self
            .jwt_service
            .issue(TokenKind::Refresh, user.id, &user.email)?;

        // 행의 만료 시각은 토큰 exp와 동일
        let expires_at = Utc
            .timestamp_opt(refresh_claims.exp, 0)
            .single()
            .ok_or_else(|| AuthError::Internal(format!("Invalid refresh token expiry: {}", refresh_claims.exp)))?;

        self.store
            .insert_refresh_token(user.id, &refresh_token, expires_at)
            .await?;

        Ok(SessionTokens {
            user_id: user.id,
            access_token,
            refresh_token,
        })
    }
}
