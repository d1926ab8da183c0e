use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, StatusCode},
};
use crate::domains::auth::models::{Claims, TokenKind};
use crate::shared::services::AppState;
use crate::shared::errors::AuthError;

/// 인증된 사용자 정보 (Access Token에서 디코딩한 Claims)
/// Authenticated user: claims decoded from a currently valid access token
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub claims: Claims,
}

/// `Authorization: Bearer <token>` 에서 토큰만 추출
fn bearer_token(parts: &Parts) -> Result<&str, AuthError> {
    let header = parts
        .headers
        .get(AUTHORIZATION)
        .ok_or(AuthError::MissingOrMalformedToken)?
        .to_str()
        .map_err(|_| AuthError::MissingOrMalformedToken)?;

    header
        .strip_prefix("Bearer ")
        .ok_or(AuthError::MissingOrMalformedToken)
}

/// AuthenticatedUser를 Axum Extractor로 구현 (Access Guard)
///
/// 헤더 누락/형식 오류와 토큰 검증 실패는 내부적으로 다른 에러지만
/// 클라이언트에게는 같은 401 응답으로 보입니다.
///
/// 사용법:
/// ```ignore
/// pub async fn profile(authenticated_user: AuthenticatedUser) -> Json<ProfileResponse> {
///     let claims = authenticated_user.claims;
///     // ...
/// }
/// ```
#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = (StatusCode, axum::Json<serde_json::Value>);

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // 1. "Bearer <token>" 형식 파싱
        let token = bearer_token(parts).map_err(|e| -> Self::Rejection { e.into() })?;

        // 2. Access Token 검증 (서명 + 만료)
        let claims = state
            .auth_state
            .jwt_service
            .verify(TokenKind::Access, token)
            .ok_or(AuthError::InvalidOrExpiredAccessToken)
            .map_err(|e| -> Self::Rejection { e.into() })?;

        Ok(AuthenticatedUser { claims })
    }
}
