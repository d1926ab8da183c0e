use crate::domains::auth::models::{
    LoginRequest, ProfileResponse, RefreshTokenRequest, RefreshTokenResponse,
    RegisterRequest, SessionResponse,
};
use crate::shared::services::AppState;
use crate::shared::errors::AuthError;
use axum::{extract::State, http::StatusCode, Json};
use crate::shared::middleware::{AuthenticatedUser, JsonBody};

type ErrorResponse = (StatusCode, Json<serde_json::Value>);

// 회원가입 핸들러
#[utoipa::path(
    post,
    path = "/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered successfully", body = SessionResponse),
        (status = 400, description = "Missing email/password or user already exists"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Auth"
)]
pub async fn register(
    State(app_state): State<AppState>,
    JsonBody(request): JsonBody<RegisterRequest>,
) -> Result<(StatusCode, Json<SessionResponse>), ErrorResponse> {
    let session = app_state
        .auth_state
        .auth_service
        .register(request)
        .await
        .map_err(|e: AuthError| -> ErrorResponse { e.into() })?;

    Ok((
        StatusCode::CREATED,
        Json(SessionResponse {
            message: "User registered successfully".to_string(),
            access_token: session.access_token,
            refresh_token: session.refresh_token,
            user_id: session.user_id,
        }),
    ))
}

// 로그인 핸들러
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = SessionResponse),
        (status = 400, description = "Missing email/password"),
        (status = 401, description = "Invalid credentials"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Auth"
)]
pub async fn login(
    State(app_state): State<AppState>,
    JsonBody(request): JsonBody<LoginRequest>,
) -> Result<Json<SessionResponse>, ErrorResponse> {
    let session = app_state
        .auth_state
        .auth_service
        .login(request)
        .await
        .map_err(|e: AuthError| -> ErrorResponse { e.into() })?;

    Ok(Json(SessionResponse {
        message: "Login successful".to_string(),
        access_token: session.access_token,
        refresh_token: session.refresh_token,
        user_id: session.user_id,
    }))
}

/// 토큰 갱신 핸들러
/// Refresh token handler (access token only, refresh token is not rotated)
#[utoipa::path(
    post,
    path = "/refresh-token",
    request_body = RefreshTokenRequest,
    responses(
        (status = 200, description = "Access token refreshed successfully", body = RefreshTokenResponse),
        (status = 400, description = "Refresh token is required"),
        (status = 401, description = "Invalid or expired refresh token"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Auth"
)]
pub async fn refresh_token(
    State(app_state): State<AppState>,
    JsonBody(request): JsonBody<RefreshTokenRequest>,
) -> Result<Json<RefreshTokenResponse>, ErrorResponse> {
    let access_token = app_state
        .auth_state
        .auth_service
        .refresh(request)
        .await
        .map_err(|e: AuthError| -> ErrorResponse { e.into() })?;

    Ok(Json(RefreshTokenResponse {
        message: "Access token refreshed successfully".to_string(),
        access_token,
    }))
}

/// 보호된 라우트 (유효한 Access Token 필요)
/// Protected route: echoes the decoded claims
#[utoipa::path(
    get,
    path = "/profile",
    responses(
        (status = 200, description = "Claims of the authenticated user", body = ProfileResponse),
        (status = 401, description = "Missing, invalid or expired access token")
    ),
    security(
        ("BearerAuth" = [])
    ),
    tag = "Auth"
)]
pub async fn profile(authenticated_user: AuthenticatedUser) -> Json<ProfileResponse> {
    Json(ProfileResponse {
        message: "This is a protected route".to_string(),
        user: authenticated_user.claims,
    })
}
