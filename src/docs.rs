use utoipa::OpenApi;

use crate::domains::auth::models::*;

// OpenAPI 스키마 정의: Swagger 문서 자동 생성
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::domains::auth::handlers::auth_handler::register,
        crate::domains::auth::handlers::auth_handler::login,
        crate::domains::auth::handlers::auth_handler::refresh_token,
        crate::domains::auth::handlers::auth_handler::profile
    ),
    components(schemas(
        RegisterRequest,
        LoginRequest,
        SessionResponse,
        RefreshTokenRequest,
        RefreshTokenResponse,
        ProfileResponse,
        Claims
    )),
    modifiers(
        &SecurityAddon
    ),
    tags(
        (name = "Auth", description = "Registration, login, token refresh and the protected profile route")
    ),
    info(
        title = "Auth Server",
        description = "Access/refresh token authentication API",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;

// Security scheme 정의: Swagger UI에서 "Authorize" 버튼 추가
struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
