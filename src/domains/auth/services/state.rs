// Auth domain state
// 인증 도메인 상태
use std::sync::Arc;
use crate::shared::database::CredentialStore;
use crate::shared::utils::Clock;
use crate::domains::auth::services::{AuthService, JwtService, PasswordService};

/// Auth domain state
/// 인증 도메인에서 필요한 서비스들을 포함하는 상태
#[derive(Clone)]
pub struct AuthState {
    pub auth_service: AuthService,
    pub jwt_service: JwtService,
}

impl AuthState {
    /// Create AuthState with an injected store and JWT service
    /// AuthState 생성 (저장소와 JWT 서비스 주입)
    pub fn new(store: Arc<dyn CredentialStore>, jwt_service: JwtService, clock: Arc<dyn Clock>) -> Self {
        Self {
            auth_service: AuthService::new(store, jwt_service.clone(), PasswordService::new(), clock),
            jwt_service,
        }
    }
}
