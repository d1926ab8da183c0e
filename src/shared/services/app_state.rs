use std::sync::Arc;
use crate::shared::config::JwtSecrets;
use crate::shared::database::CredentialStore;
use crate::shared::utils::Clock;
use crate::domains::auth::services::state::AuthState;
use crate::domains::auth::services::JwtService;

/// Application state (combines all domain states)
/// 애플리케이션 상태 (모든 도메인 상태를 조합)
///
/// 저장소와 시계는 생성 시 주입됩니다. 요청 사이에 보관하는 세션 상태는 없습니다.
#[derive(Clone)]
pub struct AppState {
    pub auth_state: AuthState,
}

impl AppState {
    /// Create AppState with an injected credential store
    pub fn new(store: Arc<dyn CredentialStore>, secrets: &JwtSecrets, clock: Arc<dyn Clock>) -> Self {
        // 1. 공유 서비스 생성 (JWT)
        let jwt_service = JwtService::new(&secrets.access, &secrets.refresh, clock.clone());

        // 2. 도메인 State 생성
        let auth_state = AuthState::new(store, jwt_service, clock);

        Self { auth_state }
    }
}
