use std::sync::Arc;
use anyhow::{Context, Result};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use auth_server::docs::ApiDoc;
use auth_server::routes::create_router;
use auth_server::shared::config::{AppConfig, StoreBackend};
use auth_server::shared::database::{CredentialStore, Database, MemoryCredentialStore, PgCredentialStore};
use auth_server::shared::services::AppState;
use auth_server::shared::utils::SystemClock;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env().context("Failed to load configuration")?;

    // 저장소 생성 (PostgreSQL 또는 메모리)
    let store: Arc<dyn CredentialStore> = match config.store {
        StoreBackend::Postgres => {
            let db = Database::new(&config.database_url).await?;
            db.initialize().await?;
            Arc::new(PgCredentialStore::new(db))
        }
        StoreBackend::Memory => {
            tracing::warn!("using in-memory credential store; data is lost on restart");
            Arc::new(MemoryCredentialStore::new())
        }
    };

    // AppState 생성 (모든 Service 초기화)
    let app_state = AppState::new(store, &config.jwt, Arc::new(SystemClock));

    // Router 생성
    let app = Router::new()
        .merge(create_router())
        .merge(
            SwaggerUi::new("/api")
                .url("/api-docs/openapi.json", ApiDoc::openapi())
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // 서버 시작
    let listener = TcpListener::bind(("0.0.0.0", config.port))
        .await
        .with_context(|| format!("Failed to bind port {}", config.port))?;

    tracing::info!(port = config.port, store = ?config.store, "Server is running");
    tracing::info!("Swagger UI available at http://localhost:{}/api", config.port);

    axum::serve(listener, app)
        .await
        .context("Server error")?;

    Ok(())
}
