use std::time::Duration;
use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

const MAX_CONNECTIONS: u32 = 10;
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

// PostgreSQL 연결 풀 (users / refresh_tokens 테이블)
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    // 연결 문자열 예: "postgresql://root@localhost:5432/auth_db"
    pub async fn new(db_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .acquire_timeout(ACQUIRE_TIMEOUT)
            .connect(db_url)
            .await
            .context("Failed to connect to credential database")?;

        tracing::info!(max_connections = MAX_CONNECTIONS, "Connected to PostgreSQL");
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // 스키마 보장: migrations/ 의 users, refresh_tokens 생성 스크립트 적용
    pub async fn initialize(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .context("Failed to apply credential schema migrations")?;

        tracing::info!("Credential schema is up to date");
        Ok(())
    }
}
