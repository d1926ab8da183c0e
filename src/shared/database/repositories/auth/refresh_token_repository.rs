use sqlx::{postgres::PgRow, PgPool, Row};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use crate::domains::auth::models::refresh_token::{RefreshToken, RefreshTokenCreate};

/// Refresh Token Repository
/// Refresh Token 데이터베이스 작업 처리
pub struct RefreshTokenRepository {
    pool: PgPool,
}

impl RefreshTokenRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Refresh Token 생성 (저장)
    /// Create and store refresh token
    pub async fn create(&self, data: RefreshTokenCreate) -> Result<RefreshToken> {
        let row = sqlx::query(
            r#"
            INSERT INTO refresh_tokens (user_id, token, expires_at, created_at)
            VALUES ($1, $2, $3, NOW())
            RETURNING id, user_id, token, expires_at, created_at
            "#,
        )
        .bind(data.user_id as i64)  // u64 -> i64 변환 (DB는 BIGINT = i64)
        .bind(&data.token)
        .bind(data.expires_at)
        .fetch_one(&self.pool)
        .await
        .context("Failed to create refresh token")?;

        Ok(Self::map_row(&row))
    }

    /// 유효한 Refresh Token 조회 (token 일치 AND expires_at > now)
    /// Find a stored refresh token that has not expired at `now`
    pub async fn find_valid(&self, token: &str, now: DateTime<Utc>) -> Result<Option<RefreshToken>> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, token, expires_at, created_at
            FROM refresh_tokens
            WHERE token = $1 AND expires_at > $2
            LIMIT 1
            "#,
        )
        .bind(token)
        .bind(now)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to find refresh token")?;

        Ok(row.as_ref().map(Self::map_row))
    }

    /// 사용자의 모든 Refresh Token 만료 시각을 강제로 변경
    /// Force the expiry of every refresh token of a user
    pub async fn expire_all_for_user(&self, user_id: u64, at: DateTime<Utc>) -> Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE refresh_tokens
            SET expires_at = $2
            WHERE user_id = $1
            "#,
        )
        .bind(user_id as i64)  // DB에는 i64로 저장
        .bind(at)
        .execute(&self.pool)
        .await
        .context("Failed to expire refresh tokens for user")?;

        Ok(result.rows_affected())
    }

    fn map_row(row: &PgRow) -> RefreshToken {
        RefreshToken {
            id: row.get("id"),
            user_id: row.get::<i64, _>("user_id") as u64,
            token: row.get("token"),
            expires_at: row.get("expires_at"),
            created_at: row.get("created_at"),
        }
    }
}
