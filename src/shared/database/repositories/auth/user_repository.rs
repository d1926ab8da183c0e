use sqlx::{postgres::PgRow, PgPool, Row};
use anyhow::{Context, Result};
use crate::domains::auth::models::user::User;

pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // 사용자 생성
    // 이메일 중복은 users.email UNIQUE 제약으로 감지됨 (에러 코드 23505)
    pub async fn create_user(&self, email: &str, password_hash: &str) -> Result<User> {
        let row = sqlx::query(
            r#"
            INSERT INTO users (email, password_hash, created_at)
            VALUES ($1, $2, NOW())
            RETURNING id, email, password_hash, created_at
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .context("Failed to create user")?;

        Ok(Self::map_row(&row))
    }

    // 이메일로 사용자 조회 (로그인용)
    // Get user by email (for login)
    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let row = sqlx::query(
            r#"
            SELECT id, email, password_hash, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch user by email")?;

        Ok(row.as_ref().map(Self::map_row))
    }

    fn map_row(row: &PgRow) -> User {
        User {
            id: row.get::<i64, _>("id") as u64,
            email: row.get("email"),
            password_hash: row.get("password_hash"),
            created_at: row.get("created_at"),
        }
    }
}
