//! Postgres-backed user repository.

use async_trait::async_trait;
use sqlx::PgPool;

use userhub_core::error::{AppError, ErrorKind};
use userhub_core::result::AppResult;
use userhub_entity::user::{NewUser, UpdateUser, User};

use crate::store::UserStore;

/// Repository for user CRUD against PostgreSQL.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_one(&self, id: i64) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))
    }

    async fn find_all_ordered_by_name(&self) -> AppResult<Vec<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list users", e))
    }

    async fn save(&self, data: NewUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (name, email, verification_token) \
             VALUES ($1, $2, $3) \
             RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.verification_token)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create user", e))
    }

    async fn update(&self, id: i64, changes: &UpdateUser) -> AppResult<()> {
        sqlx::query(
            "UPDATE users SET name = COALESCE($2, name), \
                              email = COALESCE($3, email), \
                              updated_at = NOW() \
             WHERE id = $1",
        )
        .bind(id)
        .bind(&changes.name)
        .bind(&changes.email)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update user", e))?;

        Ok(())
    }

    async fn remove(&self, user: User) -> AppResult<User> {
        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(user.id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete user", e))?;

        Ok(user)
    }
}
