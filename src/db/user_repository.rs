// src/db/user_repository.rs
// DOCUMENTATION: User store trait and PostgreSQL implementation
// PURPOSE: Handle persistence for user accounts

use crate::db::map_db_error;
use crate::errors::HbnbError;
use crate::models::User;
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

/// Persistence seam for users, implemented by both backends
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn add(&self, user: &User) -> Result<(), HbnbError>;
    async fn get(&self, id: Uuid) -> Result<Option<User>, HbnbError>;
    async fn get_by_email(&self, email: &str) -> Result<Option<User>, HbnbError>;
    async fn get_all(&self) -> Result<Vec<User>, HbnbError>;
    async fn update(&self, user: &User) -> Result<(), HbnbError>;
}

pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn add(&self, user: &User) -> Result<(), HbnbError> {
        sqlx::query(
            r#"
            INSERT INTO users (id, first_name, last_name, email, password_hash, is_admin, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(user.id)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.is_admin)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_db_error(e, "Insert user"))?;

        Ok(())
    }

    async fn get(&self, id: Uuid) -> Result<Option<User>, HbnbError> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Fetch user"))
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<User>, HbnbError> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Fetch user by email"))
    }

    async fn get_all(&self) -> Result<Vec<User>, HbnbError> {
        sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY created_at")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Fetch users"))
    }

    async fn update(&self, user: &User) -> Result<(), HbnbError> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET first_name = $2, last_name = $3, email = $4, password_hash = $5,
                is_admin = $6, updated_at = $7
            WHERE id = $1
            "#,
        )
        .bind(user.id)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.is_admin)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_db_error(e, "Update user"))?;

        if result.rows_affected() == 0 {
            return Err(HbnbError::NotFound("User".to_string()));
        }
        Ok(())
    }
}
