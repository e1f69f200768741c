// src/db/review_repository.rs
// DOCUMENTATION: Review store trait and PostgreSQL implementation
// PURPOSE: Handle persistence for place reviews

use crate::db::map_db_error;
use crate::errors::HbnbError;
use crate::models::Review;
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

/// Persistence seam for reviews, implemented by both backends
#[async_trait]
pub trait ReviewStore: Send + Sync {
    async fn add(&self, review: &Review) -> Result<(), HbnbError>;
    async fn get(&self, id: Uuid) -> Result<Option<Review>, HbnbError>;
    async fn get_all(&self) -> Result<Vec<Review>, HbnbError>;
    async fn get_by_place(&self, place_id: Uuid) -> Result<Vec<Review>, HbnbError>;
    async fn get_by_user_and_place(
        &self,
        user_id: Uuid,
        place_id: Uuid,
    ) -> Result<Option<Review>, HbnbError>;
    async fn update(&self, review: &Review) -> Result<(), HbnbError>;
    async fn delete(&self, id: Uuid) -> Result<(), HbnbError>;
}

pub struct PgReviewStore {
    pool: PgPool,
}

impl PgReviewStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReviewStore for PgReviewStore {
    async fn add(&self, review: &Review) -> Result<(), HbnbError> {
        sqlx::query(
            r#"
            INSERT INTO reviews (id, text, rating, user_id, place_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(review.id)
        .bind(&review.text)
        .bind(review.rating)
        .bind(review.user_id)
        .bind(review.place_id)
        .bind(review.created_at)
        .bind(review.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_db_error(e, "Insert review"))?;

        Ok(())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Review>, HbnbError> {
        sqlx::query_as::<_, Review>("SELECT * FROM reviews WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Fetch review"))
    }

    async fn get_all(&self) -> Result<Vec<Review>, HbnbError> {
        sqlx::query_as::<_, Review>("SELECT * FROM reviews ORDER BY created_at")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Fetch reviews"))
    }

    async fn get_by_place(&self, place_id: Uuid) -> Result<Vec<Review>, HbnbError> {
        sqlx::query_as::<_, Review>(
            "SELECT * FROM reviews WHERE place_id = $1 ORDER BY created_at",
        )
        .bind(place_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_db_error(e, "Fetch reviews for place"))
    }

    async fn get_by_user_and_place(
        &self,
        user_id: Uuid,
        place_id: Uuid,
    ) -> Result<Option<Review>, HbnbError> {
        sqlx::query_as::<_, Review>(
            "SELECT * FROM reviews WHERE user_id = $1 AND place_id = $2",
        )
        .bind(user_id)
        .bind(place_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error(e, "Fetch review by user and place"))
    }

    async fn update(&self, review: &Review) -> Result<(), HbnbError> {
        let result = sqlx::query(
            r#"
            UPDATE reviews
            SET text = $2, rating = $3, updated_at = $4
            WHERE id = $1
            "#,
        )
        .bind(review.id)
        .bind(&review.text)
        .bind(review.rating)
        .bind(review.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_db_error(e, "Update review"))?;

        if result.rows_affected() == 0 {
            return Err(HbnbError::NotFound("Review".to_string()));
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), HbnbError> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Delete review"))?;

        if result.rows_affected() == 0 {
            return Err(HbnbError::NotFound("Review".to_string()));
        }
        Ok(())
    }
}
