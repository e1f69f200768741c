// src/db/amenity_repository.rs
// DOCUMENTATION: Amenity store trait and PostgreSQL implementation
// PURPOSE: Handle persistence for amenities

use crate::db::map_db_error;
use crate::errors::HbnbError;
use crate::models::Amenity;
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

/// Persistence seam for amenities, implemented by both backends
#[async_trait]
pub trait AmenityStore: Send + Sync {
    async fn add(&self, amenity: &Amenity) -> Result<(), HbnbError>;
    async fn get(&self, id: Uuid) -> Result<Option<Amenity>, HbnbError>;
    async fn get_by_name(&self, name: &str) -> Result<Option<Amenity>, HbnbError>;
    async fn get_all(&self) -> Result<Vec<Amenity>, HbnbError>;
    async fn update(&self, amenity: &Amenity) -> Result<(), HbnbError>;
    async fn delete(&self, id: Uuid) -> Result<(), HbnbError>;
}

pub struct PgAmenityStore {
    pool: PgPool,
}

impl PgAmenityStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AmenityStore for PgAmenityStore {
    async fn add(&self, amenity: &Amenity) -> Result<(), HbnbError> {
        sqlx::query(
            r#"
            INSERT INTO amenities (id, name, created_at, updated_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(amenity.id)
        .bind(&amenity.name)
        .bind(amenity.created_at)
        .bind(amenity.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_db_error(e, "Insert amenity"))?;

        Ok(())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Amenity>, HbnbError> {
        sqlx::query_as::<_, Amenity>("SELECT * FROM amenities WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Fetch amenity"))
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<Amenity>, HbnbError> {
        sqlx::query_as::<_, Amenity>("SELECT * FROM amenities WHERE name = $1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Fetch amenity by name"))
    }

    async fn get_all(&self) -> Result<Vec<Amenity>, HbnbError> {
        sqlx::query_as::<_, Amenity>("SELECT * FROM amenities ORDER BY name")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Fetch amenities"))
    }

    async fn update(&self, amenity: &Amenity) -> Result<(), HbnbError> {
        let result = sqlx::query(
            "UPDATE amenities SET name = $2, updated_at = $3 WHERE id = $1",
        )
        .bind(amenity.id)
        .bind(&amenity.name)
        .bind(amenity.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_db_error(e, "Update amenity"))?;

        if result.rows_affected() == 0 {
            return Err(HbnbError::NotFound("Amenity".to_string()));
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), HbnbError> {
        // Join-table rows are removed by ON DELETE CASCADE
        let result = sqlx::query("DELETE FROM amenities WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Delete amenity"))?;

        if result.rows_affected() == 0 {
            return Err(HbnbError::NotFound("Amenity".to_string()));
        }
        Ok(())
    }
}
