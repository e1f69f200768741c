// src/db/place_repository.rs
// DOCUMENTATION: Place store trait and PostgreSQL implementation
// PURPOSE: Handle persistence for places and their amenity links

use crate::db::map_db_error;
use crate::errors::HbnbError;
use crate::models::Place;
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

/// Persistence seam for places, implemented by both backends
#[async_trait]
pub trait PlaceStore: Send + Sync {
    async fn add(&self, place: &Place) -> Result<(), HbnbError>;
    async fn get(&self, id: Uuid) -> Result<Option<Place>, HbnbError>;
    async fn get_all(&self) -> Result<Vec<Place>, HbnbError>;
    async fn update(&self, place: &Place) -> Result<(), HbnbError>;
    async fn delete(&self, id: Uuid) -> Result<(), HbnbError>;
    /// Attach an amenity to a place (no-op if already attached)
    async fn add_amenity(&self, place_id: Uuid, amenity_id: Uuid) -> Result<(), HbnbError>;
    /// Detach an amenity from every place that carries it
    async fn remove_amenity(&self, amenity_id: Uuid) -> Result<(), HbnbError>;
}

pub struct PgPlaceStore {
    pool: PgPool,
}

impl PgPlaceStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Materialize join-table rows into the amenity_ids field
    async fn load_amenity_ids(&self, place_id: Uuid) -> Result<Vec<Uuid>, HbnbError> {
        let rows = sqlx::query_as::<_, (Uuid,)>(
            "SELECT amenity_id FROM place_amenities WHERE place_id = $1 ORDER BY amenity_id",
        )
        .bind(place_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_db_error(e, "Fetch place amenities"))?;

        Ok(rows.into_iter().map(|(id,)| id).collect())
    }
}

#[async_trait]
impl PlaceStore for PgPlaceStore {
    async fn add(&self, place: &Place) -> Result<(), HbnbError> {
        sqlx::query(
            r#"
            INSERT INTO places (id, title, description, price, latitude, longitude, owner_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(place.id)
        .bind(&place.title)
        .bind(&place.description)
        .bind(place.price)
        .bind(place.latitude)
        .bind(place.longitude)
        .bind(place.owner_id)
        .bind(place.created_at)
        .bind(place.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_db_error(e, "Insert place"))?;

        for amenity_id in &place.amenity_ids {
            self.add_amenity(place.id, *amenity_id).await?;
        }
        Ok(())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Place>, HbnbError> {
        let place = sqlx::query_as::<_, Place>("SELECT * FROM places WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Fetch place"))?;

        match place {
            Some(mut place) => {
                place.amenity_ids = self.load_amenity_ids(place.id).await?;
                Ok(Some(place))
            }
            None => Ok(None),
        }
    }

    async fn get_all(&self) -> Result<Vec<Place>, HbnbError> {
        let mut places = sqlx::query_as::<_, Place>("SELECT * FROM places ORDER BY created_at")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Fetch places"))?;

        for place in &mut places {
            place.amenity_ids = self.load_amenity_ids(place.id).await?;
        }
        Ok(places)
    }

    async fn update(&self, place: &Place) -> Result<(), HbnbError> {
        let result = sqlx::query(
            r#"
            UPDATE places
            SET title = $2, description = $3, price = $4, latitude = $5,
                longitude = $6, updated_at = $7
            WHERE id = $1
            "#,
        )
        .bind(place.id)
        .bind(&place.title)
        .bind(&place.description)
        .bind(place.price)
        .bind(place.latitude)
        .bind(place.longitude)
        .bind(place.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_db_error(e, "Update place"))?;

        if result.rows_affected() == 0 {
            return Err(HbnbError::NotFound("Place".to_string()));
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), HbnbError> {
        // Reviews and amenity links are removed by ON DELETE CASCADE
        let result = sqlx::query("DELETE FROM places WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Delete place"))?;

        if result.rows_affected() == 0 {
            return Err(HbnbError::NotFound("Place".to_string()));
        }
        Ok(())
    }

    async fn add_amenity(&self, place_id: Uuid, amenity_id: Uuid) -> Result<(), HbnbError> {
        sqlx::query(
            r#"
            INSERT INTO place_amenities (place_id, amenity_id)
            VALUES ($1, $2)
            ON CONFLICT (place_id, amenity_id) DO NOTHING
            "#,
        )
        .bind(place_id)
        .bind(amenity_id)
        .execute(&self.pool)
        .await
        .map_err(|e| map_db_error(e, "Attach amenity"))?;

        Ok(())
    }

    async fn remove_amenity(&self, amenity_id: Uuid) -> Result<(), HbnbError> {
        sqlx::query("DELETE FROM place_amenities WHERE amenity_id = $1")
            .bind(amenity_id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Detach amenity"))?;

        Ok(())
    }
}
