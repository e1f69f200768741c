// src/models/amenity.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Named feature attachable to places (e.g. "Wi-Fi")
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Amenity {
    pub id: Uuid,
    /// Amenity name, unique (max 50 characters)
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request to create or rename an amenity
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateAmenityRequest {
    #[validate(length(min = 1, max = 50))]
    pub name: String,
}

/// Amenity response DTO exposed via API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmenityResponse {
    pub id: Uuid,
    pub name: String,
}

impl Amenity {
    pub fn new(req: &CreateAmenityRequest) -> Self {
        let now = Utc::now();
        Amenity {
            id: Uuid::new_v4(),
            name: req.name.clone(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Rename and bump updated_at
    pub fn apply_update(&mut self, req: &CreateAmenityRequest) {
        self.name = req.name.clone();
        self.updated_at = Utc::now();
    }

    pub fn to_response(&self) -> AmenityResponse {
        AmenityResponse {
            id: self.id,
            name: self.name.clone(),
        }
    }
}
