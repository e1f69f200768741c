// src/models/place.rs
// DOCUMENTATION: Place entity and request/response DTOs
// PURPOSE: Rental listing owned by a user, with attached amenities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use super::{AmenityResponse, ReviewResponse, UserResponse};

/// Represents a complete place record
/// DOCUMENTATION: Maps directly to the places table in PostgreSQL
/// Amenity links live in the place_amenities join table and are
/// materialized into amenity_ids on read
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Place {
    /// Unique identifier (UUID v4)
    pub id: Uuid,

    /// Listing title (max 100 characters)
    pub title: String,

    /// Optional detailed description (max 500 characters)
    pub description: Option<String>,

    /// Price per night, non-negative
    pub price: f64,

    /// Geographic latitude (-90..90)
    pub latitude: f64,

    /// Geographic longitude (-180..180)
    pub longitude: f64,

    /// Owning user - must resolve to an existing user
    pub owner_id: Uuid,

    /// Attached amenity ids (many-to-many)
    /// Not a places column; loaded from the join table after the row
    #[sqlx(default)]
    pub amenity_ids: Vec<Uuid>,

    /// When record was created
    pub created_at: DateTime<Utc>,

    /// When record was last modified
    pub updated_at: DateTime<Utc>,
}

/// Request DTO for creating a new place
/// DOCUMENTATION: Data transfer object for POST /api/v1/places
/// The owner is taken from the JWT identity, never from the body
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePlaceRequest {
    #[validate(length(min = 1, max = 100))]
    pub title: String,

    #[validate(length(max = 500))]
    pub description: Option<String>,

    #[validate(range(min = 0.0))]
    pub price: f64,

    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,

    /// Initial amenity ids - each must resolve to an existing amenity
    #[serde(default)]
    pub amenities: Vec<Uuid>,
}

/// Request DTO for updating an existing place
/// DOCUMENTATION: All fields are optional - only provided fields are updated
/// An absent description leaves the stored one untouched; there is no
/// way to clear it back to null through this request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdatePlaceRequest {
    #[validate(length(min = 1, max = 100))]
    pub title: Option<String>,

    #[validate(length(max = 500))]
    pub description: Option<String>,

    #[validate(range(min = 0.0))]
    pub price: Option<f64>,

    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: Option<f64>,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: Option<f64>,
}

/// Response DTO for list endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceResponse {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub price: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub owner_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Detailed response DTO
/// DOCUMENTATION: Extended response with embedded owner, amenities and
/// reviews, used for GET /api/v1/places/{id}
#[derive(Debug, Serialize)]
pub struct PlaceDetailResponse {
    #[serde(flatten)]
    pub place: PlaceResponse,
    pub owner: UserResponse,
    pub amenities: Vec<AmenityResponse>,
    pub reviews: Vec<ReviewResponse>,
}

impl Place {
    /// Build a new place from a validated request
    pub fn new(req: &CreatePlaceRequest, owner_id: Uuid) -> Self {
        let now = Utc::now();
        Place {
            id: Uuid::new_v4(),
            title: req.title.clone(),
            description: req.description.clone(),
            price: req.price,
            latitude: req.latitude,
            longitude: req.longitude,
            owner_id,
            amenity_ids: req.amenities.clone(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Patch provided fields and bump updated_at
    pub fn apply_update(&mut self, req: &UpdatePlaceRequest) {
        if let Some(title) = &req.title {
            self.title = title.clone();
        }
        if req.description.is_some() {
            self.description = req.description.clone();
        }
        if let Some(price) = req.price {
            self.price = price;
        }
        if let Some(latitude) = req.latitude {
            self.latitude = latitude;
        }
        if let Some(longitude) = req.longitude {
            self.longitude = longitude;
        }
        self.updated_at = Utc::now();
    }

    /// Convert Place to PlaceResponse for API output
    pub fn to_response(&self) -> PlaceResponse {
        PlaceResponse {
            id: self.id,
            title: self.title.clone(),
            description: self.description.clone(),
            price: self.price,
            latitude: self.latitude,
            longitude: self.longitude,
            owner_id: self.owner_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreatePlaceRequest {
        CreatePlaceRequest {
            title: "Seaside cabin".to_string(),
            description: Some("Two rooms, ocean view".to_string()),
            price: 120.0,
            latitude: 43.3,
            longitude: -1.98,
            amenities: vec![],
        }
    }

    #[test]
    fn test_valid_place_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_title_over_100_chars_rejected() {
        let mut req = valid_request();
        req.title = "x".repeat(101);
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_negative_price_rejected() {
        let mut req = valid_request();
        req.price = -1.0;
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_latitude_out_of_range_rejected() {
        let mut req = valid_request();
        req.latitude = 90.5;
        assert!(req.validate().is_err());
        req.latitude = -91.0;
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_longitude_out_of_range_rejected() {
        let mut req = valid_request();
        req.longitude = 180.1;
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_boundary_coordinates_accepted() {
        let mut req = valid_request();
        req.latitude = 90.0;
        req.longitude = -180.0;
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_partial_update_keeps_other_fields() {
        let owner = Uuid::new_v4();
        let mut place = Place::new(&valid_request(), owner);
        place.apply_update(&UpdatePlaceRequest {
            title: None,
            description: None,
            price: Some(99.0),
            latitude: None,
            longitude: None,
        });
        assert_eq!(place.price, 99.0);
        assert_eq!(place.title, "Seaside cabin");
        assert_eq!(place.owner_id, owner);
    }
}
