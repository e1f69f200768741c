// src/models/review.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Review left by a user on another user's place
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Review {
    pub id: Uuid,
    pub text: String,
    /// Integer rating, 1 to 5
    pub rating: i32,
    pub user_id: Uuid,
    pub place_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request to create a new review
/// The author is taken from the JWT identity
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateReviewRequest {
    pub place_id: Uuid,

    #[validate(length(min = 1, max = 1024))]
    pub text: String,

    #[validate(range(min = 1, max = 5))]
    pub rating: i32,
}

/// Request to update an existing review
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateReviewRequest {
    #[validate(length(min = 1, max = 1024))]
    pub text: Option<String>,

    #[validate(range(min = 1, max = 5))]
    pub rating: Option<i32>,
}

/// Review response DTO exposed via API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewResponse {
    pub id: Uuid,
    pub text: String,
    pub rating: i32,
    pub user_id: Uuid,
    pub place_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Review {
    /// Build a new review from a validated request
    pub fn new(req: &CreateReviewRequest, user_id: Uuid) -> Self {
        let now = Utc::now();
        Review {
            id: Uuid::new_v4(),
            text: req.text.clone(),
            rating: req.rating,
            user_id,
            place_id: req.place_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Patch provided fields and bump updated_at
    pub fn apply_update(&mut self, req: &UpdateReviewRequest) {
        if let Some(text) = &req.text {
            self.text = text.clone();
        }
        if let Some(rating) = req.rating {
            self.rating = rating;
        }
        self.updated_at = Utc::now();
    }

    /// Convert database Review into API response
    pub fn to_response(&self) -> ReviewResponse {
        ReviewResponse {
            id: self.id,
            text: self.text.clone(),
            rating: self.rating,
            user_id: self.user_id,
            place_id: self.place_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateReviewRequest {
        CreateReviewRequest {
            place_id: Uuid::new_v4(),
            text: "Great stay, spotless kitchen".to_string(),
            rating: 5,
        }
    }

    #[test]
    fn test_valid_review_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_rating_zero_rejected() {
        let mut req = valid_request();
        req.rating = 0;
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_rating_six_rejected() {
        let mut req = valid_request();
        req.rating = 6;
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_empty_text_rejected() {
        let mut req = valid_request();
        req.text = String::new();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_text_over_1024_chars_rejected() {
        let mut req = valid_request();
        req.text = "x".repeat(1025);
        assert!(req.validate().is_err());
    }
}
