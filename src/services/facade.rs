// src/services/facade.rs
// DOCUMENTATION: Business logic facade over the per-entity stores
// PURPOSE: One method per business operation, cross-entity checks live here

use std::sync::Arc;

use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::hash_password;
use crate::db::{
    AmenityStore, MemoryAmenityStore, MemoryPlaceStore, MemoryReviewStore, MemoryUserStore,
    PgAmenityStore, PgPlaceStore, PgReviewStore, PgUserStore, PlaceStore, ReviewStore, UserStore,
};
use crate::errors::HbnbError;
use crate::models::{
    Amenity, CreateAmenityRequest, CreatePlaceRequest, CreateReviewRequest, Place,
    PlaceDetailResponse, RegisterUserRequest, Review, UpdatePlaceRequest, UpdateReviewRequest,
    UpdateUserRequest, User,
};

/// Aggregates one store per entity type
/// DOCUMENTATION: Cloned into every actix worker via web::Data
/// Referential checks across entities happen here, not in the handlers
#[derive(Clone)]
pub struct HbnbFacade {
    users: Arc<dyn UserStore>,
    places: Arc<dyn PlaceStore>,
    reviews: Arc<dyn ReviewStore>,
    amenities: Arc<dyn AmenityStore>,
}

impl HbnbFacade {
    /// Dict-backed facade, used by the memory backend and the test suite
    pub fn in_memory() -> Self {
        Self {
            users: Arc::new(MemoryUserStore::new()),
            places: Arc::new(MemoryPlaceStore::new()),
            reviews: Arc::new(MemoryReviewStore::new()),
            amenities: Arc::new(MemoryAmenityStore::new()),
        }
    }

    /// PostgreSQL-backed facade sharing one connection pool
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            users: Arc::new(PgUserStore::new(pool.clone())),
            places: Arc::new(PgPlaceStore::new(pool.clone())),
            reviews: Arc::new(PgReviewStore::new(pool.clone())),
            amenities: Arc::new(PgAmenityStore::new(pool)),
        }
    }

    // ----- Users -----

    /// Register a user, rejecting duplicate emails with a conflict
    pub async fn create_user(
        &self,
        req: &RegisterUserRequest,
        is_admin: bool,
    ) -> Result<User, HbnbError> {
        if self.users.get_by_email(&req.email).await?.is_some() {
            return Err(HbnbError::AlreadyExists("Email already registered".to_string()));
        }

        let password_hash = hash_password(&req.password)?;
        let user = User::new(req, password_hash, is_admin);
        self.users.add(&user).await?;

        log::info!("Created user {}", user.id);
        Ok(user)
    }

    pub async fn get_user(&self, id: Uuid) -> Result<User, HbnbError> {
        self.users
            .get(id)
            .await?
            .ok_or_else(|| HbnbError::NotFound("User".to_string()))
    }

    pub async fn get_users(&self) -> Result<Vec<User>, HbnbError> {
        self.users.get_all().await
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, HbnbError> {
        self.users.get_by_email(email).await
    }

    /// Patch a user; a changed email must stay unique, a supplied
    /// password is re-hashed
    pub async fn update_user(&self, id: Uuid, req: &UpdateUserRequest) -> Result<User, HbnbError> {
        let mut user = self.get_user(id).await?;

        if let Some(email) = &req.email {
            if let Some(existing) = self.users.get_by_email(email).await? {
                if existing.id != id {
                    return Err(HbnbError::AlreadyExists(
                        "Email already registered".to_string(),
                    ));
                }
            }
        }

        user.apply_update(req);
        if let Some(password) = &req.password {
            user.password_hash = hash_password(password)?;
        }

        self.users.update(&user).await?;
        Ok(user)
    }

    // ----- Amenities -----

    /// Create an amenity with a unique name
    pub async fn create_amenity(&self, req: &CreateAmenityRequest) -> Result<Amenity, HbnbError> {
        if self.amenities.get_by_name(&req.name).await?.is_some() {
            return Err(HbnbError::AlreadyExists(format!(
                "Amenity '{}' already exists",
                req.name
            )));
        }

        let amenity = Amenity::new(req);
        self.amenities.add(&amenity).await?;
        Ok(amenity)
    }

    pub async fn get_amenity(&self, id: Uuid) -> Result<Amenity, HbnbError> {
        self.amenities
            .get(id)
            .await?
            .ok_or_else(|| HbnbError::NotFound("Amenity".to_string()))
    }

    pub async fn get_all_amenities(&self) -> Result<Vec<Amenity>, HbnbError> {
        self.amenities.get_all().await
    }

    pub async fn update_amenity(
        &self,
        id: Uuid,
        req: &CreateAmenityRequest,
    ) -> Result<Amenity, HbnbError> {
        let mut amenity = self.get_amenity(id).await?;

        if let Some(existing) = self.amenities.get_by_name(&req.name).await? {
            if existing.id != id {
                return Err(HbnbError::AlreadyExists(format!(
                    "Amenity '{}' already exists",
                    req.name
                )));
            }
        }

        amenity.apply_update(req);
        self.amenities.update(&amenity).await?;
        Ok(amenity)
    }

    /// Delete an amenity, detaching it from every place first
    pub async fn delete_amenity(&self, id: Uuid) -> Result<(), HbnbError> {
        self.get_amenity(id).await?;
        self.places.remove_amenity(id).await?;
        self.amenities.delete(id).await
    }

    // ----- Places -----

    /// Create a place after resolving the owner and every amenity id
    pub async fn create_place(
        &self,
        req: &CreatePlaceRequest,
        owner_id: Uuid,
    ) -> Result<Place, HbnbError> {
        if self.users.get(owner_id).await?.is_none() {
            return Err(HbnbError::InvalidInput("Owner does not exist".to_string()));
        }

        for amenity_id in &req.amenities {
            if self.amenities.get(*amenity_id).await?.is_none() {
                return Err(HbnbError::InvalidInput(format!(
                    "Invalid amenity ID: {}",
                    amenity_id
                )));
            }
        }

        let place = Place::new(req, owner_id);
        self.places.add(&place).await?;

        log::info!("Created place {} for owner {}", place.id, owner_id);
        Ok(place)
    }

    pub async fn get_place(&self, id: Uuid) -> Result<Place, HbnbError> {
        self.places
            .get(id)
            .await?
            .ok_or_else(|| HbnbError::NotFound("Place".to_string()))
    }

    /// Place with embedded owner, amenities and reviews
    pub async fn get_place_detail(&self, id: Uuid) -> Result<PlaceDetailResponse, HbnbError> {
        let place = self.get_place(id).await?;
        let owner = self.get_user(place.owner_id).await?;

        let mut amenities = Vec::with_capacity(place.amenity_ids.len());
        for amenity_id in &place.amenity_ids {
            // A link to a vanished amenity is skipped rather than failing the read
            if let Some(amenity) = self.amenities.get(*amenity_id).await? {
                amenities.push(amenity.to_response());
            }
        }

        let reviews = self.reviews.get_by_place(place.id).await?;

        Ok(PlaceDetailResponse {
            place: place.to_response(),
            owner: owner.to_response(),
            amenities,
            reviews: reviews.iter().map(|r| r.to_response()).collect(),
        })
    }

    pub async fn get_all_places(&self) -> Result<Vec<Place>, HbnbError> {
        self.places.get_all().await
    }

    pub async fn update_place(
        &self,
        id: Uuid,
        req: &UpdatePlaceRequest,
    ) -> Result<Place, HbnbError> {
        let mut place = self.get_place(id).await?;
        place.apply_update(req);
        self.places.update(&place).await?;
        Ok(place)
    }

    /// Delete a place and its reviews
    pub async fn delete_place(&self, id: Uuid) -> Result<(), HbnbError> {
        self.get_place(id).await?;

        // The relational backend cascades; the in-memory one needs this
        for review in self.reviews.get_by_place(id).await? {
            self.reviews.delete(review.id).await?;
        }
        self.places.delete(id).await
    }

    pub async fn add_amenity_to_place(
        &self,
        place_id: Uuid,
        amenity_id: Uuid,
    ) -> Result<(), HbnbError> {
        self.get_place(place_id).await?;
        if self.amenities.get(amenity_id).await?.is_none() {
            return Err(HbnbError::InvalidInput("Invalid amenity ID".to_string()));
        }
        self.places.add_amenity(place_id, amenity_id).await
    }

    // ----- Reviews -----

    /// Create a review
    /// Rejects reviews on the author's own place and duplicate
    /// (user, place) reviews
    pub async fn create_review(
        &self,
        req: &CreateReviewRequest,
        user_id: Uuid,
    ) -> Result<Review, HbnbError> {
        if self.users.get(user_id).await?.is_none() {
            return Err(HbnbError::InvalidInput("User does not exist".to_string()));
        }

        let place = self.get_place(req.place_id).await?;

        if place.owner_id == user_id {
            return Err(HbnbError::InvalidInput(
                "You cannot review your own place".to_string(),
            ));
        }

        if self
            .reviews
            .get_by_user_and_place(user_id, place.id)
            .await?
            .is_some()
        {
            return Err(HbnbError::InvalidInput(
                "You have already reviewed this place".to_string(),
            ));
        }

        let review = Review::new(req, user_id);
        self.reviews.add(&review).await?;
        Ok(review)
    }

    pub async fn get_review(&self, id: Uuid) -> Result<Review, HbnbError> {
        self.reviews
            .get(id)
            .await?
            .ok_or_else(|| HbnbError::NotFound("Review".to_string()))
    }

    pub async fn get_all_reviews(&self) -> Result<Vec<Review>, HbnbError> {
        self.reviews.get_all().await
    }

    pub async fn get_reviews_by_place(&self, place_id: Uuid) -> Result<Vec<Review>, HbnbError> {
        self.get_place(place_id).await?;
        self.reviews.get_by_place(place_id).await
    }

    pub async fn update_review(
        &self,
        id: Uuid,
        req: &UpdateReviewRequest,
    ) -> Result<Review, HbnbError> {
        let mut review = self.get_review(id).await?;
        review.apply_update(req);
        self.reviews.update(&review).await?;
        Ok(review)
    }

    pub async fn delete_review(&self, id: Uuid) -> Result<(), HbnbError> {
        self.get_review(id).await?;
        self.reviews.delete(id).await
    }
}
