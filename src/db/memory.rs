// src/db/memory.rs
// DOCUMENTATION: In-memory persistence backend
// PURPOSE: Dict-backed stores for development and tests, no database needed

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::db::{AmenityStore, PlaceStore, ReviewStore, UserStore};
use crate::errors::HbnbError;
use crate::models::{Amenity, Place, Review, User};

/// Thread-safe key-value store for one entity type
/// DOCUMENTATION: HashMap keyed by id behind an async RwLock
/// Attribute lookups are linear scans over cloned values
pub struct MemoryRepository<T: Clone + Send + Sync> {
    store: RwLock<HashMap<Uuid, T>>,
}

impl<T: Clone + Send + Sync> MemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }

    pub async fn add(&self, id: Uuid, value: T) {
        self.store.write().await.insert(id, value);
    }

    pub async fn get(&self, id: Uuid) -> Option<T> {
        self.store.read().await.get(&id).cloned()
    }

    pub async fn get_all(&self) -> Vec<T> {
        self.store.read().await.values().cloned().collect()
    }

    /// Replace the stored value, false if the id is unknown
    pub async fn update(&self, id: Uuid, value: T) -> bool {
        let mut store = self.store.write().await;
        if store.contains_key(&id) {
            store.insert(id, value);
            true
        } else {
            false
        }
    }

    /// Mutate the stored value in place, false if the id is unknown
    pub async fn modify<F>(&self, id: Uuid, f: F) -> bool
    where
        F: FnOnce(&mut T),
    {
        let mut store = self.store.write().await;
        match store.get_mut(&id) {
            Some(value) => {
                f(value);
                true
            }
            None => false,
        }
    }

    /// Mutate every stored value
    pub async fn modify_all<F>(&self, mut f: F)
    where
        F: FnMut(&mut T),
    {
        let mut store = self.store.write().await;
        for value in store.values_mut() {
            f(value);
        }
    }

    pub async fn delete(&self, id: Uuid) -> bool {
        self.store.write().await.remove(&id).is_some()
    }

    /// First value matching the predicate (linear scan)
    pub async fn find<P>(&self, predicate: P) -> Option<T>
    where
        P: Fn(&T) -> bool,
    {
        self.store
            .read()
            .await
            .values()
            .find(|v| predicate(v))
            .cloned()
    }

    /// All values matching the predicate (linear scan)
    pub async fn filter<P>(&self, predicate: P) -> Vec<T>
    where
        P: Fn(&T) -> bool,
    {
        self.store
            .read()
            .await
            .values()
            .filter(|v| predicate(v))
            .cloned()
            .collect()
    }
}

impl<T: Clone + Send + Sync> Default for MemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

pub struct MemoryUserStore {
    repo: MemoryRepository<User>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self {
            repo: MemoryRepository::new(),
        }
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn add(&self, user: &User) -> Result<(), HbnbError> {
        self.repo.add(user.id, user.clone()).await;
        Ok(())
    }

    async fn get(&self, id: Uuid) -> Result<Option<User>, HbnbError> {
        Ok(self.repo.get(id).await)
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<User>, HbnbError> {
        Ok(self.repo.find(|u| u.email == email).await)
    }

    async fn get_all(&self) -> Result<Vec<User>, HbnbError> {
        let mut users = self.repo.get_all().await;
        users.sort_by_key(|u| u.created_at);
        Ok(users)
    }

    async fn update(&self, user: &User) -> Result<(), HbnbError> {
        if self.repo.update(user.id, user.clone()).await {
            Ok(())
        } else {
            Err(HbnbError::NotFound("User".to_string()))
        }
    }
}

pub struct MemoryPlaceStore {
    repo: MemoryRepository<Place>,
}

impl MemoryPlaceStore {
    pub fn new() -> Self {
        Self {
            repo: MemoryRepository::new(),
        }
    }
}

#[async_trait]
impl PlaceStore for MemoryPlaceStore {
    async fn add(&self, place: &Place) -> Result<(), HbnbError> {
        self.repo.add(place.id, place.clone()).await;
        Ok(())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Place>, HbnbError> {
        Ok(self.repo.get(id).await)
    }

    async fn get_all(&self) -> Result<Vec<Place>, HbnbError> {
        let mut places = self.repo.get_all().await;
        places.sort_by_key(|p| p.created_at);
        Ok(places)
    }

    async fn update(&self, place: &Place) -> Result<(), HbnbError> {
        if self.repo.update(place.id, place.clone()).await {
            Ok(())
        } else {
            Err(HbnbError::NotFound("Place".to_string()))
        }
    }

    async fn delete(&self, id: Uuid) -> Result<(), HbnbError> {
        if self.repo.delete(id).await {
            Ok(())
        } else {
            Err(HbnbError::NotFound("Place".to_string()))
        }
    }

    async fn add_amenity(&self, place_id: Uuid, amenity_id: Uuid) -> Result<(), HbnbError> {
        let found = self
            .repo
            .modify(place_id, |place| {
                if !place.amenity_ids.contains(&amenity_id) {
                    place.amenity_ids.push(amenity_id);
                }
            })
            .await;

        if found {
            Ok(())
        } else {
            Err(HbnbError::NotFound("Place".to_string()))
        }
    }

    async fn remove_amenity(&self, amenity_id: Uuid) -> Result<(), HbnbError> {
        self.repo
            .modify_all(|place| place.amenity_ids.retain(|id| *id != amenity_id))
            .await;
        Ok(())
    }
}

pub struct MemoryReviewStore {
    repo: MemoryRepository<Review>,
}

impl MemoryReviewStore {
    pub fn new() -> Self {
        Self {
            repo: MemoryRepository::new(),
        }
    }
}

#[async_trait]
impl ReviewStore for MemoryReviewStore {
    async fn add(&self, review: &Review) -> Result<(), HbnbError> {
        self.repo.add(review.id, review.clone()).await;
        Ok(())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Review>, HbnbError> {
        Ok(self.repo.get(id).await)
    }

    async fn get_all(&self) -> Result<Vec<Review>, HbnbError> {
        let mut reviews = self.repo.get_all().await;
        reviews.sort_by_key(|r| r.created_at);
        Ok(reviews)
    }

    async fn get_by_place(&self, place_id: Uuid) -> Result<Vec<Review>, HbnbError> {
        let mut reviews = self.repo.filter(|r| r.place_id == place_id).await;
        reviews.sort_by_key(|r| r.created_at);
        Ok(reviews)
    }

    async fn get_by_user_and_place(
        &self,
        user_id: Uuid,
        place_id: Uuid,
    ) -> Result<Option<Review>, HbnbError> {
        Ok(self
            .repo
            .find(|r| r.user_id == user_id && r.place_id == place_id)
            .await)
    }

    async fn update(&self, review: &Review) -> Result<(), HbnbError> {
        if self.repo.update(review.id, review.clone()).await {
            Ok(())
        } else {
            Err(HbnbError::NotFound("Review".to_string()))
        }
    }

    async fn delete(&self, id: Uuid) -> Result<(), HbnbError> {
        if self.repo.delete(id).await {
            Ok(())
        } else {
            Err(HbnbError::NotFound("Review".to_string()))
        }
    }
}

pub struct MemoryAmenityStore {
    repo: MemoryRepository<Amenity>,
}

impl MemoryAmenityStore {
    pub fn new() -> Self {
        Self {
            repo: MemoryRepository::new(),
        }
    }
}

#[async_trait]
impl AmenityStore for MemoryAmenityStore {
    async fn add(&self, amenity: &Amenity) -> Result<(), HbnbError> {
        self.repo.add(amenity.id, amenity.clone()).await;
        Ok(())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Amenity>, HbnbError> {
        Ok(self.repo.get(id).await)
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<Amenity>, HbnbError> {
        Ok(self.repo.find(|a| a.name == name).await)
    }

    async fn get_all(&self) -> Result<Vec<Amenity>, HbnbError> {
        let mut amenities = self.repo.get_all().await;
        amenities.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(amenities)
    }

    async fn update(&self, amenity: &Amenity) -> Result<(), HbnbError> {
        if self.repo.update(amenity.id, amenity.clone()).await {
            Ok(())
        } else {
            Err(HbnbError::NotFound("Amenity".to_string()))
        }
    }

    async fn delete(&self, id: Uuid) -> Result<(), HbnbError> {
        if self.repo.delete(id).await {
            Ok(())
        } else {
            Err(HbnbError::NotFound("Amenity".to_string()))
        }
    }
}
