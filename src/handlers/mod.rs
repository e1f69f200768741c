// src/handlers/mod.rs
// DOCUMENTATION: Handlers module organization
// PURPOSE: Re-export handler components

pub mod amenities;
pub mod auth;
pub mod health;
pub mod places;
pub mod reviews;
pub mod users;

pub use amenities::config as amenities_config;
pub use auth::config as auth_config;
pub use health::config as health_config;
pub use places::config as places_config;
pub use reviews::config as reviews_config;
pub use users::config as users_config;
