// src/models/mod.rs
// DOCUMENTATION: Models module organization
// PURPOSE: Re-export model components

pub mod amenity;
pub mod place;
pub mod review;
pub mod user;

pub use amenity::*;
pub use place::*;
pub use review::*;
pub use user::*;
