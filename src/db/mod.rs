// src/db/mod.rs
// DOCUMENTATION: Database module organization
// PURPOSE: Re-export store traits and both backend implementations

pub mod amenity_repository;
pub mod memory;
pub mod place_repository;
pub mod review_repository;
pub mod schema;
pub mod user_repository;

pub use amenity_repository::*;
pub use memory::*;
pub use place_repository::*;
pub use review_repository::*;
pub use schema::ensure_schema;
pub use user_repository::*;

use crate::errors::HbnbError;

/// Map a sqlx error to an application error, surfacing unique-constraint
/// violations as conflicts
pub(crate) fn map_db_error(e: sqlx::Error, context: &str) -> HbnbError {
    if let sqlx::Error::Database(db_err) = &e {
        // Postgres unique_violation
        if db_err.code().as_deref() == Some("23505") {
            return HbnbError::AlreadyExists(format!("{} already exists", context));
        }
    }
    log::error!("{} failed: {}", context, e);
    HbnbError::DatabaseError(format!("{} failed: {}", context, e))
}
