// src/auth/mod.rs
// DOCUMENTATION: Authentication module organization
// PURPOSE: JWT issue/verify and password hashing

pub mod jwt;
pub mod password;

pub use jwt::{Claims, JwtManager};
pub use password::{hash_password, verify_password};

use crate::config::Config;
use crate::errors::HbnbError;
use actix_web::HttpRequest;

/// Extract and verify the bearer token on a request
/// DOCUMENTATION: Used by every protected handler
/// Returns the decoded claims or 401
pub fn require_auth(req: &HttpRequest, config: &Config) -> Result<Claims, HbnbError> {
    let token = bearer_from_header(req).ok_or(HbnbError::Unauthorized)?;
    JwtManager::from_config(config).verify(&token)
}

fn bearer_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get(actix_web::http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
        .map(|s| s.to_string())
}
