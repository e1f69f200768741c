// src/auth/jwt.rs
// DOCUMENTATION: JWT access token issue and verification
// PURPOSE: HS256 tokens carrying the user id and admin flag

use crate::config::Config;
use crate::errors::HbnbError;
use crate::models::User;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims embedded in every access token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id as string
    pub sub: String,
    /// Admin flag copied from the user record at login time
    pub is_admin: bool,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    /// Parse the subject back into a user id
    pub fn user_id(&self) -> Result<Uuid, HbnbError> {
        Uuid::parse_str(&self.sub).map_err(|_| HbnbError::Unauthorized)
    }
}

/// Token signer/verifier built from application config
#[derive(Clone)]
pub struct JwtManager {
    secret: String,
    ttl: Duration,
}

impl JwtManager {
    pub fn from_config(config: &Config) -> Self {
        Self {
            secret: config.jwt_secret.clone(),
            ttl: Duration::minutes(config.jwt_ttl_minutes),
        }
    }

    #[cfg(test)]
    fn with_secret(secret: &str, ttl_minutes: i64) -> Self {
        Self {
            secret: secret.to_string(),
            ttl: Duration::minutes(ttl_minutes),
        }
    }

    /// Issue an access token for a user
    pub fn issue(&self, user: &User) -> Result<String, HbnbError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user.id.to_string(),
            is_admin: user.is_admin,
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };
        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| {
            log::error!("Failed to sign access token: {}", e);
            HbnbError::InternalError
        })
    }

    /// Verify a token and return its claims
    /// Expired or tampered tokens map to 401
    pub fn verify(&self, token: &str) -> Result<Claims, HbnbError> {
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::new(Algorithm::HS256),
        )
        .map(|data| data.claims)
        .map_err(|_| HbnbError::Unauthorized)
    }
}
