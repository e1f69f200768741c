// src/models/user.rs
// DOCUMENTATION: User entity and request/response DTOs
// PURPOSE: Account data with write-only password hash

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Represents a user account record
/// DOCUMENTATION: Maps directly to the users table in PostgreSQL
/// The password hash is never serialized in API output
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique identifier (UUID v4)
    pub id: Uuid,

    /// First name (max 50 characters)
    pub first_name: String,

    /// Last name (max 50 characters)
    pub last_name: String,

    /// Email address, unique across all users
    pub email: String,

    /// Argon2 password hash - write-only field
    #[serde(skip_serializing, default)]
    pub password_hash: String,

    /// Whether this account has admin privileges
    pub is_admin: bool,

    /// When record was created
    pub created_at: DateTime<Utc>,

    /// When record was last modified
    pub updated_at: DateTime<Utc>,
}

/// Email must be local@domain with at least one dot in the domain
/// (stricter than the HTML5 rule, which accepts bare hostnames)
pub fn validate_email_format(email: &str) -> Result<(), ValidationError> {
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split_once('.')
                    .map_or(false, |(head, tail)| !head.is_empty() && !tail.is_empty())
        }
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err(ValidationError::new("email"))
    }
}

/// Request DTO for registering a new user
/// DOCUMENTATION: Data transfer object for POST /api/v1/users
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterUserRequest {
    #[validate(length(min = 1, max = 50))]
    pub first_name: String,

    #[validate(length(min = 1, max = 50))]
    pub last_name: String,

    #[validate(custom = "validate_email_format")]
    pub email: String,

    /// Plaintext password, hashed before storage
    #[validate(length(min = 1))]
    pub password: String,
}

/// Request DTO for updating a user
/// DOCUMENTATION: All fields optional - only provided fields are updated
/// The public API rejects email/password changes; the facade still supports
/// password rotation for administrative tooling
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 50))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = 50))]
    pub last_name: Option<String>,

    #[validate(custom = "validate_email_format")]
    pub email: Option<String>,

    #[validate(length(min = 1))]
    pub password: Option<String>,
}

/// Response DTO exposed via API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub is_admin: bool,
}

impl User {
    /// Build a new user from a validated registration request
    /// The caller supplies the already-hashed password
    pub fn new(req: &RegisterUserRequest, password_hash: String, is_admin: bool) -> Self {
        let now = Utc::now();
        User {
            id: Uuid::new_v4(),
            first_name: req.first_name.clone(),
            last_name: req.last_name.clone(),
            email: req.email.clone(),
            password_hash,
            is_admin,
            created_at: now,
            updated_at: now,
        }
    }

    /// Patch provided fields and bump updated_at
    /// Password changes are handled separately by the facade
    pub fn apply_update(&mut self, req: &UpdateUserRequest) {
        if let Some(first_name) = &req.first_name {
            self.first_name = first_name.clone();
        }
        if let Some(last_name) = &req.last_name {
            self.last_name = last_name.clone();
        }
        if let Some(email) = &req.email {
            self.email = email.clone();
        }
        self.updated_at = Utc::now();
    }

    /// Convert User to UserResponse for API output
    /// Excludes the password hash
    pub fn to_response(&self) -> UserResponse {
        UserResponse {
            id: self.id,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            is_admin: self.is_admin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> RegisterUserRequest {
        RegisterUserRequest {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password: "s3cret".to_string(),
        }
    }

    #[test]
    fn test_valid_registration_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_email_without_domain_dot_rejected() {
        let mut req = valid_request();
        req.email = "ada@example".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_email_without_at_rejected() {
        let mut req = valid_request();
        req.email = "ada.example.com".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_first_name_over_50_chars_rejected() {
        let mut req = valid_request();
        req.first_name = "a".repeat(51);
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_empty_last_name_rejected() {
        let mut req = valid_request();
        req.last_name = String::new();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let user = User::new(&valid_request(), "hash".to_string(), false);
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password_hash").is_none());
    }

    #[test]
    fn test_apply_update_bumps_updated_at() {
        let mut user = User::new(&valid_request(), "hash".to_string(), false);
        let before = user.updated_at;
        user.apply_update(&UpdateUserRequest {
            first_name: Some("Grace".to_string()),
            last_name: None,
            email: None,
            password: None,
        });
        assert_eq!(user.first_name, "Grace");
        assert_eq!(user.last_name, "Lovelace");
        assert!(user.updated_at >= before);
    }
}
