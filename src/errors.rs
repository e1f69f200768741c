// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for entire application

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;

/// Application-specific error types
/// DOCUMENTATION: Comprehensive error enum for all possible failures
/// Each variant maps to appropriate HTTP status code and error response
#[derive(Error, Debug)]
pub enum HbnbError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("{0}")]
    AlreadyExists(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Unauthorized access")]
    Unauthorized,

    #[error("Forbidden access")]
    Forbidden,

    #[error("Internal server error")]
    InternalError,
}

/// Convert HbnbError to HTTP response
/// DOCUMENTATION: Maps error types to HTTP status codes and JSON responses
impl ResponseError for HbnbError {
    fn error_response(&self) -> HttpResponse {
        let (status, error_code) = match self {
            HbnbError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            HbnbError::AlreadyExists(_) => (StatusCode::CONFLICT, "ALREADY_EXISTS"),
            HbnbError::DatabaseError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "DATABASE_ERROR"),
            HbnbError::InvalidInput(_) => (StatusCode::BAD_REQUEST, "INVALID_INPUT"),
            HbnbError::ValidationError(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            HbnbError::Unauthorized => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
            HbnbError::Forbidden => (StatusCode::FORBIDDEN, "FORBIDDEN"),
            HbnbError::InternalError => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        let body = json!({
            "error": {
                "code": error_code,
                "message": self.to_string(),
                "timestamp": chrono::Utc::now().to_rfc3339()
            }
        });

        HttpResponse::build(status).json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            HbnbError::NotFound(_) => StatusCode::NOT_FOUND,
            HbnbError::AlreadyExists(_) => StatusCode::CONFLICT,
            HbnbError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            HbnbError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            HbnbError::ValidationError(_) => StatusCode::BAD_REQUEST,
            HbnbError::Unauthorized => StatusCode::UNAUTHORIZED,
            HbnbError::Forbidden => StatusCode::FORBIDDEN,
            HbnbError::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
