// src/handlers/auth.rs
// DOCUMENTATION: Login endpoint issuing JWT access tokens
// PURPOSE: Exchange email/password credentials for a bearer token

use actix_web::{web, HttpRequest, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::auth::{require_auth, verify_password, JwtManager};
use crate::config::Config;
use crate::errors::HbnbError;
use crate::services::HbnbFacade;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
}

/// POST /api/v1/auth/login
/// Authenticate a user and return a JWT
pub async fn login(
    facade: web::Data<HbnbFacade>,
    config: web::Data<Config>,
    req: web::Json<LoginRequest>,
) -> Result<impl Responder, HbnbError> {
    let user = facade
        .get_user_by_email(&req.email)
        .await?
        .ok_or(HbnbError::Unauthorized)?;

    if !verify_password(&req.password, &user.password_hash) {
        return Err(HbnbError::Unauthorized);
    }

    let access_token = JwtManager::from_config(&config).issue(&user)?;
    log::info!("User {} logged in", user.id);

    Ok(HttpResponse::Ok().json(LoginResponse { access_token }))
}

/// GET /api/v1/protected
/// Smoke endpoint confirming the bearer token is valid
pub async fn protected(
    config: web::Data<Config>,
    req: HttpRequest,
) -> Result<impl Responder, HbnbError> {
    let claims = require_auth(&req, &config)?;
    Ok(HttpResponse::Ok().json(json!({
        "message": format!("Hello, user {}", claims.sub)
    })))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api/v1/auth").route("/login", web::post().to(login)))
        .route("/api/v1/protected", web::get().to(protected));
}
