// src/handlers/users.rs
// DOCUMENTATION: HTTP handlers for user operations
// PURPOSE: Parse requests, call the facade, return responses

use actix_web::{web, HttpRequest, HttpResponse, Responder};
use uuid::Uuid;
use validator::Validate;

use crate::auth::require_auth;
use crate::config::Config;
use crate::errors::HbnbError;
use crate::models::{RegisterUserRequest, UpdateUserRequest};
use crate::services::HbnbFacade;

/// POST /api/v1/users
/// Register a new user
pub async fn register_user(
    facade: web::Data<HbnbFacade>,
    req: web::Json<RegisterUserRequest>,
) -> Result<impl Responder, HbnbError> {
    if let Err(e) = req.validate() {
        return Err(HbnbError::ValidationError(e.to_string()));
    }

    let user = facade.create_user(&req, false).await?;
    Ok(HttpResponse::Created().json(user.to_response()))
}

/// GET /api/v1/users
/// Retrieve all users
pub async fn list_users(facade: web::Data<HbnbFacade>) -> Result<impl Responder, HbnbError> {
    let users = facade.get_users().await?;
    let body: Vec<_> = users.iter().map(|u| u.to_response()).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// GET /api/v1/users/{id}
/// Retrieve a user by ID
pub async fn get_user(
    facade: web::Data<HbnbFacade>,
    path: web::Path<Uuid>,
) -> Result<impl Responder, HbnbError> {
    let user = facade.get_user(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(user.to_response()))
}

/// PUT /api/v1/users/{id}
/// Update own profile (email and password changes are rejected)
pub async fn update_user(
    facade: web::Data<HbnbFacade>,
    config: web::Data<Config>,
    http_req: HttpRequest,
    path: web::Path<Uuid>,
    req: web::Json<UpdateUserRequest>,
) -> Result<impl Responder, HbnbError> {
    let claims = require_auth(&http_req, &config)?;
    let user_id = path.into_inner();

    // A user may only edit their own profile
    facade.get_user(user_id).await?;
    if claims.user_id()? != user_id {
        return Err(HbnbError::Forbidden);
    }

    if req.email.is_some() || req.password.is_some() {
        return Err(HbnbError::InvalidInput(
            "You cannot modify email or password".to_string(),
        ));
    }

    if let Err(e) = req.validate() {
        return Err(HbnbError::ValidationError(e.to_string()));
    }

    let user = facade.update_user(user_id, &req).await?;
    Ok(HttpResponse::Ok().json(user.to_response()))
}

/// Configuration for user routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/users")
            .route("", web::post().to(register_user))
            .route("", web::get().to(list_users))
            .route("/{id}", web::get().to(get_user))
            .route("/{id}", web::put().to(update_user)),
    );
}
