// src/handlers/reviews.rs
// DOCUMENTATION: HTTP handlers for review operations
// PURPOSE: Parse requests, enforce authorship, call the facade

use actix_web::{web, HttpRequest, HttpResponse, Responder};
use uuid::Uuid;
use validator::Validate;

use crate::auth::require_auth;
use crate::config::Config;
use crate::errors::HbnbError;
use crate::models::{CreateReviewRequest, UpdateReviewRequest};
use crate::services::HbnbFacade;

/// POST /api/v1/reviews
/// Create a review authored by the authenticated user
pub async fn create_review(
    facade: web::Data<HbnbFacade>,
    config: web::Data<Config>,
    http_req: HttpRequest,
    req: web::Json<CreateReviewRequest>,
) -> Result<impl Responder, HbnbError> {
    let claims = require_auth(&http_req, &config)?;

    if let Err(e) = req.validate() {
        return Err(HbnbError::ValidationError(e.to_string()));
    }

    let review = facade.create_review(&req, claims.user_id()?).await?;
    Ok(HttpResponse::Created().json(review.to_response()))
}

/// GET /api/v1/reviews
/// Retrieve all reviews
pub async fn list_reviews(facade: web::Data<HbnbFacade>) -> Result<impl Responder, HbnbError> {
    let reviews = facade.get_all_reviews().await?;
    let body: Vec<_> = reviews.iter().map(|r| r.to_response()).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// GET /api/v1/reviews/{id}
pub async fn get_review(
    facade: web::Data<HbnbFacade>,
    path: web::Path<Uuid>,
) -> Result<impl Responder, HbnbError> {
    let review = facade.get_review(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(review.to_response()))
}

/// PUT /api/v1/reviews/{id}
/// Update a review (author only)
pub async fn update_review(
    facade: web::Data<HbnbFacade>,
    config: web::Data<Config>,
    http_req: HttpRequest,
    path: web::Path<Uuid>,
    req: web::Json<UpdateReviewRequest>,
) -> Result<impl Responder, HbnbError> {
    let claims = require_auth(&http_req, &config)?;
    let review_id = path.into_inner();

    let review = facade.get_review(review_id).await?;
    if review.user_id != claims.user_id()? {
        return Err(HbnbError::Forbidden);
    }

    if let Err(e) = req.validate() {
        return Err(HbnbError::ValidationError(e.to_string()));
    }

    let review = facade.update_review(review_id, &req).await?;
    Ok(HttpResponse::Ok().json(review.to_response()))
}

/// DELETE /api/v1/reviews/{id}
/// Delete a review (author only)
pub async fn delete_review(
    facade: web::Data<HbnbFacade>,
    config: web::Data<Config>,
    http_req: HttpRequest,
    path: web::Path<Uuid>,
) -> Result<impl Responder, HbnbError> {
    let claims = require_auth(&http_req, &config)?;
    let review_id = path.into_inner();

    let review = facade.get_review(review_id).await?;
    if review.user_id != claims.user_id()? {
        return Err(HbnbError::Forbidden);
    }

    facade.delete_review(review_id).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Configuration for review routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/reviews")
            .route("", web::post().to(create_review))
            .route("", web::get().to(list_reviews))
            .route("/{id}", web::get().to(get_review))
            .route("/{id}", web::put().to(update_review))
            .route("/{id}", web::delete().to(delete_review)),
    );
}
