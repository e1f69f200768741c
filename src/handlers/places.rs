// src/handlers/places.rs
// DOCUMENTATION: HTTP handlers for place operations
// PURPOSE: Parse requests, enforce ownership, call the facade

use actix_web::{web, HttpRequest, HttpResponse, Responder};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use crate::auth::{require_auth, Claims};
use crate::config::Config;
use crate::errors::HbnbError;
use crate::models::{CreatePlaceRequest, UpdatePlaceRequest};
use crate::services::HbnbFacade;

/// Body for POST /api/v1/places/{id}/amenities
#[derive(Debug, Deserialize)]
pub struct AttachAmenityRequest {
    pub id: Uuid,
}

/// Only the owner or an admin may modify a place
async fn authorize_owner(
    facade: &HbnbFacade,
    claims: &Claims,
    place_id: Uuid,
) -> Result<(), HbnbError> {
    let place = facade.get_place(place_id).await?;
    if place.owner_id != claims.user_id()? && !claims.is_admin {
        return Err(HbnbError::Forbidden);
    }
    Ok(())
}

/// POST /api/v1/places
/// Create a new place owned by the authenticated user
pub async fn create_place(
    facade: web::Data<HbnbFacade>,
    config: web::Data<Config>,
    http_req: HttpRequest,
    req: web::Json<CreatePlaceRequest>,
) -> Result<impl Responder, HbnbError> {
    let claims = require_auth(&http_req, &config)?;

    if let Err(e) = req.validate() {
        return Err(HbnbError::ValidationError(e.to_string()));
    }

    let place = facade.create_place(&req, claims.user_id()?).await?;
    Ok(HttpResponse::Created().json(place.to_response()))
}

/// GET /api/v1/places
/// Retrieve all places
pub async fn list_places(facade: web::Data<HbnbFacade>) -> Result<impl Responder, HbnbError> {
    let places = facade.get_all_places().await?;
    let body: Vec<_> = places.iter().map(|p| p.to_response()).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// GET /api/v1/places/{id}
/// Place details with embedded owner, amenities and reviews
pub async fn get_place(
    facade: web::Data<HbnbFacade>,
    path: web::Path<Uuid>,
) -> Result<impl Responder, HbnbError> {
    let detail = facade.get_place_detail(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(detail))
}

/// PUT /api/v1/places/{id}
/// Update a place (owner or admin)
pub async fn update_place(
    facade: web::Data<HbnbFacade>,
    config: web::Data<Config>,
    http_req: HttpRequest,
    path: web::Path<Uuid>,
    req: web::Json<UpdatePlaceRequest>,
) -> Result<impl Responder, HbnbError> {
    let claims = require_auth(&http_req, &config)?;
    let place_id = path.into_inner();
    authorize_owner(&facade, &claims, place_id).await?;

    if let Err(e) = req.validate() {
        return Err(HbnbError::ValidationError(e.to_string()));
    }

    let place = facade.update_place(place_id, &req).await?;
    Ok(HttpResponse::Ok().json(place.to_response()))
}

/// DELETE /api/v1/places/{id}
/// Delete a place and its reviews (owner or admin)
pub async fn delete_place(
    facade: web::Data<HbnbFacade>,
    config: web::Data<Config>,
    http_req: HttpRequest,
    path: web::Path<Uuid>,
) -> Result<impl Responder, HbnbError> {
    let claims = require_auth(&http_req, &config)?;
    let place_id = path.into_inner();
    authorize_owner(&facade, &claims, place_id).await?;

    facade.delete_place(place_id).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// POST /api/v1/places/{id}/amenities
/// Attach an amenity to a place (owner or admin)
pub async fn add_amenity(
    facade: web::Data<HbnbFacade>,
    config: web::Data<Config>,
    http_req: HttpRequest,
    path: web::Path<Uuid>,
    req: web::Json<AttachAmenityRequest>,
) -> Result<impl Responder, HbnbError> {
    let claims = require_auth(&http_req, &config)?;
    let place_id = path.into_inner();
    authorize_owner(&facade, &claims, place_id).await?;

    facade.add_amenity_to_place(place_id, req.id).await?;
    Ok(HttpResponse::Ok().json(json!({"message": "Amenity added successfully"})))
}

/// GET /api/v1/places/{id}/reviews
/// All reviews for one place
pub async fn place_reviews(
    facade: web::Data<HbnbFacade>,
    path: web::Path<Uuid>,
) -> Result<impl Responder, HbnbError> {
    let reviews = facade.get_reviews_by_place(path.into_inner()).await?;
    let body: Vec<_> = reviews.iter().map(|r| r.to_response()).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// Configuration for place routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/places")
            .route("", web::post().to(create_place))
            .route("", web::get().to(list_places))
            .route("/{id}", web::get().to(get_place))
            .route("/{id}", web::put().to(update_place))
            .route("/{id}", web::delete().to(delete_place))
            .route("/{id}/amenities", web::post().to(add_amenity))
            .route("/{id}/reviews", web::get().to(place_reviews)),
    );
}
