// src/handlers/amenities.rs
// DOCUMENTATION: HTTP handlers for amenity operations
// PURPOSE: Parse requests, call the facade, return responses

use actix_web::{web, HttpResponse, Responder};
use uuid::Uuid;
use validator::Validate;

use crate::errors::HbnbError;
use crate::models::CreateAmenityRequest;
use crate::services::HbnbFacade;

/// POST /api/v1/amenities
/// Create a new amenity
pub async fn create_amenity(
    facade: web::Data<HbnbFacade>,
    req: web::Json<CreateAmenityRequest>,
) -> Result<impl Responder, HbnbError> {
    if let Err(e) = req.validate() {
        return Err(HbnbError::ValidationError(e.to_string()));
    }

    let amenity = facade.create_amenity(&req).await?;
    Ok(HttpResponse::Created().json(amenity.to_response()))
}

/// GET /api/v1/amenities
/// Retrieve all amenities
pub async fn list_amenities(facade: web::Data<HbnbFacade>) -> Result<impl Responder, HbnbError> {
    let amenities = facade.get_all_amenities().await?;
    let body: Vec<_> = amenities.iter().map(|a| a.to_response()).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// GET /api/v1/amenities/{id}
pub async fn get_amenity(
    facade: web::Data<HbnbFacade>,
    path: web::Path<Uuid>,
) -> Result<impl Responder, HbnbError> {
    let amenity = facade.get_amenity(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(amenity.to_response()))
}

/// PUT /api/v1/amenities/{id}
/// Rename an amenity
pub async fn update_amenity(
    facade: web::Data<HbnbFacade>,
    path: web::Path<Uuid>,
    req: web::Json<CreateAmenityRequest>,
) -> Result<impl Responder, HbnbError> {
    if let Err(e) = req.validate() {
        return Err(HbnbError::ValidationError(e.to_string()));
    }

    let amenity = facade.update_amenity(path.into_inner(), &req).await?;
    Ok(HttpResponse::Ok().json(amenity.to_response()))
}

/// DELETE /api/v1/amenities/{id}
pub async fn delete_amenity(
    facade: web::Data<HbnbFacade>,
    path: web::Path<Uuid>,
) -> Result<impl Responder, HbnbError> {
    facade.delete_amenity(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Configuration for amenity routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/amenities")
            .route("", web::post().to(create_amenity))
            .route("", web::get().to(list_amenities))
            .route("/{id}", web::get().to(get_amenity))
            .route("/{id}", web::put().to(update_amenity))
            .route("/{id}", web::delete().to(delete_amenity)),
    );
}
