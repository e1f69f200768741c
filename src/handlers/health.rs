// src/handlers/health.rs
// DOCUMENTATION: Health check handler
// PURPOSE: Report service status and which storage backend is active

use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

use crate::config::Config;

pub async fn health_check(config: web::Data<Config>) -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "service": "hbnb-api",
        "version": env!("CARGO_PKG_VERSION"),
        "storage_backend": config.storage_backend
    }))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check));
}
