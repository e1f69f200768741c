// src/main.rs
// DOCUMENTATION: Application entry point
// PURPOSE: Initialize config, storage backend, and start HTTP server

use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::io;

use hbnb_api::config::{self, Config};
use hbnb_api::handlers;
use hbnb_api::services::HbnbFacade;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Load configuration
    let config = Config::from_env();
    if let Err(e) = config.validate() {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    }

    // 3. Initialize logging
    if std::env::var("RUST_LOG").is_err() {
        // Use configured log level or default
        let log_level = if !config.log_level.is_empty() {
            &config.log_level
        } else {
            "info,actix_web=info,sqlx=warn"
        };
        std::env::set_var("RUST_LOG", log_level);
    }
    env_logger::init();

    log::info!("Starting hbnb-api service...");
    log::info!("Environment: {}", config.environment);
    log::info!("Storage backend: {}", config.storage_backend);
    log::info!(
        "Server Address: {}:{}",
        config.server_address,
        config.server_port
    );

    // 4. Build the facade over the selected backend
    let facade = if config.storage_backend == "postgres" {
        let pool = match config::init_db_pool(&config).await {
            Ok(pool) => pool,
            Err(e) => {
                log::error!("Failed to set up database: {}", e);
                std::process::exit(1);
            }
        };
        HbnbFacade::postgres(pool)
    } else {
        log::warn!("Using in-memory storage - data is lost on restart");
        HbnbFacade::in_memory()
    };

    // 5. Start HTTP server
    let server_addr = format!("{}:{}", config.server_address, config.server_port);
    let config_clone = config.clone();

    HttpServer::new(move || {
        App::new()
            // Application state (facade and config)
            .app_data(web::Data::new(facade.clone()))
            .app_data(web::Data::new(config_clone.clone()))
            // Middleware
            .wrap(Logger::default())
            .wrap(actix_web::middleware::Compress::default())
            // Routes
            .configure(handlers::health_config)
            .configure(handlers::auth_config)
            .configure(handlers::users_config)
            .configure(handlers::amenities_config)
            .configure(handlers::places_config)
            .configure(handlers::reviews_config)
    })
    .bind(&server_addr)?
    .run()
    .await
}
