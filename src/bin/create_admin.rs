// src/bin/create_admin.rs
// DOCUMENTATION: Admin bootstrap tool
// PURPOSE: Create the first admin account directly against the database

use anyhow::{bail, Context, Result};
use dotenv::dotenv;
use std::env;
use validator::Validate;

use hbnb_api::config::{self, Config};
use hbnb_api::models::RegisterUserRequest;
use hbnb_api::services::HbnbFacade;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    if config.storage_backend != "postgres" {
        bail!("create_admin requires STORAGE_BACKEND=postgres");
    }

    let email = env::var("ADMIN_EMAIL").context("ADMIN_EMAIL is required")?;
    let password = env::var("ADMIN_PASSWORD").context("ADMIN_PASSWORD is required")?;
    let first_name = env::var("ADMIN_FIRST_NAME").unwrap_or_else(|_| "Admin".to_string());
    let last_name = env::var("ADMIN_LAST_NAME").unwrap_or_else(|_| "User".to_string());

    let pool = config::init_db_pool(&config)
        .await
        .context("failed to set up database")?;

    let facade = HbnbFacade::postgres(pool);

    let existing = facade
        .get_user_by_email(&email)
        .await
        .context("failed to look up existing admin")?;
    if existing.is_some() {
        println!("Admin user {} already exists, nothing to do", email);
        return Ok(());
    }

    let req = RegisterUserRequest {
        first_name,
        last_name,
        email: email.clone(),
        password,
    };
    req.validate().context("invalid admin details")?;

    let user = facade
        .create_user(&req, true)
        .await
        .map_err(|e| anyhow::anyhow!("failed to create admin: {}", e))?;

    println!("Created admin user {} ({})", email, user.id);
    Ok(())
}
