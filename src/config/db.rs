// src/config/db.rs
// DOCUMENTATION: PostgreSQL pool setup for the relational backend
// PURPOSE: Connect and bootstrap the schema in one step

use crate::config::Config;
use crate::db;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

/// Connect to PostgreSQL and hand back a pool the stores can share
/// DOCUMENTATION: Runs the idempotent schema bootstrap as part of
/// initialization, so a fresh database serves requests without a
/// separate migration step. Used by the server when
/// STORAGE_BACKEND=postgres and by the create_admin tool.
pub async fn init_db_pool(config: &Config) -> Result<PgPool, sqlx::Error> {
    log::info!("Connecting to PostgreSQL");

    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connection_timeout))
        // Listing traffic is bursty; drop idle connections after 5 minutes
        // and recycle each connection after 30
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .connect(&config.database_url)
        .await?;

    // Doubles as the connectivity check
    db::ensure_schema(&pool).await?;

    log::info!("PostgreSQL pool ready");
    Ok(pool)
}
