// src/lib.rs
// DOCUMENTATION: Library root
// PURPOSE: Expose application modules to the server binary, the admin
// tool and the integration tests

pub mod auth;
pub mod config;
pub mod db;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod services;
