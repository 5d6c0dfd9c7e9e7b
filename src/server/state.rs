//! Application state shared across all request handlers.
//!
//! `AppState` is built once at startup and cloned into each handler by axum's state
//! extraction. Every field is cheap to clone: the database connection is a pool handle and
//! the token service only holds key material.

use std::path::PathBuf;

use sea_orm::DatabaseConnection;

use crate::server::{config::Config, service::token::TokenService};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DatabaseConnection,

    /// Issues and validates access/refresh tokens.
    pub tokens: TokenService,

    /// Directory uploaded files are written to.
    pub upload_dir: PathBuf,

    /// Whether auth cookies carry the `Secure` attribute.
    pub cookie_secure: bool,

    /// bcrypt work factor used when hashing new passwords.
    pub bcrypt_cost: u32,
}

impl AppState {
    /// Creates the application state from its connected dependencies and configuration.
    ///
    /// # Arguments
    /// - `db` - Database connection pool with migrations applied
    /// - `config` - Loaded application configuration
    ///
    /// # Returns
    /// - `AppState` - Initialized application state
    pub fn new(db: DatabaseConnection, config: &Config) -> Self {
        Self {
            db,
            tokens: TokenService::new(&config.jwt_secret),
            upload_dir: config.upload_dir.clone(),
            cookie_secure: config.cookie_secure,
            bcrypt_cost: config.bcrypt_cost,
        }
    }
}
