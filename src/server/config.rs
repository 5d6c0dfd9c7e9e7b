use std::{path::PathBuf, str::FromStr};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_UPLOAD_DIR: &str = "uploads";
const DEFAULT_CORS_ALLOWED_ORIGINS: &str = "http://localhost:5173";
const DEFAULT_BCRYPT_COST: u32 = 12;

pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,

    pub bind_address: String,
    /// Root directory for uploaded files, served under `/uploads`.
    pub upload_dir: PathBuf,
    pub cors_allowed_origins: Vec<String>,
    /// Sets the `Secure` attribute on auth cookies.
    pub cookie_secure: bool,
    pub bcrypt_cost: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            jwt_secret: required("JWT_SECRET")?,
            bind_address: optional("BIND_ADDRESS", DEFAULT_BIND_ADDRESS),
            upload_dir: PathBuf::from(optional("UPLOAD_DIR", DEFAULT_UPLOAD_DIR)),
            cors_allowed_origins: optional("CORS_ALLOWED_ORIGINS", DEFAULT_CORS_ALLOWED_ORIGINS)
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_string)
                .collect(),
            cookie_secure: parsed("COOKIE_SECURE", false)?,
            bcrypt_cost: parsed("BCRYPT_COST", DEFAULT_BCRYPT_COST)?,
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn parsed<T: FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value.trim().parse().map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
        Err(_) => Ok(default),
    }
}
