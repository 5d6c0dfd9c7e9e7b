//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error returned by every service and controller. It wraps the
//! domain-specific error enums and implements `IntoResponse`, so handlers can use `?` and still
//! produce a JSON `{"error": "..."}` body with the right status code.

pub mod auth;
pub mod config;
pub mod internal;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, internal::InternalError},
};

/// Top-level application error type.
///
/// Infrastructure failures (`DbErr`, `IoErr`, `InternalErr`, ...) all collapse into a generic
/// 500 response with the details logged server-side. The message-carrying variants map to the
/// client-visible status codes used throughout the API.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication failure.
    ///
    /// Delegates to `AuthError::into_response()`, which always answers 401.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Unexpected failure inside the application (hashing, signing, blocking pool).
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Filesystem or socket error.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found, or not owned by the caller. Results in 404 Not Found.
    #[error("{0}")]
    NotFound(String),

    /// Request failed validation. Results in 400 Bad Request.
    #[error("{0}")]
    BadRequest(String),

    /// Username or email already taken. Results in 409 Conflict.
    #[error("{0}")]
    Conflict(String),

    /// A bird required for the operation is not in a usable state.
    ///
    /// Results in 422 Unprocessable Entity.
    #[error("{0}")]
    Unavailable(String),

    /// Operation attempted again before its cooldown elapsed. Results in 429 Too Many Requests.
    #[error("{0}")]
    RateLimited(String),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest`
/// - 401 Unauthorized - For `AuthErr`, delegated to `AuthError::into_response()`
/// - 404 Not Found - For `NotFound`
/// - 409 Conflict - For `Conflict`
/// - 422 Unprocessable Entity - For `Unavailable`
/// - 429 Too Many Requests - For `RateLimited`
/// - 500 Internal Server Error - For everything else
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg) => error_response(StatusCode::NOT_FOUND, msg),
            Self::BadRequest(msg) => error_response(StatusCode::BAD_REQUEST, msg),
            Self::Conflict(msg) => error_response(StatusCode::CONFLICT, msg),
            Self::Unavailable(msg) => error_response(StatusCode::UNPROCESSABLE_ENTITY, msg),
            Self::RateLimited(msg) => error_response(StatusCode::TOO_MANY_REQUESTS, msg),
            err => InternalServerError(err).into_response(),
        }
    }
}

fn error_response(status: StatusCode, error: String) -> Response {
    (status, Json(ErrorDto { error })).into_response()
}

/// Wrapper converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the full error and returns a generic message so internal details never reach the
/// client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error".to_string(),
        )
    }
}
