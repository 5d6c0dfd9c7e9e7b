use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The request carried no access (or refresh) token cookie.
    #[error("Request is missing the {0} cookie")]
    MissingToken(&'static str),

    /// Token failed signature, algorithm, expiry or format checks.
    #[error("Token rejected: {0}")]
    InvalidToken(#[source] jsonwebtoken::errors::Error),

    /// Login identity unknown or password mismatch.
    ///
    /// Both cases share this variant so responses never reveal which one occurred.
    #[error("Invalid username/email or password")]
    InvalidCredentials,

    /// Token was valid but its user no longer exists.
    #[error("User {0} from token not found in database")]
    UserNotInDatabase(i32),
}

/// Converts authentication errors into 401 responses.
///
/// Details are logged at debug level; clients only see a generic message, apart from the
/// login failure message which is already identical for every cause.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let message = match self {
            Self::InvalidCredentials => "Invalid username/email or password",
            Self::MissingToken(_) | Self::InvalidToken(_) | Self::UserNotInDatabase(_) => {
                "Unauthorized"
            }
        };

        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
