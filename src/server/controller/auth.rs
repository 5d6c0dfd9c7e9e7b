use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use axum_extra::extract::cookie::CookieJar;
use chrono::Utc;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        user::{AuthResponseDto, LoginDto, RegisterDto, UpdateProfileFormDto, UserDto},
    },
    server::{
        error::{auth::AuthError, AppError},
        middleware::{
            auth::AuthGuard,
            cookie::{AuthCookies, REFRESH_TOKEN_COOKIE},
        },
        model::user::{AvatarUpload, LoginParam, RegisterUserParam, UpdateProfileParam},
        service::{auth::AuthService, profile::ProfileService},
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new breeder account.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Username, email and password
///
/// # Returns
/// - `201 Created` - Account created
/// - `400 Bad Request` - Missing field, malformed email or short password
/// - `409 Conflict` - Username or email already registered
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created", body = AuthResponseDto),
        (status = 400, description = "Invalid registration data", body = ErrorDto),
        (status = 409, description = "Username or email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = RegisterUserParam::from_dto(payload)?;

    let user = AuthService::new(&state.db, &state.tokens, state.bcrypt_cost)
        .register(param)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponseDto {
            message: "Registration successful".to_string(),
            user: user.into_dto(),
        }),
    ))
}

/// Log in with a username or email and password.
///
/// Sets the `access_token` and `refresh_token` cookies on success.
///
/// # Returns
/// - `200 OK` - Logged in, cookies set
/// - `400 Bad Request` - Missing identity or password
/// - `401 Unauthorized` - Unknown identity or wrong password
/// - `500 Internal Server Error` - Database or signing error
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = AuthResponseDto),
        (status = 400, description = "Missing credentials", body = ErrorDto),
        (status = 401, description = "Invalid username/email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = LoginParam::from_dto(payload)?;

    let (user, tokens) = AuthService::new(&state.db, &state.tokens, state.bcrypt_cost)
        .login(param)
        .await?;

    let jar = AuthCookies::new(state.cookie_secure).set_tokens(jar, &tokens);

    Ok((
        StatusCode::OK,
        jar,
        Json(AuthResponseDto {
            message: "Login successful".to_string(),
            user: user.into_dto(),
        }),
    ))
}

/// Exchange the refresh token cookie for a new token pair.
///
/// # Returns
/// - `200 OK` - Both cookies reset
/// - `401 Unauthorized` - Refresh cookie missing, invalid or expired
#[utoipa::path(
    post,
    path = "/api/auth/refresh",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Tokens refreshed", body = MessageDto),
        (status = 401, description = "Refresh token missing or invalid", body = ErrorDto)
    ),
)]
pub async fn refresh(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AppError> {
    let Some(refresh_token) = AuthCookies::refresh_token(&jar) else {
        return Err(AuthError::MissingToken(REFRESH_TOKEN_COOKIE).into());
    };

    let tokens = state.tokens.refresh(&refresh_token)?;

    let jar = AuthCookies::new(state.cookie_secure).set_tokens(jar, &tokens);

    Ok((
        StatusCode::OK,
        jar,
        Json(MessageDto {
            message: "Token refreshed".to_string(),
        }),
    ))
}

/// Clear the auth cookies.
///
/// # Returns
/// - `200 OK` - Always
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged out", body = MessageDto)
    ),
)]
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let jar = AuthCookies::new(state.cookie_secure).clear(jar);

    (
        StatusCode::OK,
        jar,
        Json(MessageDto {
            message: "Logged out".to_string(),
        }),
    )
}

/// Get the authenticated user's profile.
///
/// # Access Control
/// - Requires a valid access token cookie
///
/// # Returns
/// - `200 OK` - Current user
/// - `401 Unauthorized` - Not authenticated
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn me(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &jar)
        .require()
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Update username, email and/or profile picture.
///
/// Accepts `multipart/form-data` with optional `username`, `email` and `profile_pic` parts.
/// Allowed once every 30 days.
///
/// # Access Control
/// - Requires a valid access token cookie
///
/// # Returns
/// - `200 OK` - Updated user
/// - `400 Bad Request` - Malformed email, unsupported image type or unreadable form
/// - `401 Unauthorized` - Not authenticated
/// - `409 Conflict` - Username or email taken by another user
/// - `429 Too Many Requests` - Profile updated less than 30 days ago
/// - `500 Internal Server Error` - Database or filesystem error
#[utoipa::path(
    put,
    path = "/api/auth/profile",
    tag = AUTH_TAG,
    request_body(content = UpdateProfileFormDto, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Profile updated", body = UserDto),
        (status = 400, description = "Invalid profile data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 409, description = "Username or email already taken", body = ErrorDto),
        (status = 429, description = "Profile updated too recently", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    jar: CookieJar,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &jar)
        .require()
        .await?;

    let mut param = UpdateProfileParam {
        user_id: user.id,
        ..Default::default()
    };

    while let Some(field) = multipart.next_field().await.map_err(bad_form)? {
        let name = field.name().map(str::to_string);

        match name.as_deref() {
            Some("username") => param.username = Some(field.text().await.map_err(bad_form)?),
            Some("email") => param.email = Some(field.text().await.map_err(bad_form)?),
            Some("profile_pic") => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await.map_err(bad_form)?;

                if !bytes.is_empty() {
                    param.avatar = Some(AvatarUpload {
                        file_name,
                        bytes: bytes.to_vec(),
                    });
                }
            }
            _ => {}
        }
    }

    let updated = ProfileService::new(&state.db, &state.upload_dir)
        .update_profile(param, Utc::now())
        .await?;

    Ok((StatusCode::OK, Json(updated.into_dto())))
}

fn bad_form(err: axum::extract::multipart::MultipartError) -> AppError {
    AppError::BadRequest(err.body_text())
}
