use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use axum_extra::extract::cookie::CookieJar;
use chrono::Utc;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        pair::{CreatePairDto, PairDto, PairListDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::pair::{CreatePairParam, PairWithBirds},
        service::breeding::BreedingService,
        state::AppState,
    },
};

/// Tag for grouping pair endpoints in OpenAPI documentation
pub static PAIR_TAG: &str = "pair";

/// List the caller's active pairs.
///
/// # Access Control
/// - Requires a valid access token cookie
///
/// # Returns
/// - `200 OK` - ACTIVE pairs with sire and dam embedded
/// - `401 Unauthorized` - Not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/pairs",
    tag = PAIR_TAG,
    responses(
        (status = 200, description = "Active pairs of the caller", body = PairListDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pairs(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &jar)
        .require()
        .await?;

    let pairs = BreedingService::new(&state.db)
        .list_active_pairs(user.id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(PairListDto {
            data: pairs.into_iter().map(PairWithBirds::into_dto).collect(),
        }),
    ))
}

/// Pair two birds.
///
/// Both birds become PAIRED and the pair's first production starts on the pairing date,
/// which defaults to today.
///
/// # Access Control
/// - Requires a valid access token cookie; both birds must belong to the caller
///
/// # Returns
/// - `201 Created` - ACTIVE pair
/// - `400 Bad Request` - Malformed pairing date
/// - `401 Unauthorized` - Not authenticated
/// - `422 Unprocessable Entity` - A bird is not available, not the caller's, or sire equals dam
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/pairs",
    tag = PAIR_TAG,
    request_body = CreatePairDto,
    responses(
        (status = 201, description = "Pair created", body = PairDto),
        (status = 400, description = "Invalid pairing data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 422, description = "A bird is not available for pairing", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_pair(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<CreatePairDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &jar)
        .require()
        .await?;

    let param = CreatePairParam::from_dto(user.id, payload, Utc::now().date_naive())?;

    let pair = BreedingService::new(&state.db).create_pair(param).await?;

    Ok((StatusCode::CREATED, Json(pair.into_dto())))
}

/// Disband an active pair.
///
/// The pair moves to history, both birds become AVAILABLE again and the active production
/// is completed. Eggs are kept.
///
/// # Access Control
/// - Requires a valid access token cookie; the pair must belong to the caller
///
/// # Returns
/// - `200 OK` - Pair disbanded
/// - `401 Unauthorized` - Not authenticated
/// - `404 Not Found` - No ACTIVE pair with that ID owned by the caller
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/pairs/{id}/disband",
    tag = PAIR_TAG,
    params(
        ("id" = i32, Path, description = "Pair ID")
    ),
    responses(
        (status = 200, description = "Pair disbanded", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Active pair not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn disband_pair(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &jar)
        .require()
        .await?;

    BreedingService::new(&state.db)
        .disband_pair(user.id, id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Pair disbanded".to_string(),
        }),
    ))
}
