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
        pair::{ActiveProductionDto, AddEggDto, EggDto, UpdateEggStatusDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::production::ProductionWithEggs,
        service::breeding::BreedingService,
        state::AppState,
        util::parse::{parse_date, require_text},
    },
};

/// Tag for grouping production and egg endpoints in OpenAPI documentation
pub static PRODUCTION_TAG: &str = "production";

/// Get a pair's active production with its eggs.
///
/// Answers `{"data": null}` when the pair has no active production.
///
/// # Access Control
/// - Requires a valid access token cookie; the pair must belong to the caller
///
/// # Returns
/// - `200 OK` - Active production or null
/// - `401 Unauthorized` - Not authenticated
/// - `404 Not Found` - Pair not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/pairs/{pair_id}/production",
    tag = PRODUCTION_TAG,
    params(
        ("pair_id" = i32, Path, description = "Pair ID")
    ),
    responses(
        (status = 200, description = "Active production of the pair", body = ActiveProductionDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Pair not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_active_production(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(pair_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &jar)
        .require()
        .await?;

    let production = BreedingService::new(&state.db)
        .get_active_production(user.id, pair_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ActiveProductionDto {
            data: production.map(ProductionWithEggs::into_dto),
        }),
    ))
}

/// Record a laid egg.
///
/// Opens a new production if the pair has none active.
///
/// # Access Control
/// - Requires a valid access token cookie; the pair must belong to the caller
///
/// # Returns
/// - `201 Created` - PENDING egg
/// - `400 Bad Request` - Missing or malformed laid date
/// - `401 Unauthorized` - Not authenticated
/// - `404 Not Found` - Pair not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/pairs/{pair_id}/eggs",
    tag = PRODUCTION_TAG,
    params(
        ("pair_id" = i32, Path, description = "Pair ID")
    ),
    request_body = AddEggDto,
    responses(
        (status = 201, description = "Egg recorded", body = EggDto),
        (status = 400, description = "Invalid laid date", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Pair not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_egg(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(pair_id): Path<i32>,
    Json(payload): Json<AddEggDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &jar)
        .require()
        .await?;

    let laid_date = parse_date(&require_text(payload.laid_date, "laid_date")?, "laid_date")?;

    let egg = BreedingService::new(&state.db)
        .add_egg(user.id, pair_id, laid_date, Utc::now().date_naive())
        .await?;

    Ok((StatusCode::CREATED, Json(egg.into_dto())))
}

/// Set an egg's status.
///
/// `HATCHED` records the hatch time.
///
/// # Access Control
/// - Requires a valid access token cookie; the egg's pair must belong to the caller
///
/// # Returns
/// - `200 OK` - Updated egg
/// - `401 Unauthorized` - Not authenticated
/// - `404 Not Found` - Egg not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/eggs/{egg_id}/status",
    tag = PRODUCTION_TAG,
    params(
        ("egg_id" = i32, Path, description = "Egg ID")
    ),
    request_body = UpdateEggStatusDto,
    responses(
        (status = 200, description = "Egg updated", body = EggDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Egg not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_egg_status(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(egg_id): Path<i32>,
    Json(payload): Json<UpdateEggStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &jar)
        .require()
        .await?;

    let egg = BreedingService::new(&state.db)
        .update_egg_status(user.id, egg_id, payload.status)
        .await?;

    Ok((StatusCode::OK, Json(egg.into_dto())))
}

/// Permanently delete an egg.
///
/// # Access Control
/// - Requires a valid access token cookie; the egg's pair must belong to the caller
///
/// # Returns
/// - `200 OK` - Egg deleted
/// - `401 Unauthorized` - Not authenticated
/// - `404 Not Found` - Egg not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/eggs/{egg_id}",
    tag = PRODUCTION_TAG,
    params(
        ("egg_id" = i32, Path, description = "Egg ID")
    ),
    responses(
        (status = 200, description = "Egg deleted", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Egg not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_egg(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(egg_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &jar)
        .require()
        .await?;

    BreedingService::new(&state.db)
        .delete_egg(user.id, egg_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Egg deleted".to_string(),
        }),
    ))
}
