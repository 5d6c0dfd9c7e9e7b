use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use axum_extra::extract::cookie::CookieJar;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        bird::{BirdDto, BirdListDto, CreateBirdDto, UpdateBirdDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::bird::{BirdWithParents, CreateBirdParam, UpdateBirdParam},
        service::bird::BirdService,
        state::AppState,
    },
};

/// Tag for grouping bird endpoints in OpenAPI documentation
pub static BIRD_TAG: &str = "bird";

/// List the caller's birds.
///
/// Soft-deleted birds are excluded. Sire and dam are embedded when present, even if the
/// parent itself has been deleted.
///
/// # Access Control
/// - Requires a valid access token cookie
///
/// # Returns
/// - `200 OK` - Birds ordered by ID
/// - `401 Unauthorized` - Not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/birds",
    tag = BIRD_TAG,
    responses(
        (status = 200, description = "Birds of the caller", body = BirdListDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_birds(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &jar)
        .require()
        .await?;

    let birds = BirdService::new(&state.db).list(user.id).await?;

    Ok((
        StatusCode::OK,
        Json(BirdListDto {
            data: birds.into_iter().map(BirdWithParents::into_dto).collect(),
        }),
    ))
}

/// Register a bird.
///
/// New birds are always AVAILABLE.
///
/// # Access Control
/// - Requires a valid access token cookie
///
/// # Returns
/// - `201 Created` - Created bird
/// - `400 Bad Request` - Missing ring number or species, malformed dob, or invalid parent
/// - `401 Unauthorized` - Not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/birds",
    tag = BIRD_TAG,
    request_body = CreateBirdDto,
    responses(
        (status = 201, description = "Bird created", body = BirdDto),
        (status = 400, description = "Invalid bird data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_bird(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<CreateBirdDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &jar)
        .require()
        .await?;

    let param = CreateBirdParam::from_dto(user.id, payload)?;

    let bird = BirdService::new(&state.db).create(param).await?;

    Ok((StatusCode::CREATED, Json(bird.into_dto())))
}

/// Replace a bird's fields.
///
/// Omitted text fields are cleared, omitted parents and dob become null, an omitted gender
/// becomes `UNKNOWN`. `status` is required.
///
/// # Access Control
/// - Requires a valid access token cookie; the bird must belong to the caller
///
/// # Returns
/// - `200 OK` - Updated bird
/// - `400 Bad Request` - Malformed dob or invalid parent
/// - `401 Unauthorized` - Not authenticated
/// - `404 Not Found` - No such live bird owned by the caller
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/birds/{id}",
    tag = BIRD_TAG,
    params(
        ("id" = i32, Path, description = "Bird ID")
    ),
    request_body = UpdateBirdDto,
    responses(
        (status = 200, description = "Bird updated", body = BirdDto),
        (status = 400, description = "Invalid bird data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Bird not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_bird(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateBirdDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &jar)
        .require()
        .await?;

    let param = UpdateBirdParam::from_dto(id, user.id, payload)?;

    let bird = BirdService::new(&state.db).update(param).await?;

    Ok((StatusCode::OK, Json(bird.into_dto())))
}

/// Soft-delete a bird.
///
/// # Access Control
/// - Requires a valid access token cookie; the bird must belong to the caller
///
/// # Returns
/// - `200 OK` - Bird deleted
/// - `401 Unauthorized` - Not authenticated
/// - `404 Not Found` - No such live bird owned by the caller
/// - `422 Unprocessable Entity` - Bird is in an active pair
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/birds/{id}",
    tag = BIRD_TAG,
    params(
        ("id" = i32, Path, description = "Bird ID")
    ),
    responses(
        (status = 200, description = "Bird deleted", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Bird not found", body = ErrorDto),
        (status = 422, description = "Bird is paired", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_bird(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &jar)
        .require()
        .await?;

    BirdService::new(&state.db).delete(user.id, id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Bird deleted".to_string(),
        }),
    ))
}
