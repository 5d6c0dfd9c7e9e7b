use axum::{
    http::{
        header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    Router,
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    config::Config,
    controller::{
        auth::{self, AUTH_TAG},
        bird::{self, BIRD_TAG},
        dashboard::{self, DASHBOARD_TAG},
        finance::{self, FINANCE_TAG},
        health::{self, HEALTH_TAG},
        pair::{self, PAIR_TAG},
        production::{self, PRODUCTION_TAG},
    },
    error::{config::ConfigError, AppError},
    state::AppState,
    util::upload::UPLOAD_URL_PREFIX,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Aviary API", description = "Bird breeding records"),
    tags(
        (name = HEALTH_TAG, description = "Liveness"),
        (name = AUTH_TAG, description = "Registration, login and profile"),
        (name = BIRD_TAG, description = "Bird registry"),
        (name = PAIR_TAG, description = "Breeding pairs"),
        (name = PRODUCTION_TAG, description = "Breeding cycles and eggs"),
        (name = FINANCE_TAG, description = "Income and expense ledger"),
        (name = DASHBOARD_TAG, description = "Collection overview"),
    )
)]
struct ApiDoc;

/// Builds the API router with OpenAPI docs at `/api/docs`, uploaded files under `/uploads`,
/// CORS for the configured origins and request tracing.
///
/// # Returns
/// - `Ok(Router<AppState>)` - Router awaiting its state
/// - `Err(AppError::ConfigErr)` - A configured CORS origin is not a valid header value
pub fn router(config: &Config) -> Result<Router<AppState>, AppError> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(health::health))
        .routes(routes!(auth::register))
        .routes(routes!(auth::login))
        .routes(routes!(auth::refresh))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::me))
        .routes(routes!(auth::update_profile))
        .routes(routes!(bird::get_birds, bird::create_bird))
        .routes(routes!(bird::update_bird, bird::delete_bird))
        .routes(routes!(pair::get_pairs, pair::create_pair))
        .routes(routes!(pair::disband_pair))
        .routes(routes!(production::get_active_production))
        .routes(routes!(production::add_egg))
        .routes(routes!(production::update_egg_status))
        .routes(routes!(production::delete_egg))
        .routes(routes!(finance::get_transactions, finance::create_transaction))
        .routes(routes!(finance::get_summary))
        .routes(routes!(finance::delete_transaction))
        .routes(routes!(dashboard::get_stats))
        .split_for_parts();

    let router = router
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .nest_service(UPLOAD_URL_PREFIX, ServeDir::new(&config.upload_dir))
        .layer(cors_layer(&config.cors_allowed_origins)?)
        .layer(TraceLayer::new_for_http());

    Ok(router)
}

fn cors_layer(origins: &[String]) -> Result<CorsLayer, ConfigError> {
    let origins = origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .map_err(|_| ConfigError::InvalidEnvVar {
                    name: "CORS_ALLOWED_ORIGINS".to_string(),
                    value: origin.clone(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([ACCEPT, AUTHORIZATION, CONTENT_TYPE])
        .allow_credentials(true))
}
