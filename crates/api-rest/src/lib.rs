//! # API REST
//!
//! REST API implementation for the country outline service.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialisation, CORS, error status mapping)
//!
//! Uses `api-shared` for wire types and `outline-core` for the pipeline itself.

#![warn(rust_2018_idioms)]

use api_shared::{ErrorRes, HealthRes, HealthService, OutlineQuery, OutlineRes};
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::{Method, StatusCode},
    response::Json,
    routing::get,
    Router,
};
use outline_core::{OutlineError, OutlineService};
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Application state for the REST API server
///
/// Holds the outline service. Cloned into every handler; carries no per-request state.
#[derive(Clone)]
pub struct AppState {
    outline_service: OutlineService,
}

impl AppState {
    pub fn new(outline_service: OutlineService) -> Self {
        Self { outline_service }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(health, outline),
    components(schemas(HealthRes, OutlineRes, ErrorRes))
)]
pub struct ApiDoc;

/// Builds the REST router with CORS and the Swagger UI mounted.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/outline", get(outline))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors_layer())
        .with_state(state)
}

/// Public, read-only API: any origin, `GET` only, any request header.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers(Any)
}

/// Maps a pipeline failure onto its HTTP status and JSON error body.
pub fn error_response(err: &OutlineError) -> (StatusCode, Json<ErrorRes>) {
    let status = match err {
        OutlineError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        OutlineError::NotFound(_) => StatusCode::NOT_FOUND,
        OutlineError::Fetch(_)
        | OutlineError::ContentNotFound
        | OutlineError::InvalidSelector { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (
        status,
        Json(ErrorRes {
            detail: err.to_string(),
        }),
    )
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Used for monitoring and load balancer health checks. Does not contact the upstream source.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/api/outline",
    params(OutlineQuery),
    responses(
        (status = 200, description = "Markdown outline of the country's article", body = OutlineRes),
        (status = 400, description = "Missing or empty country", body = ErrorRes),
        (status = 404, description = "No article for this country", body = ErrorRes),
        (status = 500, description = "Fetch failed or article body missing", body = ErrorRes)
    )
)]
/// Markdown outline of a country's encyclopedia article
///
/// Fetches the article for `country`, extracts the headings of its main content and returns them
/// as a nested markdown outline.
///
/// # Errors
/// - `400 Bad Request` if `country` is missing or empty.
/// - `404 Not Found` if the article does not exist.
/// - `500 Internal Server Error` if the fetch fails or the article body cannot be located.
#[axum::debug_handler]
async fn outline(
    State(state): State<AppState>,
    query: Result<Query<OutlineQuery>, QueryRejection>,
) -> Result<Json<OutlineRes>, (StatusCode, Json<ErrorRes>)> {
    let Query(query) = query.map_err(|rejection| {
        tracing::warn!("Outline query rejected: {}", rejection.body_text());
        (
            rejection.status(),
            Json(ErrorRes {
                detail: rejection.body_text(),
            }),
        )
    })?;

    match state.outline_service.outline(&query.country).await {
        Ok(outline) => Ok(Json(OutlineRes {
            country: outline.topic,
            markdown_outline: outline.markdown,
        })),
        Err(e) => {
            tracing::warn!(country = %query.country, "Outline error: {}", e);
            Err(error_response(&e))
        }
    }
}
