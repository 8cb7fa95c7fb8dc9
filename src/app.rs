//! HTTP application assembly: routes, CORS and the OpenAPI document.

use axum::{
    Json, Router,
    http::HeaderValue,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::config::CorsConfig;
use crate::{AppState, handlers, models, utils};

#[derive(OpenApi)]
#[openapi(
    info(title = "Design Documentation API", version = "1.0.0"),
    paths(
        handlers::analysis::analyze_repository,
        handlers::document::list_documents,
        handlers::document::get_document,
        handlers::document::export_markdown,
        handlers::health::health_check,
    ),
    components(
        schemas(
            models::RepoAnalysisRequest,
            models::AnalysisResult,
            models::DocumentSection,
            models::SectionType,
            models::HealthResponse,
            utils::ErrorResponse,
        )
    ),
    tags(
        (name = "Documents", description = "Repository analysis and generated documentation"),
        (name = "System", description = "Service health"),
    )
)]
pub struct ApiDoc;

/// Build the CORS layer for the configured origin allow-list.
///
/// Credentials are allowed, so methods and headers are mirrored from the
/// preflight request instead of using a wildcard.
pub fn cors_layer(config: &CorsConfig) -> Result<CorsLayer, anyhow::Error> {
    let origins = config
        .allowed_origins
        .iter()
        .map(|o| HeaderValue::from_str(o))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}

pub fn build_router(state: Arc<AppState>, cors: CorsLayer) -> Router {
    Router::new()
        .route("/analyze", post(handlers::analysis::analyze_repository))
        .route("/documents", get(handlers::document::list_documents))
        .route("/documents/:id", get(handlers::document::get_document))
        .route("/documents/:id/export/markdown", get(handlers::document::export_markdown))
        .route("/health", get(handlers::health::health_check))
        .route("/api-docs/openapi.json", get(openapi_json))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
