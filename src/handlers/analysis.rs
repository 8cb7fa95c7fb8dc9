use axum::{Json, extract::State, extract::rejection::JsonRejection};
use std::sync::Arc;

use crate::AppState;
use crate::models::{AnalysisResult, RepoAnalysisRequest};
use crate::utils::{ApiResult, ErrorResponse};

// Analyze a repository and store the generated documentation
#[utoipa::path(
    post,
    path = "/analyze",
    request_body = RepoAnalysisRequest,
    responses(
        (status = 200, description = "Generated documentation", body = AnalysisResult),
        (status = 422, description = "Malformed request body", body = ErrorResponse),
        (status = 500, description = "Analysis failed", body = ErrorResponse)
    ),
    tag = "Documents"
)]
pub async fn analyze_repository(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<RepoAnalysisRequest>, JsonRejection>,
) -> ApiResult<Json<AnalysisResult>> {
    let Json(req) = payload.map_err(|e| {
        tracing::warn!("Rejected analysis request: {}", e.body_text());
        e
    })?;

    tracing::info!(
        "Analyzing repository {} ({}, diagrams: {})",
        req.repo_name,
        req.repo_url,
        req.include_diagrams
    );

    let result = state.document_service.analyze(&req)?;
    tracing::info!("Analysis created: {} for {}", result.id, result.repo_name);

    Ok(Json(result))
}
