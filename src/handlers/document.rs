use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderValue, header},
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use crate::AppState;
use crate::models::AnalysisResult;
use crate::services::export::MARKDOWN_CONTENT_TYPE;
use crate::services::{markdown_filename, render_markdown};
use crate::utils::{ApiError, ApiResult, ErrorResponse};

// List every stored analysis
#[utoipa::path(
    get,
    path = "/documents",
    responses(
        (status = 200, description = "All stored analyses", body = Vec<AnalysisResult>)
    ),
    tag = "Documents"
)]
pub async fn list_documents(State(state): State<Arc<AppState>>) -> Json<Vec<AnalysisResult>> {
    let docs = state.document_service.list_all();
    tracing::debug!("Listing {} documents", docs.len());
    Json(docs)
}

// Get a stored analysis by ID
#[utoipa::path(
    get,
    path = "/documents/{id}",
    params(
        ("id" = String, Path, description = "Analysis ID")
    ),
    responses(
        (status = 200, description = "Stored analysis", body = AnalysisResult),
        (status = 404, description = "Document not found", body = ErrorResponse)
    ),
    tag = "Documents"
)]
pub async fn get_document(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<AnalysisResult>> {
    let doc = state.document_service.get_by_id(&id).inspect_err(|_| {
        tracing::warn!("Document {} not found", id);
    })?;
    Ok(Json(doc))
}

// Download a stored analysis as Markdown
#[utoipa::path(
    get,
    path = "/documents/{id}/export/markdown",
    params(
        ("id" = String, Path, description = "Analysis ID")
    ),
    responses(
        (status = 200, description = "Markdown document", body = String, content_type = "text/markdown"),
        (status = 404, description = "Document not found", body = ErrorResponse)
    ),
    tag = "Documents"
)]
pub async fn export_markdown(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Response> {
    let doc = state.document_service.get_by_id(&id)?;

    let disposition = format!("attachment; filename=\"{}\"", markdown_filename(&doc));
    let disposition = HeaderValue::from_str(&disposition)
        .map_err(|e| ApiError::internal_error(format!("Export failed: {}", e)))?;

    tracing::debug!("Exporting document {} as markdown", id);
    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static(MARKDOWN_CONTENT_TYPE)),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        render_markdown(&doc),
    )
        .into_response())
}
