// Common test utilities and helpers

use crate::AppState;
use crate::app::build_router;
use crate::config::CorsConfig;
use crate::models::RepoAnalysisRequest;
use crate::services::{DocumentService, DocumentStore};
use axum::{Router, body::Body, response::Response};
use std::sync::Arc;

pub fn sample_request(repo_name: &str, include_diagrams: bool) -> RepoAnalysisRequest {
    RepoAnalysisRequest {
        repo_url: "https://x/y".to_string(),
        repo_name: repo_name.to_string(),
        file_extension: ".py".to_string(),
        include_diagrams,
    }
}

pub fn create_test_service() -> DocumentService {
    DocumentService::new(DocumentStore::new())
}

/// Router wired exactly as in production, with the default CORS allow-list
pub fn create_test_router() -> Router {
    let state = Arc::new(AppState::new(DocumentStore::new()));
    let cors = crate::app::cors_layer(&CorsConfig::default()).expect("Default CORS config is valid");
    build_router(state, cors)
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body")
        .to_vec()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).expect("Response body is not JSON")
}

pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> axum::http::Request<Body> {
    axum::http::Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get_request(uri: &str) -> axum::http::Request<Body> {
    axum::http::Request::builder().uri(uri).body(Body::empty()).unwrap()
}
