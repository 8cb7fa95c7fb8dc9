use chrono::Utc;

use crate::models::{AnalysisResult, RepoAnalysisRequest};
use crate::services::DocumentStore;
use crate::services::templates::{self, new_id};
use crate::utils::{ApiError, ApiResult};

pub const DOCUMENT_NOT_FOUND: &str = "Document not found";

#[derive(Clone)]
pub struct DocumentService {
    store: DocumentStore,
}

impl DocumentService {
    pub fn new(store: DocumentStore) -> Self {
        Self { store }
    }

    /// Generate, store and return a new analysis for `req`.
    ///
    /// The result is fully built before it reaches the store, so a failure never
    /// leaves a partial entry behind.
    pub fn analyze(&self, req: &RepoAnalysisRequest) -> ApiResult<AnalysisResult> {
        let result = AnalysisResult {
            id: new_id(),
            repo_name: req.repo_name.clone(),
            repo_url: req.repo_url.clone(),
            analyzed_at: Utc::now(),
            sections: templates::render_sections(req),
            diagrams: templates::diagram_labels(req),
        };

        self.store.insert(result.clone())?;

        tracing::debug!(
            "Stored analysis {} ({} sections, {} documents total)",
            result.id,
            result.sections.len(),
            self.store.len()
        );
        Ok(result)
    }

    pub fn list_all(&self) -> Vec<AnalysisResult> {
        self.store.list()
    }

    pub fn get_by_id(&self, id: &str) -> ApiResult<AnalysisResult> {
        self.store.get(id).ok_or_else(|| ApiError::not_found(DOCUMENT_NOT_FOUND))
    }
}
