use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::Arc;

use crate::models::AnalysisResult;
use crate::utils::{ApiError, ApiResult};

/// In-memory store of analysis results keyed by analysis id
///
/// Design: Uses DashMap so concurrent inserts and lookups never block each other
/// on a single global lock. Cloning the store clones the handle, not the data.
///
/// Entries live as long as the store; there is no eviction and no delete.
#[derive(Clone, Default)]
pub struct DocumentStore {
    documents: Arc<DashMap<String, AnalysisResult>>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self { documents: Arc::new(DashMap::new()) }
    }

    /// Insert a new result.
    ///
    /// Fails instead of overwriting when the id is already taken.
    pub fn insert(&self, result: AnalysisResult) -> ApiResult<()> {
        match self.documents.entry(result.id.clone()) {
            Entry::Occupied(entry) => Err(ApiError::internal_error(format!(
                "Analysis failed: duplicate analysis id {}",
                entry.key()
            ))),
            Entry::Vacant(entry) => {
                entry.insert(result);
                Ok(())
            },
        }
    }

    pub fn get(&self, id: &str) -> Option<AnalysisResult> {
        self.documents.get(id).map(|doc| doc.value().clone())
    }

    /// Snapshot of every stored result, oldest first
    pub fn list(&self) -> Vec<AnalysisResult> {
        let mut docs: Vec<AnalysisResult> =
            self.documents.iter().map(|doc| doc.value().clone()).collect();
        docs.sort_by(|a, b| a.analyzed_at.cmp(&b.analyzed_at).then_with(|| a.id.cmp(&b.id)));
        docs
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
