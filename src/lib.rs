//! Repodoc Library
//!
//! Generates templated design documentation for a repository and keeps the
//! results in memory for later retrieval.

use std::sync::Arc;

pub mod app;
pub mod config;
pub mod handlers;
pub mod models;
pub mod services;
pub mod utils;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use services::{DocumentService, DocumentStore};

/// Application shared state
///
/// The store is created once at startup and handed to the service here;
/// handlers reach it only through `document_service`.
#[derive(Clone)]
pub struct AppState {
    pub document_service: Arc<DocumentService>,
}

impl AppState {
    pub fn new(store: DocumentStore) -> Self {
        Self { document_service: Arc::new(DocumentService::new(store)) }
    }
}
