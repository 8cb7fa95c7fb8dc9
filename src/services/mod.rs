pub mod document_service;
pub mod document_store;
pub mod export;
pub mod templates;

pub use document_service::{DOCUMENT_NOT_FOUND, DocumentService};
pub use document_store::DocumentStore;
pub use export::{markdown_filename, render_markdown};
