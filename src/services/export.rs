//! Markdown export of stored analyses

use std::fmt::Write;

use crate::models::{AnalysisResult, SectionType};
use crate::utils::sanitize_filename;

pub const MARKDOWN_CONTENT_TYPE: &str = "text/markdown; charset=utf-8";

/// Render a result as a standalone Markdown document.
///
/// Code sections are fenced with their language; text and diagram bodies are
/// emitted as-is.
pub fn render_markdown(doc: &AnalysisResult) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = write!(out, "# {}\n\n", doc.repo_name);
    let _ = writeln!(out, "**Repository:** {}", doc.repo_url);
    let _ = write!(out, "**Analyzed:** {}\n\n", doc.analyzed_at.format("%Y-%m-%d"));

    for section in &doc.sections {
        let _ = write!(out, "## {}\n\n", section.title);
        match section.r#type {
            SectionType::Code => {
                let lang = section.language.as_deref().unwrap_or("");
                let _ = write!(out, "```{}\n{}\n```\n\n", lang, section.content);
            },
            SectionType::Text | SectionType::Diagram => {
                let _ = write!(out, "{}\n\n", section.content);
            },
        }
    }

    out
}

/// Attachment filename offered for the Markdown download
pub fn markdown_filename(doc: &AnalysisResult) -> String {
    format!("{}-documentation.md", sanitize_filename(&doc.repo_name))
}
