use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of `POST /analyze`
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RepoAnalysisRequest {
    pub repo_url: String,
    pub repo_name: String,
    // Accepted for API compatibility; content generation does not read it.
    pub file_extension: String,
    pub include_diagrams: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SectionType {
    Text,
    Code,
    Diagram,
}

/// One titled unit of generated content.
///
/// `language` is set only for code sections and `diagram_type` only for diagram
/// sections; use the constructors to keep that pairing intact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSection {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(rename = "type")]
    pub r#type: SectionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagram_type: Option<String>,
}

impl DocumentSection {
    pub fn text(id: String, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            r#type: SectionType::Text,
            language: None,
            diagram_type: None,
        }
    }

    pub fn code(
        id: String,
        title: impl Into<String>,
        content: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            r#type: SectionType::Code,
            language: Some(language.into()),
            diagram_type: None,
        }
    }

    pub fn diagram(
        id: String,
        title: impl Into<String>,
        content: impl Into<String>,
        diagram_type: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            r#type: SectionType::Diagram,
            language: None,
            diagram_type: Some(diagram_type.into()),
        }
    }
}

/// Complete output of one analysis, immutable once stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub id: String,
    pub repo_name: String,
    pub repo_url: String,
    pub analyzed_at: DateTime<Utc>,
    pub sections: Vec<DocumentSection>,
    pub diagrams: Vec<String>,
}
