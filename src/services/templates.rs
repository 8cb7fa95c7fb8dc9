//! Section templates
//!
//! Every analysis is built from the same named templates. A template pairs a fixed
//! title and section kind with a body function that receives the request, so the
//! only caller data that reaches the output is what a body chooses to interpolate.

use uuid::Uuid;

use crate::models::{DocumentSection, RepoAnalysisRequest};

pub const OVERVIEW_TITLE: &str = "Project Overview";
pub const ARCHITECTURE_TITLE: &str = "Architecture Analysis";
pub const CODE_EXAMPLE_TITLE: &str = "Code Structure Example";
pub const DESIGN_PATTERNS_TITLE: &str = "Design Patterns";
pub const DIAGRAM_TITLE: &str = "System Architecture Diagram";

pub const CODE_EXAMPLE_LANGUAGE: &str = "python";
pub const DIAGRAM_TYPE: &str = "mermaid";
/// Label recorded in `AnalysisResult::diagrams` when the diagram section is present
pub const ARCHITECTURE_FLOW_LABEL: &str = "architecture-flow";

const ARCHITECTURE_BODY: &str = r#"The project follows a modular architecture with clear separation of concerns. Key components include:

• Controller Layer: Handles HTTP requests and responses
• Service Layer: Contains business logic and data processing
• Data Access Layer: Manages database interactions
• Model Layer: Defines data structures and entities

The architecture promotes maintainability, testability, and scalability through proper abstraction and dependency injection."#;

const CODE_EXAMPLE_BODY: &str = r#"class UserController:
    def __init__(self, user_service: UserService):
        self.user_service = user_service
    
    async def create_user(self, user_data: dict) -> dict:
        try:
            user = await self.user_service.create_user(user_data)
            return {"status": "success", "user": user}
        except ValidationError as e:
            return {"status": "error", "message": str(e)}
        except Exception as e:
            logger.error(f"Unexpected error: {e}")
            return {"status": "error", "message": "Internal server error"}"#;

const DIAGRAM_BODY: &str = r#"graph TD
    A[Client Request] --> B[Controller]
    B --> C[Service Layer]
    C --> D[Data Access Layer]
    D --> E[Database]
    C --> F[Business Logic]
    F --> G[Validation]
    G --> H[Response Processing]
    H --> I[Client Response]"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Text,
    Code { language: &'static str },
    Diagram { diagram_type: &'static str },
}

pub type BodyFn = fn(&RepoAnalysisRequest) -> String;

#[derive(Clone, Copy)]
pub struct SectionTemplate {
    pub title: &'static str,
    pub kind: SectionKind,
    body: BodyFn,
}

impl SectionTemplate {
    pub const fn new(title: &'static str, kind: SectionKind, body: BodyFn) -> Self {
        Self { title, kind, body }
    }

    /// Render this template into a section with a freshly generated id
    pub fn render(&self, req: &RepoAnalysisRequest) -> DocumentSection {
        let id = new_id();
        let content = (self.body)(req);
        match self.kind {
            SectionKind::Text => DocumentSection::text(id, self.title, content),
            SectionKind::Code { language } => {
                DocumentSection::code(id, self.title, content, language)
            },
            SectionKind::Diagram { diagram_type } => {
                DocumentSection::diagram(id, self.title, content, diagram_type)
            },
        }
    }
}

/// The four sections present in every analysis, in output order
pub static BASE_TEMPLATES: [SectionTemplate; 4] = [
    SectionTemplate::new(OVERVIEW_TITLE, SectionKind::Text, overview_body),
    SectionTemplate::new(ARCHITECTURE_TITLE, SectionKind::Text, architecture_body),
    SectionTemplate::new(
        CODE_EXAMPLE_TITLE,
        SectionKind::Code { language: CODE_EXAMPLE_LANGUAGE },
        code_example_body,
    ),
    SectionTemplate::new(DESIGN_PATTERNS_TITLE, SectionKind::Text, design_patterns_body),
];

/// Appended last when the caller asks for diagrams
pub static DIAGRAM_TEMPLATE: SectionTemplate = SectionTemplate::new(
    DIAGRAM_TITLE,
    SectionKind::Diagram { diagram_type: DIAGRAM_TYPE },
    diagram_body,
);

/// Render the full, ordered section list for a request
pub fn render_sections(req: &RepoAnalysisRequest) -> Vec<DocumentSection> {
    let mut sections: Vec<DocumentSection> = BASE_TEMPLATES.iter().map(|t| t.render(req)).collect();
    if req.include_diagrams {
        sections.push(DIAGRAM_TEMPLATE.render(req));
    }
    sections
}

/// Diagram labels matching what `render_sections` produced
pub fn diagram_labels(req: &RepoAnalysisRequest) -> Vec<String> {
    if req.include_diagrams { vec![ARCHITECTURE_FLOW_LABEL.to_string()] } else { Vec::new() }
}

/// 128-bit random identifier in hyphenated UUID form
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

fn overview_body(req: &RepoAnalysisRequest) -> String {
    format!(
        "This document provides a comprehensive design analysis of the {} repository. The analysis covers architecture patterns, code structure, and design principles used throughout the project.",
        req.repo_name
    )
}

fn architecture_body(_req: &RepoAnalysisRequest) -> String {
    ARCHITECTURE_BODY.to_string()
}

fn code_example_body(_req: &RepoAnalysisRequest) -> String {
    CODE_EXAMPLE_BODY.to_string()
}

fn design_patterns_body(req: &RepoAnalysisRequest) -> String {
    format!(
        r#"The {} project implements several design patterns:

**Repository Pattern**: Abstracts data access logic and provides a more object-oriented view of the data layer.

**Dependency Injection**: Promotes loose coupling between components by injecting dependencies rather than creating them internally.

**Factory Pattern**: Used for creating objects without specifying the exact class to create.

**Observer Pattern**: Implements event-driven architecture for handling notifications and updates.

These patterns contribute to a clean, maintainable, and extensible codebase."#,
        req.repo_name
    )
}

fn diagram_body(_req: &RepoAnalysisRequest) -> String {
    DIAGRAM_BODY.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SectionType;

    fn request(name: &str, include_diagrams: bool) -> RepoAnalysisRequest {
        RepoAnalysisRequest {
            repo_url: "https://example.com/org/repo".to_string(),
            repo_name: name.to_string(),
            file_extension: ".rs".to_string(),
            include_diagrams,
        }
    }

    #[test]
    fn test_base_templates_order() {
        let titles: Vec<&str> = BASE_TEMPLATES.iter().map(|t| t.title).collect();
        assert_eq!(
            titles,
            vec![OVERVIEW_TITLE, ARCHITECTURE_TITLE, CODE_EXAMPLE_TITLE, DESIGN_PATTERNS_TITLE]
        );
    }

    #[test]
    fn test_repo_name_interpolated_verbatim() {
        let name = "  <b>weird & name</b> ";
        let sections = render_sections(&request(name, false));

        assert!(sections[0].content.contains(&format!("analysis of the {} repository", name)));
        assert!(sections[3].content.starts_with(&format!("The {} project", name)));
        assert!(!sections[1].content.contains(name));
        assert!(!sections[2].content.contains(name));
    }

    #[test]
    fn test_file_extension_does_not_affect_content() {
        let mut a = request("demo", true);
        let mut b = a.clone();
        a.file_extension = ".py".to_string();
        b.file_extension = ".go".to_string();

        let contents_a: Vec<String> = render_sections(&a).into_iter().map(|s| s.content).collect();
        let contents_b: Vec<String> = render_sections(&b).into_iter().map(|s| s.content).collect();
        assert_eq!(contents_a, contents_b);
    }

    #[test]
    fn test_kind_fields_follow_section_type() {
        for section in render_sections(&request("demo", true)) {
            assert_eq!(section.language.is_some(), section.r#type == SectionType::Code);
            assert_eq!(section.diagram_type.is_some(), section.r#type == SectionType::Diagram);
        }
    }

    #[test]
    fn test_diagram_template() {
        let section = DIAGRAM_TEMPLATE.render(&request("demo", true));
        assert_eq!(section.title, DIAGRAM_TITLE);
        assert_eq!(section.diagram_type.as_deref(), Some("mermaid"));
        assert!(section.content.starts_with("graph TD"));
    }

    #[test]
    fn test_diagram_labels() {
        assert!(diagram_labels(&request("demo", false)).is_empty());
        assert_eq!(diagram_labels(&request("demo", true)), vec!["architecture-flow"]);
    }

    #[test]
    fn test_code_example_listing_exact() {
        let expected = concat!(
            "class UserController:\n",
            "    def __init__(self, user_service: UserService):\n",
            "        self.user_service = user_service\n",
            "    \n",
            "    async def create_user(self, user_data: dict) -> dict:\n",
            "        try:\n",
            "            user = await self.user_service.create_user(user_data)\n",
            "            return {\"status\": \"success\", \"user\": user}\n",
            "        except ValidationError as e:\n",
            "            return {\"status\": \"error\", \"message\": str(e)}\n",
            "        except Exception as e:\n",
            "            logger.error(f\"Unexpected error: {e}\")\n",
            "            return {\"status\": \"error\", \"message\": \"Internal server error\"}",
        );

        let sections = render_sections(&request("demo", false));
        assert_eq!(sections[2].title, CODE_EXAMPLE_TITLE);
        assert_eq!(sections[2].language.as_deref(), Some(CODE_EXAMPLE_LANGUAGE));
        assert_eq!(sections[2].content, expected);
    }

    #[test]
    fn test_section_ids_are_unique() {
        let sections = render_sections(&request("demo", true));
        let mut ids: Vec<&str> = sections.iter().map(|s| s.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 5);
        assert!(Uuid::parse_str(ids[0]).is_ok());
    }
}
