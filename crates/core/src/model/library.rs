use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::model::media::{MediaLink, MediaValidationError};
use crate::model::text::{TextError, require_text};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LibraryError {
    #[error(transparent)]
    Text(#[from] TextError),

    #[error(transparent)]
    Media(#[from] MediaValidationError),

    #[error("unknown prompt category: {0}")]
    UnknownPromptCategory(String),

    #[error("unknown tool category: {0}")]
    UnknownToolCategory(String),
}

//
// ─── PROMPT TEMPLATES ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromptCategory {
    Design,
    Logic,
    Debugging,
}

impl PromptCategory {
    pub const ALL: [Self; 3] = [Self::Design, Self::Logic, Self::Debugging];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Design => "Design",
            Self::Logic => "Logic",
            Self::Debugging => "Debugging",
        }
    }
}

impl fmt::Display for PromptCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PromptCategory {
    type Err = LibraryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| LibraryError::UnknownPromptCategory(s.to_string()))
    }
}

/// Reusable prompt with `[PLACEHOLDER]` slots the learner fills in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    title: String,
    scenario: String,
    template: String,
    category: PromptCategory,
}

impl PromptTemplate {
    /// # Errors
    ///
    /// Returns `LibraryError::Text` if any text field is blank.
    pub fn new(
        title: impl Into<String>,
        scenario: impl Into<String>,
        template: impl Into<String>,
        category: PromptCategory,
    ) -> Result<Self, LibraryError> {
        Ok(Self {
            title: require_text("prompt title", title)?,
            scenario: require_text("prompt scenario", scenario)?,
            template: require_text("prompt template", template)?,
            category,
        })
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn scenario(&self) -> &str {
        &self.scenario
    }

    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    #[must_use]
    pub fn category(&self) -> PromptCategory {
        self.category
    }

    /// Placeholder names in order of first appearance (`[APP_TYPE]` -> `APP_TYPE`).
    #[must_use]
    pub fn placeholders(&self) -> Vec<&str> {
        let mut found: Vec<&str> = Vec::new();
        let mut rest = self.template.as_str();
        while let Some(start) = rest.find('[') {
            let after = &rest[start + 1..];
            let Some(end) = after.find(']') else {
                break;
            };
            let name = &after[..end];
            let is_slot = !name.is_empty()
                && name
                    .chars()
                    .all(|ch| ch.is_ascii_uppercase() || ch.is_ascii_digit() || ch == '_');
            if is_slot && !found.contains(&name) {
                found.push(name);
            }
            rest = &after[end + 1..];
        }
        found
    }
}

//
// ─── GLOSSARY ──────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlossaryItem {
    term: String,
    definition: String,
}

impl GlossaryItem {
    /// # Errors
    ///
    /// Returns `LibraryError::Text` if the term or definition is blank.
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Result<Self, LibraryError> {
        Ok(Self {
            term: require_text("glossary term", term)?,
            definition: require_text("glossary definition", definition)?,
        })
    }

    #[must_use]
    pub fn term(&self) -> &str {
        &self.term
    }

    #[must_use]
    pub fn definition(&self) -> &str {
        &self.definition
    }
}

//
// ─── CASE STUDIES ──────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseStudy {
    title: String,
    description: String,
    vibe: String,
    outcome: String,
    image: MediaLink,
}

impl CaseStudy {
    /// # Errors
    ///
    /// Returns `LibraryError` if a text field is blank or the image is not an http(s) link.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        vibe: impl Into<String>,
        outcome: impl Into<String>,
        image: &str,
    ) -> Result<Self, LibraryError> {
        Ok(Self {
            title: require_text("case study title", title)?,
            description: require_text("case study description", description)?,
            vibe: require_text("case study vibe", vibe)?,
            outcome: require_text("case study outcome", outcome)?,
            image: MediaLink::parse(image)?,
        })
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn vibe(&self) -> &str {
        &self.vibe
    }

    #[must_use]
    pub fn outcome(&self) -> &str {
        &self.outcome
    }

    #[must_use]
    pub fn image(&self) -> &MediaLink {
        &self.image
    }
}

//
// ─── TOOLKIT ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolCategory {
    Ides,
    Frontend,
    Backend,
    Automation,
    Models,
    Research,
    Deployment,
    Design,
    AiServices,
    Testing,
    Assets,
    Communication,
    Workspace,
    Orchestration,
    Planning,
}

impl ToolCategory {
    pub const ALL: [Self; 15] = [
        Self::Ides,
        Self::Frontend,
        Self::Backend,
        Self::Automation,
        Self::Models,
        Self::Research,
        Self::Deployment,
        Self::Design,
        Self::AiServices,
        Self::Testing,
        Self::Assets,
        Self::Communication,
        Self::Workspace,
        Self::Orchestration,
        Self::Planning,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Ides => "IDEs",
            Self::Frontend => "Frontend",
            Self::Backend => "Backend",
            Self::Automation => "Automation",
            Self::Models => "Models",
            Self::Research => "Research",
            Self::Deployment => "Deployment",
            Self::Design => "Design",
            Self::AiServices => "AI Services",
            Self::Testing => "Testing",
            Self::Assets => "Assets",
            Self::Communication => "Communication",
            Self::Workspace => "Workspace",
            Self::Orchestration => "Orchestration",
            Self::Planning => "Planning",
        }
    }
}

impl FromStr for ToolCategory {
    type Err = LibraryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| LibraryError::UnknownToolCategory(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tool {
    name: String,
    category: ToolCategory,
    description: String,
    link: Option<MediaLink>,
}

impl Tool {
    /// # Errors
    ///
    /// Returns `LibraryError` if the name or description is blank or the link is invalid.
    pub fn new(
        name: impl Into<String>,
        category: ToolCategory,
        description: impl Into<String>,
        link: Option<&str>,
    ) -> Result<Self, LibraryError> {
        Ok(Self {
            name: require_text("tool name", name)?,
            category,
            description: require_text("tool description", description)?,
            link: link.map(MediaLink::parse).transpose()?,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn category(&self) -> ToolCategory {
        self.category
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn link(&self) -> Option<&MediaLink> {
        self.link.as_ref()
    }
}

//
// ─── LIBRARY ───────────────────────────────────────────────────────────────────
//

/// Reference material shown outside the curriculum: prompts, toolkit, glossary, cases.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Library {
    pub prompts: Vec<PromptTemplate>,
    pub toolkit: Vec<Tool>,
    pub glossary: Vec<GlossaryItem>,
    pub case_studies: Vec<CaseStudy>,
}

impl Library {
    #[must_use]
    pub fn prompts_in(&self, category: PromptCategory) -> Vec<&PromptTemplate> {
        self.prompts
            .iter()
            .filter(|prompt| prompt.category() == category)
            .collect()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
