//! Serialized shapes of the content documents.
//!
//! Records mirror the domain types field for field so the JSON stays readable;
//! `into_*` conversions run every domain validation.

use academy_core::model::{
    CaseStudy, DiagramKind, GlossaryItem, Library, LibraryError, LessonDraft, Module,
    ModuleDraft, ModuleId, PromptTemplate, Quiz, QuizError, QuizQuestion, Tool,
};
use serde::{Deserialize, Serialize};

use crate::error::ContentError;

/// Bullet prefix the authored instructions carry; the UI draws its own marker.
const INSTRUCTION_MARKER: char = '➡';

//
// ─── CURRICULUM ────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CurriculumDocument {
    pub modules: Vec<ModuleRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ModuleRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub lessons: Vec<LessonRecord>,
    pub quiz: Vec<QuestionRecord>,
    #[serde(default)]
    pub checklist: Vec<String>,
    #[serde(default)]
    pub intro_video: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LessonRecord {
    pub title: String,
    pub concept_title: String,
    pub concept_analogy: String,
    pub concept_description: String,
    pub instructions: Vec<String>,
    pub visual_guide: String,
    pub image_prompt: String,
    #[serde(default)]
    pub video: Option<String>,
    #[serde(default)]
    pub diagram: Option<DiagramRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiagramRecord {
    IntentFlow,
    ApiWaiter,
}

impl From<DiagramRecord> for DiagramKind {
    fn from(value: DiagramRecord) -> Self {
        match value {
            DiagramRecord::IntentFlow => DiagramKind::IntentFlow,
            DiagramRecord::ApiWaiter => DiagramKind::ApiWaiter,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct QuestionRecord {
    pub question: String,
    pub options: Vec<String>,
    pub correct_index: usize,
}

impl QuestionRecord {
    fn into_question(self) -> Result<QuizQuestion, QuizError> {
        QuizQuestion::new(self.question, self.options, self.correct_index)
    }
}

fn strip_marker(line: String) -> String {
    match line.trim_start().strip_prefix(INSTRUCTION_MARKER) {
        Some(rest) => rest.trim_start().to_owned(),
        None => line,
    }
}

impl LessonRecord {
    fn into_draft(self) -> LessonDraft {
        LessonDraft {
            title: self.title,
            concept_title: self.concept_title,
            concept_analogy: self.concept_analogy,
            concept_description: self.concept_description,
            instructions: self.instructions.into_iter().map(strip_marker).collect(),
            visual_guide: self.visual_guide,
            image_prompt: self.image_prompt,
            video: self.video,
            diagram: self.diagram.map(DiagramKind::from),
        }
    }
}

impl ModuleRecord {
    /// Convert the record into a validated `Module`.
    ///
    /// `position` is only used to label errors for records whose id is unusable.
    ///
    /// # Errors
    ///
    /// Returns `ContentError` naming the module when any field fails validation.
    pub fn into_module(self, position: usize) -> Result<Module, ContentError> {
        let id = ModuleId::new(&self.id)
            .map_err(|source| ContentError::ModuleId { position, source })?;

        let questions = self
            .quiz
            .into_iter()
            .enumerate()
            .map(|(n, record)| {
                record.into_question().map_err(|err| QuizError::Question {
                    position: n,
                    source: Box::new(err),
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .and_then(Quiz::new)
            .map_err(|source| ContentError::Quiz {
                module: self.id.clone(),
                source,
            })?;

        ModuleDraft {
            id,
            title: self.title,
            description: self.description,
            lessons: self.lessons.into_iter().map(LessonRecord::into_draft).collect(),
            quiz: questions,
            checklist: self.checklist,
            intro_video: self.intro_video,
        }
        .validate()
        .map_err(|source| ContentError::Module {
            module: self.id,
            source,
        })
    }
}

//
// ─── LIBRARY ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LibraryDocument {
    #[serde(default)]
    pub prompts: Vec<PromptRecord>,
    #[serde(default)]
    pub toolkit: Vec<ToolRecord>,
    #[serde(default)]
    pub glossary: Vec<GlossaryRecord>,
    #[serde(default)]
    pub case_studies: Vec<CaseStudyRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PromptRecord {
    pub title: String,
    pub category: String,
    pub scenario: String,
    pub template: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolRecord {
    pub name: String,
    pub category: String,
    pub description: String,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GlossaryRecord {
    pub term: String,
    pub definition: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CaseStudyRecord {
    pub title: String,
    pub description: String,
    pub vibe: String,
    pub outcome: String,
    pub image: String,
}

impl PromptRecord {
    fn into_prompt(self) -> Result<PromptTemplate, LibraryError> {
        PromptTemplate::new(
            self.title,
            self.scenario,
            self.template,
            self.category.parse()?,
        )
    }
}

impl ToolRecord {
    fn into_tool(self) -> Result<Tool, LibraryError> {
        Tool::new(
            self.name,
            self.category.parse()?,
            self.description,
            self.link.as_deref(),
        )
    }
}

fn convert_all<R, T>(
    section: &'static str,
    records: Vec<R>,
    convert: impl Fn(R) -> Result<T, LibraryError>,
) -> Result<Vec<T>, ContentError> {
    records
        .into_iter()
        .enumerate()
        .map(|(position, record)| {
            convert(record).map_err(|source| ContentError::Library {
                section,
                position,
                source,
            })
        })
        .collect()
}

impl LibraryDocument {
    /// # Errors
    ///
    /// Returns `ContentError::Library` naming the section and entry that failed.
    pub fn into_library(self) -> Result<Library, ContentError> {
        Ok(Library {
            prompts: convert_all("prompts", self.prompts, PromptRecord::into_prompt)?,
            toolkit: convert_all("toolkit", self.toolkit, ToolRecord::into_tool)?,
            glossary: convert_all("glossary", self.glossary, |r| {
                GlossaryItem::new(r.term, r.definition)
            })?,
            case_studies: convert_all("case studies", self.case_studies, |r| {
                CaseStudy::new(r.title, r.description, r.vibe, r.outcome, &r.image)
            })?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instruction_marker_is_stripped() {
        assert_eq!(strip_marker("➡ Define the schema".into()), "Define the schema");
        assert_eq!(strip_marker("  ➡Plain".into()), "Plain");
        assert_eq!(strip_marker("No marker".into()), "No marker");
    }

    #[test]
    fn diagram_names_are_kebab_case() {
        let parsed: DiagramRecord = serde_json::from_str("\"api-waiter\"").unwrap();
        assert_eq!(DiagramKind::from(parsed), DiagramKind::ApiWaiter);
    }

    #[test]
    fn bad_question_reports_its_position() {
        let record = ModuleRecord {
            id: "intro".into(),
            title: "Intro".into(),
            description: "d".into(),
            lessons: Vec::new(),
            quiz: vec![
                QuestionRecord {
                    question: "ok".into(),
                    options: vec!["a".into(), "b".into()],
                    correct_index: 0,
                },
                QuestionRecord {
                    question: "bad".into(),
                    options: vec!["a".into(), "b".into()],
                    correct_index: 5,
                },
            ],
            checklist: Vec::new(),
            intro_video: None,
        };
        let err = record.into_module(0).unwrap_err();
        match err {
            ContentError::Quiz { module, source } => {
                assert_eq!(module, "intro");
                assert!(matches!(source, QuizError::Question { position: 1, .. }));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unknown_tool_category_is_rejected() {
        let document = LibraryDocument {
            prompts: Vec::new(),
            toolkit: vec![ToolRecord {
                name: "Thing".into(),
                category: "Spaceships".into(),
                description: "d".into(),
                link: None,
            }],
            glossary: Vec::new(),
            case_studies: Vec::new(),
        };
        assert!(matches!(
            document.into_library().unwrap_err(),
            ContentError::Library {
                section: "toolkit",
                position: 0,
                source: LibraryError::UnknownToolCategory(_)
            }
        ));
    }
}
