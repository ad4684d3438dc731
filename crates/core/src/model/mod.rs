mod artifacts;
mod ids;
mod lesson;
mod library;
mod media;
mod module;
mod quiz;
mod text;

pub use artifacts::{ArtifactError, Certificate, GeneratedImage, PromptAudit, VibeManifesto};
pub use ids::{ModuleId, ModuleIdError};
pub use lesson::{DiagramKind, Lesson, LessonDraft, LessonError};
pub use library::{
    CaseStudy, GlossaryItem, Library, LibraryError, PromptCategory, PromptTemplate, Tool,
    ToolCategory,
};
pub use media::{MediaLink, MediaValidationError};
pub use module::{Module, ModuleDraft, ModuleError};
pub use quiz::{AnswerSet, Quiz, QuizError, QuizQuestion};
pub use text::{TextError, require_text};
