use thiserror::Error;

use crate::model::media::{MediaLink, MediaValidationError};
use crate::model::text::{TextError, require_text, require_texts};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LessonError {
    #[error(transparent)]
    Text(#[from] TextError),

    #[error(transparent)]
    Media(#[from] MediaValidationError),

    #[error("a lesson needs at least one instruction")]
    NoInstructions,
}

/// Illustration rendered under a lesson's concept block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagramKind {
    /// Intent -> AI agent -> software.
    IntentFlow,
    /// Customer -> waiter (API) -> kitchen.
    ApiWaiter,
}

/// Raw lesson fields as they come from a content source.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LessonDraft {
    pub title: String,
    pub concept_title: String,
    pub concept_analogy: String,
    pub concept_description: String,
    pub instructions: Vec<String>,
    pub visual_guide: String,
    pub image_prompt: String,
    pub video: Option<String>,
    pub diagram: Option<DiagramKind>,
}

impl LessonDraft {
    /// # Errors
    ///
    /// Returns `LessonError` if a text field is blank, there are no instructions,
    /// or the video link is not an http(s) URL.
    pub fn validate(self) -> Result<Lesson, LessonError> {
        let instructions = require_texts("instruction", self.instructions)?;
        if instructions.is_empty() {
            return Err(LessonError::NoInstructions);
        }
        let video = self.video.map(MediaLink::parse).transpose()?;

        Ok(Lesson {
            title: require_text("lesson title", self.title)?,
            concept_title: require_text("concept title", self.concept_title)?,
            concept_analogy: require_text("concept analogy", self.concept_analogy)?,
            concept_description: require_text("concept description", self.concept_description)?,
            instructions,
            visual_guide: require_text("visual guide", self.visual_guide)?,
            image_prompt: require_text("image prompt", self.image_prompt)?,
            video,
            diagram: self.diagram,
        })
    }
}

/// A content unit within a module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lesson {
    title: String,
    concept_title: String,
    concept_analogy: String,
    concept_description: String,
    instructions: Vec<String>,
    visual_guide: String,
    image_prompt: String,
    video: Option<MediaLink>,
    diagram: Option<DiagramKind>,
}

impl Lesson {
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn concept_title(&self) -> &str {
        &self.concept_title
    }

    #[must_use]
    pub fn concept_analogy(&self) -> &str {
        &self.concept_analogy
    }

    #[must_use]
    pub fn concept_description(&self) -> &str {
        &self.concept_description
    }

    #[must_use]
    pub fn instructions(&self) -> &[String] {
        &self.instructions
    }

    /// Describes the picture the learner should form while doing the lesson.
    #[must_use]
    pub fn visual_guide(&self) -> &str {
        &self.visual_guide
    }

    /// Prompt handed to the image manifestor for this lesson's illustration.
    #[must_use]
    pub fn image_prompt(&self) -> &str {
        &self.image_prompt
    }

    #[must_use]
    pub fn video(&self) -> Option<&MediaLink> {
        self.video.as_ref()
    }

    #[must_use]
    pub fn diagram(&self) -> Option<DiagramKind> {
        self.diagram
    }
}
