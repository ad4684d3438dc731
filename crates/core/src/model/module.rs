use thiserror::Error;

use crate::model::ids::ModuleId;
use crate::model::lesson::{Lesson, LessonDraft, LessonError};
use crate::model::media::{MediaLink, MediaValidationError};
use crate::model::quiz::Quiz;
use crate::model::text::{TextError, require_text, require_texts};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ModuleError {
    #[error(transparent)]
    Text(#[from] TextError),

    #[error(transparent)]
    Media(#[from] MediaValidationError),

    #[error("module needs at least one lesson")]
    NoLessons,

    #[error("lesson {position} is invalid: {source}")]
    Lesson {
        position: usize,
        #[source]
        source: LessonError,
    },
}

//
// ─── MODULE ────────────────────────────────────────────────────────────────────
//

/// Raw module fields; lessons are validated together with the module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleDraft {
    pub id: ModuleId,
    pub title: String,
    pub description: String,
    pub lessons: Vec<LessonDraft>,
    pub quiz: Quiz,
    pub checklist: Vec<String>,
    pub intro_video: Option<String>,
}

impl ModuleDraft {
    /// # Errors
    ///
    /// Returns `ModuleError` if the title or description is blank, the module has
    /// no lessons, a lesson fails validation, or the intro video is not a valid link.
    pub fn validate(self) -> Result<Module, ModuleError> {
        if self.lessons.is_empty() {
            return Err(ModuleError::NoLessons);
        }
        let lessons = self
            .lessons
            .into_iter()
            .enumerate()
            .map(|(position, draft)| {
                draft
                    .validate()
                    .map_err(|source| ModuleError::Lesson { position, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Module {
            id: self.id,
            title: require_text("module title", self.title)?,
            description: require_text("module description", self.description)?,
            lessons,
            quiz: self.quiz,
            checklist: require_texts("checklist item", self.checklist)?,
            intro_video: self.intro_video.map(MediaLink::parse).transpose()?,
        })
    }
}

/// Top-level curriculum unit. Immutable after load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    id: ModuleId,
    title: String,
    description: String,
    lessons: Vec<Lesson>,
    quiz: Quiz,
    checklist: Vec<String>,
    intro_video: Option<MediaLink>,
}

impl Module {
    #[must_use]
    pub fn id(&self) -> &ModuleId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Title up to the first `:` ("Module 2: The Pilot's Seat" -> "Module 2").
    #[must_use]
    pub fn short_title(&self) -> &str {
        self.title
            .split_once(':')
            .map_or(self.title.as_str(), |(head, _)| head.trim_end())
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    #[must_use]
    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    #[must_use]
    pub fn checklist(&self) -> &[String] {
        &self.checklist
    }

    #[must_use]
    pub fn intro_video(&self) -> Option<&MediaLink> {
        self.intro_video.as_ref()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::quiz::QuizQuestion;

    fn lesson() -> LessonDraft {
        LessonDraft {
            title: "Lesson".into(),
            concept_title: "Concept".into(),
            concept_analogy: "Analogy".into(),
            concept_description: "Description".into(),
            instructions: vec!["Do it".into()],
            visual_guide: "Picture it".into(),
            image_prompt: "An image".into(),
            video: None,
            diagram: None,
        }
    }

    fn draft(title: &str) -> ModuleDraft {
        let question =
            QuizQuestion::new("Q", vec!["a".into(), "b".into()], 1).unwrap();
        ModuleDraft {
            id: ModuleId::new("intro").unwrap(),
            title: title.into(),
            description: "Start here".into(),
            lessons: vec![lesson()],
            quiz: Quiz::new(vec![question]).unwrap(),
            checklist: Vec::new(),
            intro_video: None,
        }
    }

    #[test]
    fn short_title_cuts_at_colon() {
        let module = draft("Module 2: The Pilot's Seat").validate().unwrap();
        assert_eq!(module.short_title(), "Module 2");
    }

    #[test]
    fn short_title_without_colon_is_full_title() {
        let module = draft("Glue").validate().unwrap();
        assert_eq!(module.short_title(), "Glue");
    }

    #[test]
    fn module_without_lessons_fails() {
        let mut d = draft("Intro");
        d.lessons.clear();
        assert_eq!(d.validate().unwrap_err(), ModuleError::NoLessons);
    }

    #[test]
    fn lesson_errors_carry_position() {
        let mut d = draft("Intro");
        let mut bad = lesson();
        bad.title = String::new();
        d.lessons.push(bad);
        let err = d.validate().unwrap_err();
        assert!(matches!(err, ModuleError::Lesson { position: 1, .. }));
    }
}
