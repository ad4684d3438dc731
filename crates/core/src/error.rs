use thiserror::Error;

use crate::catalog::CatalogError;
use crate::model::{
    ArtifactError, LessonError, LibraryError, ModuleError, ModuleIdError, QuizError,
};
use crate::navigation::NavigationError;
use crate::progress::ProgressError;
use crate::scoring::ScoringError;

/// Any error raised by the academy core.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    ModuleId(#[from] ModuleIdError),
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error(transparent)]
    Lesson(#[from] LessonError),
    #[error(transparent)]
    Module(#[from] ModuleError),
    #[error(transparent)]
    Library(#[from] LibraryError),
    #[error(transparent)]
    Artifact(#[from] ArtifactError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Scoring(#[from] ScoringError),
    #[error(transparent)]
    Progress(#[from] ProgressError),
    #[error(transparent)]
    Navigation(#[from] NavigationError),
}
