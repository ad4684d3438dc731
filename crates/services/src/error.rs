//! Shared error types for the services crate.

use thiserror::Error;

use academy_core::model::ArtifactError;
use academy_core::{NavigationError, ProgressError, ScoringError};

/// Errors emitted by `QuizAttempt`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizAttemptError {
    #[error("option {option} of question {question} does not exist")]
    InvalidAnswer { question: usize, option: usize },
    #[error("quiz was already submitted")]
    AlreadySubmitted,
    #[error("only {answered} of {total} questions are answered")]
    Incomplete { answered: usize, total: usize },
    #[error(transparent)]
    Scoring(#[from] ScoringError),
}

/// Errors emitted by `AcademySession`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AcademyError {
    #[error(transparent)]
    Quiz(#[from] QuizAttemptError),
    #[error(transparent)]
    Progress(#[from] ProgressError),
    #[error(transparent)]
    Navigation(#[from] NavigationError),
}

/// Errors emitted by `ToolService` and its backends.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ToolError {
    #[error("generative tools are not configured")]
    Disabled,
    #[error("{0} cannot be empty")]
    EmptyInput(&'static str),
    #[error("generative service returned an empty response")]
    EmptyResponse,
    #[error("generative service returned an unreadable payload: {0}")]
    MalformedPayload(String),
    #[error("generative request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Artifact(#[from] ArtifactError),
}

/// Errors emitted by `ClipboardSink` implementations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ClipboardError {
    #[error("clipboard is unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard rejected the text: {0}")]
    Rejected(String),
}
