use std::path::PathBuf;

use academy_core::CatalogError;
use academy_core::model::{LibraryError, ModuleError, ModuleIdError, QuizError};
use thiserror::Error;

/// Errors surfaced while reading or validating content.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ContentError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed {document}: {source}")]
    Parse {
        document: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("module #{position} has an invalid id: {source}")]
    ModuleId {
        position: usize,
        #[source]
        source: ModuleIdError,
    },

    #[error("module `{module}` quiz: {source}")]
    Quiz {
        module: String,
        #[source]
        source: QuizError,
    },

    #[error("module `{module}`: {source}")]
    Module {
        module: String,
        #[source]
        source: ModuleError,
    },

    #[error("{section} entry #{position}: {source}")]
    Library {
        section: &'static str,
        position: usize,
        #[source]
        source: LibraryError,
    },

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
