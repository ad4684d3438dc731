use std::fs;
use std::path::{Path, PathBuf};

use academy_core::CurriculumCatalog;
use academy_core::model::Library;
use tracing::{debug, info};

use crate::error::ContentError;
use crate::records::{CurriculumDocument, LibraryDocument};

pub const EMBEDDED_CURRICULUM: &str = include_str!("../data/curriculum.json");
pub const EMBEDDED_LIBRARY: &str = include_str!("../data/library.json");

/// Everything the academy reads at startup.
#[derive(Debug, Clone)]
pub struct ContentBundle {
    pub catalog: CurriculumCatalog,
    pub library: Library,
}

/// Optional on-disk replacements for the embedded documents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentSources {
    pub curriculum: Option<PathBuf>,
    pub library: Option<PathBuf>,
}

impl ContentSources {
    #[must_use]
    pub fn embedded() -> Self {
        Self::default()
    }
}

/// Parses and validates a curriculum document.
///
/// # Errors
///
/// Returns `ContentError::Parse` for malformed JSON and a validation variant for
/// content that does not form a valid catalog.
pub fn parse_curriculum(json: &str) -> Result<CurriculumCatalog, ContentError> {
    let document: CurriculumDocument =
        serde_json::from_str(json).map_err(|source| ContentError::Parse {
            document: "curriculum",
            source,
        })?;
    let modules = document
        .modules
        .into_iter()
        .enumerate()
        .map(|(position, record)| record.into_module(position))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(CurriculumCatalog::new(modules)?)
}

/// Parses and validates a library document.
///
/// # Errors
///
/// Returns `ContentError::Parse` for malformed JSON and `ContentError::Library`
/// for an invalid entry.
pub fn parse_library(json: &str) -> Result<Library, ContentError> {
    let document: LibraryDocument =
        serde_json::from_str(json).map_err(|source| ContentError::Parse {
            document: "library",
            source,
        })?;
    document.into_library()
}

/// Loads the content compiled into the binary.
///
/// # Errors
///
/// Returns `ContentError` if the embedded documents fail validation.
pub fn load_embedded() -> Result<ContentBundle, ContentError> {
    load(&ContentSources::embedded())
}

/// Loads content, reading each document from disk when a path is given.
///
/// # Errors
///
/// Returns `ContentError::Read` when a file cannot be read, or any parse or
/// validation error from the documents.
pub fn load(sources: &ContentSources) -> Result<ContentBundle, ContentError> {
    let curriculum = read_or_embedded(sources.curriculum.as_deref(), EMBEDDED_CURRICULUM)?;
    let library = read_or_embedded(sources.library.as_deref(), EMBEDDED_LIBRARY)?;

    let catalog = parse_curriculum(&curriculum)?;
    let library = parse_library(&library)?;

    info!(
        modules = catalog.total_count(),
        prompts = library.prompts.len(),
        tools = library.toolkit.len(),
        glossary = library.glossary.len(),
        case_studies = library.case_studies.len(),
        "content loaded"
    );

    Ok(ContentBundle { catalog, library })
}

fn read_or_embedded(path: Option<&Path>, embedded: &str) -> Result<String, ContentError> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "reading content file");
            fs::read_to_string(path).map_err(|source| ContentError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
        None => Ok(embedded.to_owned()),
    }
}
