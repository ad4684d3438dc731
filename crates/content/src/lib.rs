#![forbid(unsafe_code)]

//! Curriculum and library content: embedded JSON records validated into core types.

pub mod error;
pub mod loader;
pub mod records;

pub use error::ContentError;
pub use loader::{
    ContentBundle, ContentSources, EMBEDDED_CURRICULUM, EMBEDDED_LIBRARY, load, load_embedded,
    parse_curriculum, parse_library,
};
