#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod model;
pub mod navigation;
pub mod progress;
pub mod scoring;
pub mod time;

pub use catalog::{CatalogError, CurriculumCatalog};
pub use error::Error;
pub use navigation::{
    BlockReason, NavigationController, NavigationError, NavigationState, Transition, View,
    ViewTicket,
};
pub use progress::{ProgressError, ProgressState, ProgressTracker, ProgressUpdate, XpPolicy};
pub use scoring::{QuizScore, ScoringError, score};
pub use time::Clock;
