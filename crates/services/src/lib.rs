#![forbid(unsafe_code)]

pub mod academy_session;
pub mod app_services;
pub mod clipboard;
pub mod error;
pub mod quiz_attempt;
pub mod tools;

pub use academy_core::Clock;

pub use academy_session::{AcademySession, QuizOutcome};
pub use app_services::{AppServices, SessionSettings};
pub use clipboard::{ClipboardSink, MemoryClipboard, SystemClipboard};
pub use error::{AcademyError, ClipboardError, QuizAttemptError, ToolError};
pub use quiz_attempt::{OptionFeedback, QuizAttempt};
pub use tools::{DisabledBackend, GenerativeBackend, OpenAiBackend, OpenAiConfig, ToolService};
