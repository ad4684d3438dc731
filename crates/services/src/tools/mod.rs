//! Generative creative tools: the sandbox image manifestor, vibe generator and prompt auditor.

mod backend;
mod openai;
mod service;

pub use backend::{DisabledBackend, GenerativeBackend};
pub use openai::{OpenAiBackend, OpenAiConfig};
pub use service::ToolService;
