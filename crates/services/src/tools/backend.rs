use async_trait::async_trait;

use academy_core::model::GeneratedImage;

use crate::error::ToolError;

/// A model endpoint able to answer JSON-mode chat requests and draw images.
#[async_trait]
pub trait GenerativeBackend: Send + Sync {
    fn enabled(&self) -> bool;

    /// Returns the raw JSON object text the model produced.
    async fn complete_json(&self, instructions: &str, input: &str) -> Result<String, ToolError>;

    async fn generate_image(&self, prompt: &str) -> Result<GeneratedImage, ToolError>;
}

/// Backend used when no API key is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledBackend;

#[async_trait]
impl GenerativeBackend for DisabledBackend {
    fn enabled(&self) -> bool {
        false
    }

    async fn complete_json(&self, _instructions: &str, _input: &str) -> Result<String, ToolError> {
        Err(ToolError::Disabled)
    }

    async fn generate_image(&self, _prompt: &str) -> Result<GeneratedImage, ToolError> {
        Err(ToolError::Disabled)
    }
}
