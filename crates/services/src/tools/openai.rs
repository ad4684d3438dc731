use std::env;

use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose::STANDARD};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use academy_core::model::GeneratedImage;

use crate::error::ToolError;
use crate::tools::backend::GenerativeBackend;

#[derive(Clone, Debug)]
pub struct OpenAiConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    pub image_model: String,
}

impl OpenAiConfig {
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let api_key = env::var("ACADEMY_AI_API_KEY").ok()?;
        if api_key.trim().is_empty() {
            return None;
        }
        let base_url =
            env::var("ACADEMY_AI_BASE_URL").unwrap_or_else(|_| "https://api.openai.com/v1".into());
        let model = env::var("ACADEMY_AI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".into());
        let image_model =
            env::var("ACADEMY_AI_IMAGE_MODEL").unwrap_or_else(|_| "gpt-image-1".into());
        Some(Self {
            base_url,
            api_key,
            model,
            image_model,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url.trim_end_matches('/'))
    }
}

/// OpenAI-compatible HTTP backend.
#[derive(Clone)]
pub struct OpenAiBackend {
    client: Client,
    config: Option<OpenAiConfig>,
}

impl OpenAiBackend {
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(OpenAiConfig::from_env())
    }

    #[must_use]
    pub fn new(config: Option<OpenAiConfig>) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn config(&self) -> Result<&OpenAiConfig, ToolError> {
        self.config.as_ref().ok_or(ToolError::Disabled)
    }
}

#[async_trait]
impl GenerativeBackend for OpenAiBackend {
    fn enabled(&self) -> bool {
        self.config.is_some()
    }

    async fn complete_json(&self, instructions: &str, input: &str) -> Result<String, ToolError> {
        let config = self.config()?;
        let payload = ChatRequest {
            model: config.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: instructions.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: input.to_string(),
                },
            ],
            temperature: 0.4,
            response_format: ResponseFormat {
                kind: "json_object",
            },
        };

        debug!(model = %config.model, "requesting chat completion");
        let response = self
            .client
            .post(config.endpoint("chat/completions"))
            .bearer_auth(&config.api_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ToolError::HttpStatus(response.status()));
        }

        let body: ChatResponse = response.json().await?;
        body.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or(ToolError::EmptyResponse)
    }

    async fn generate_image(&self, prompt: &str) -> Result<GeneratedImage, ToolError> {
        let config = self.config()?;
        let payload = ImageRequest {
            model: config.image_model.clone(),
            prompt: prompt.to_string(),
            n: 1,
            size: "1024x1024",
            response_format: "b64_json",
        };

        debug!(model = %config.image_model, "requesting image");
        let response = self
            .client
            .post(config.endpoint("images/generations"))
            .bearer_auth(&config.api_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ToolError::HttpStatus(response.status()));
        }

        let body: ImageResponse = response.json().await?;
        let encoded = body
            .data
            .into_iter()
            .next()
            .and_then(|image| image.b64_json)
            .ok_or(ToolError::EmptyResponse)?;
        let bytes = STANDARD
            .decode(encoded.trim())
            .map_err(|err| ToolError::MalformedPayload(format!("invalid base64 image: {err}")))?;
        Ok(GeneratedImage::new("image/png", bytes)?)
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Debug, Deserialize)]
struct ChatMessageResponse {
    content: Option<String>,
}

#[derive(Debug, Serialize)]
struct ImageRequest {
    model: String,
    prompt: String,
    n: u8,
    size: &'static str,
    response_format: &'static str,
}

#[derive(Debug, Deserialize)]
struct ImageResponse {
    data: Vec<ImageData>,
}

#[derive(Debug, Deserialize)]
struct ImageData {
    b64_json: Option<String>,
}
