use std::sync::Arc;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use academy_core::model::{GeneratedImage, PromptAudit, VibeManifesto};

use crate::error::ToolError;
use crate::tools::backend::GenerativeBackend;

const VIBE_INSTRUCTIONS: &str = "You are a brand designer for software products. \
Given a project brief, answer with a JSON object with keys \
\"palette\" (3 to 5 hex colors like #1A2B3C), \
\"fonts\" (2 Google Font family names) and \
\"description\" (two sentences describing the mood).";

const AUDIT_INSTRUCTIONS: &str = "You review prompts written for AI coding assistants. \
Judge clarity of intent, context given, constraints and expected output. \
Answer with a JSON object with keys \
\"score\" (integer 0 to 100), \
\"feedback\" (markdown with concrete suggestions) and \
\"level\" (one of Novice, Apprentice, Architect, Visionary).";

const IMAGE_STYLE: &str = "Clean, modern editorial illustration for an online course. ";

#[derive(Debug, Deserialize)]
struct VibePayload {
    palette: Vec<String>,
    fonts: Vec<String>,
    description: String,
}

#[derive(Debug, Deserialize)]
struct AuditPayload {
    score: i64,
    feedback: String,
    level: String,
}

/// Front door to the generative tools. Validates input and output; the backend
/// only moves bytes.
#[derive(Clone)]
pub struct ToolService {
    backend: Arc<dyn GenerativeBackend>,
}

impl ToolService {
    #[must_use]
    pub fn new(backend: Arc<dyn GenerativeBackend>) -> Self {
        Self { backend }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.backend.enabled()
    }

    /// Draw an illustration for `prompt`.
    ///
    /// # Errors
    ///
    /// Returns `ToolError::EmptyInput` for a blank prompt, or any backend failure.
    pub async fn manifest_image(&self, prompt: &str) -> Result<GeneratedImage, ToolError> {
        let prompt = require_input("image prompt", prompt)?;
        let image = self
            .backend
            .generate_image(&format!("{IMAGE_STYLE}{prompt}"))
            .await
            .inspect_err(|err| warn!(error = %err, "image generation failed"))?;
        info!(bytes = image.bytes().len(), "image manifested");
        Ok(image)
    }

    /// Turn a project brief into a palette, fonts and mood.
    ///
    /// # Errors
    ///
    /// Returns `ToolError::EmptyInput` for a blank brief, `ToolError::MalformedPayload`
    /// when the reply is not the expected JSON, `ToolError::Artifact` when it holds
    /// invalid colors or blank text, or any backend failure.
    pub async fn generate_vibe(&self, brief: &str) -> Result<VibeManifesto, ToolError> {
        let brief = require_input("project brief", brief)?;
        let payload: VibePayload = self.ask(VIBE_INSTRUCTIONS, brief).await?;
        let manifesto = VibeManifesto::new(payload.palette, payload.fonts, payload.description)
            .inspect_err(|err| warn!(error = %err, "vibe rejected"))?;
        info!(colors = manifesto.palette().len(), "vibe generated");
        Ok(manifesto)
    }

    /// Score a prompt and explain how to improve it.
    ///
    /// # Errors
    ///
    /// Returns `ToolError::EmptyInput` for a blank prompt, `ToolError::MalformedPayload`
    /// when the reply is not the expected JSON, `ToolError::Artifact` for an
    /// out-of-range score, or any backend failure.
    pub async fn audit_prompt(&self, prompt: &str) -> Result<PromptAudit, ToolError> {
        let prompt = require_input("prompt", prompt)?;
        let payload: AuditPayload = self.ask(AUDIT_INSTRUCTIONS, prompt).await?;
        let audit = PromptAudit::new(payload.score, payload.feedback, payload.level)
            .inspect_err(|err| warn!(error = %err, "audit rejected"))?;
        info!(score = audit.score(), level = audit.level(), "prompt audited");
        Ok(audit)
    }

    async fn ask<T: DeserializeOwned>(&self, instructions: &str, input: &str) -> Result<T, ToolError> {
        let raw = self
            .backend
            .complete_json(instructions, input)
            .await
            .inspect_err(|err| warn!(error = %err, "completion failed"))?;
        serde_json::from_str(strip_fence(&raw)).map_err(|err| {
            warn!(error = %err, "completion was not the expected JSON");
            ToolError::MalformedPayload(err.to_string())
        })
    }
}

fn require_input<'a>(field: &'static str, value: &'a str) -> Result<&'a str, ToolError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ToolError::EmptyInput(field));
    }
    Ok(trimmed)
}

/// Some models wrap JSON mode output in a markdown code fence anyway.
fn strip_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(body) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let body = body.strip_prefix("json").unwrap_or(body);
    body.strip_suffix("```").unwrap_or(body).trim()
}
