use std::sync::{Arc, Mutex};

use academy_core::View;
use academy_core::model::{ArtifactError, GeneratedImage};
use academy_core::time::fixed_clock;
use async_trait::async_trait;
use services::{
    AppServices, ClipboardSink, GenerativeBackend, MemoryClipboard, SessionSettings, ToolError,
    ToolService,
};

/// Replays a canned reply and records what it was asked.
struct ScriptedBackend {
    reply: String,
    calls: Mutex<Vec<String>>,
}

impl ScriptedBackend {
    fn replying(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: reply.to_string(),
            calls: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerativeBackend for ScriptedBackend {
    fn enabled(&self) -> bool {
        true
    }

    async fn complete_json(&self, _instructions: &str, input: &str) -> Result<String, ToolError> {
        self.calls.lock().unwrap().push(input.to_string());
        Ok(self.reply.clone())
    }

    async fn generate_image(&self, prompt: &str) -> Result<GeneratedImage, ToolError> {
        self.calls.lock().unwrap().push(prompt.to_string());
        Ok(GeneratedImage::new("image/png", vec![0x89, b'P', b'N', b'G'])?)
    }
}

#[tokio::test]
async fn vibe_reply_is_validated_and_normalized() {
    let backend = ScriptedBackend::replying(
        r##"{"palette":["#0f172a","38bdf8","#FFF"],"fonts":["Inter","Space Grotesk"],"description":"Calm and focused."}"##,
    );
    let tools = ToolService::new(backend.clone());

    let vibe = tools.generate_vibe("  a meditation timer ").await.unwrap();
    assert_eq!(vibe.palette(), ["#0F172A", "#38BDF8", "#FFFFFF"]);
    assert_eq!(vibe.fonts().len(), 2);
    assert_eq!(backend.calls(), ["a meditation timer"]);
}

#[tokio::test]
async fn blank_input_never_reaches_the_backend() {
    let backend = ScriptedBackend::replying("{}");
    let tools = ToolService::new(backend.clone());

    assert!(matches!(
        tools.audit_prompt("   ").await,
        Err(ToolError::EmptyInput(_))
    ));
    assert!(matches!(
        tools.manifest_image("").await,
        Err(ToolError::EmptyInput(_))
    ));
    assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn audit_score_out_of_range_is_rejected() {
    let backend =
        ScriptedBackend::replying(r#"{"score":140,"feedback":"Great","level":"Visionary"}"#);
    let tools = ToolService::new(backend);

    let err = tools.audit_prompt("Build me an app").await.unwrap_err();
    assert!(matches!(
        err,
        ToolError::Artifact(ArtifactError::ScoreOutOfRange(140))
    ));
}

#[tokio::test]
async fn fenced_audit_reply_is_accepted() {
    let backend = ScriptedBackend::replying(
        "```json\n{\"score\":72,\"feedback\":\"Add **constraints**.\",\"level\":\"Architect\"}\n```",
    );
    let tools = ToolService::new(backend);

    let audit = tools.audit_prompt("Build a todo app").await.unwrap();
    assert_eq!(audit.score(), 72);
    assert_eq!(audit.level(), "Architect");
}

#[tokio::test]
async fn unreadable_reply_is_malformed_payload() {
    let tools = ToolService::new(ScriptedBackend::replying("not json at all"));
    assert!(matches!(
        tools.generate_vibe("brief").await,
        Err(ToolError::MalformedPayload(_))
    ));
}

#[tokio::test]
async fn image_prompt_is_styled() {
    let backend = ScriptedBackend::replying("{}");
    let tools = ToolService::new(backend.clone());

    let image = tools.manifest_image("a rocket made of lego").await.unwrap();
    assert_eq!(image.mime_type(), "image/png");
    let calls = backend.calls();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].ends_with("a rocket made of lego"));
}

#[tokio::test]
async fn result_is_dropped_after_navigation() {
    let content = content::load_embedded().unwrap();
    let backend = ScriptedBackend::replying(r#"{"score":50,"feedback":"ok","level":"Novice"}"#);
    let services = AppServices::new(
        content,
        SessionSettings::default(),
        fixed_clock(),
        backend,
        Arc::new(MemoryClipboard::new()),
    );
    let mut session = services.start_session();
    session.select_view(View::Auditor);

    let ticket = session.ticket();
    let pending = services.tools();
    session.select_view(View::Glossary);
    let audit = pending.audit_prompt("Make it pop").await.unwrap();

    assert!(!session.is_current(&ticket));
    assert_eq!(audit.score(), 50);

    session.select_view(View::Auditor);
    assert!(!session.is_current(&ticket), "returning later is a new epoch");
    assert!(session.is_current(&session.ticket()));
}

#[test]
fn clipboard_is_shared_through_services() {
    let clipboard = Arc::new(MemoryClipboard::new());
    let services = AppServices::new(
        content::load_embedded().unwrap(),
        SessionSettings::default(),
        fixed_clock(),
        ScriptedBackend::replying("{}"),
        clipboard.clone(),
    );

    let template = services.library().prompts[0].template().to_string();
    services.clipboard().copy_text(&template).unwrap();
    assert_eq!(clipboard.last(), Some(template));
}
