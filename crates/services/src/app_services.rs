use std::sync::Arc;

use academy_core::model::Library;
use academy_core::{CurriculumCatalog, XpPolicy};
use content::ContentBundle;

use crate::academy_session::AcademySession;
use crate::clipboard::{ClipboardSink, SystemClipboard};
use crate::tools::{GenerativeBackend, OpenAiBackend, ToolService};
use crate::Clock;

/// Per-learner knobs chosen at launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSettings {
    pub learner: String,
    pub policy: XpPolicy,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            learner: "John Student".into(),
            policy: XpPolicy::with_participation(XpPolicy::DEFAULT_PARTICIPATION_AWARD),
        }
    }
}

/// Assembles app-facing services around loaded content.
#[derive(Clone)]
pub struct AppServices {
    clock: Clock,
    settings: SessionSettings,
    catalog: Arc<CurriculumCatalog>,
    library: Arc<Library>,
    tools: Arc<ToolService>,
    clipboard: Arc<dyn ClipboardSink>,
}

impl AppServices {
    /// Desktop wiring: system clipboard and the HTTP backend configured from the environment.
    #[must_use]
    pub fn from_env(content: ContentBundle, settings: SessionSettings, clock: Clock) -> Self {
        Self::new(
            content,
            settings,
            clock,
            Arc::new(OpenAiBackend::from_env()),
            Arc::new(SystemClipboard),
        )
    }

    #[must_use]
    pub fn new(
        content: ContentBundle,
        settings: SessionSettings,
        clock: Clock,
        backend: Arc<dyn GenerativeBackend>,
        clipboard: Arc<dyn ClipboardSink>,
    ) -> Self {
        Self {
            clock,
            settings,
            catalog: Arc::new(content.catalog),
            library: Arc::new(content.library),
            tools: Arc::new(ToolService::new(backend)),
            clipboard,
        }
    }

    /// A fresh session at the first module with no progress.
    #[must_use]
    pub fn start_session(&self) -> AcademySession {
        AcademySession::new(
            Arc::clone(&self.catalog),
            self.settings.policy,
            self.settings.learner.clone(),
        )
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    #[must_use]
    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<CurriculumCatalog> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn library(&self) -> Arc<Library> {
        Arc::clone(&self.library)
    }

    #[must_use]
    pub fn tools(&self) -> Arc<ToolService> {
        Arc::clone(&self.tools)
    }

    #[must_use]
    pub fn clipboard(&self) -> Arc<dyn ClipboardSink> {
        Arc::clone(&self.clipboard)
    }
}
