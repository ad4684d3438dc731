use std::sync::Arc;

use academy_core::model::Library;
use services::{AcademySession, AppServices, ClipboardSink, Clock, ToolService};

/// What the UI needs from the composition root.
pub trait UiApp: Send + Sync {
    fn start_session(&self) -> AcademySession;
    fn library(&self) -> Arc<Library>;
    fn tools(&self) -> Arc<ToolService>;
    fn clipboard(&self) -> Arc<dyn ClipboardSink>;
    fn clock(&self) -> Clock;
}

impl UiApp for AppServices {
    fn start_session(&self) -> AcademySession {
        AppServices::start_session(self)
    }

    fn library(&self) -> Arc<Library> {
        AppServices::library(self)
    }

    fn tools(&self) -> Arc<ToolService> {
        AppServices::tools(self)
    }

    fn clipboard(&self) -> Arc<dyn ClipboardSink> {
        AppServices::clipboard(self)
    }

    fn clock(&self) -> Clock {
        AppServices::clock(self)
    }
}

#[derive(Clone)]
pub struct AppContext {
    app: Arc<dyn UiApp>,
    library: Arc<Library>,
    tools: Arc<ToolService>,
    clipboard: Arc<dyn ClipboardSink>,
    clock: Clock,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            app: Arc::clone(app),
            library: app.library(),
            tools: app.tools(),
            clipboard: app.clipboard(),
            clock: app.clock(),
        }
    }

    #[must_use]
    pub fn start_session(&self) -> AcademySession {
        self.app.start_session()
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

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }
}

// Provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
