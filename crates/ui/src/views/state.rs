use dioxus::document::eval;
use dioxus::prelude::*;
use tracing::warn;

use academy_core::ViewTicket;
use services::{AcademySession, ToolError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    NotConfigured,
    EmptyInput,
    Unusable,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::NotConfigured => {
                "Generative tools are not configured. Set ACADEMY_AI_API_KEY and restart."
            }
            ViewError::EmptyInput => "Type something first.",
            ViewError::Unusable => "The model answered, but not in a usable shape. Try again.",
            ViewError::Unknown => "Something went wrong. Please try again.",
        }
    }
}

impl From<&ToolError> for ViewError {
    fn from(err: &ToolError) -> Self {
        match err {
            ToolError::Disabled => ViewError::NotConfigured,
            ToolError::EmptyInput(_) => ViewError::EmptyInput,
            ToolError::EmptyResponse | ToolError::MalformedPayload(_) | ToolError::Artifact(_) => {
                ViewError::Unusable
            }
            _ => ViewError::Unknown,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

impl<T> ViewState<T> {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }
}

#[component]
pub fn ToolErrorNote(error: ViewError) -> Element {
    let message = error.message();
    rsx! {
        p { class: "error", role: "alert", "{message}" }
    }
}

const SCROLL_TOP_SCRIPT: &str = r#"document.getElementById("main-scroll")?.scrollTo({ top: 0 });"#;

/// Runs one navigation call and resets the main pane's scroll if it moved.
pub fn navigate<R>(
    mut session: Signal<AcademySession>,
    go: impl FnOnce(&mut AcademySession) -> R,
) -> R {
    let (outcome, reset) = {
        let mut guard = session.write();
        let outcome = go(&mut guard);
        (outcome, guard.take_scroll_reset())
    };
    if reset {
        let _ = eval(SCROLL_TOP_SCRIPT);
    }
    outcome
}

/// Applies a tool result only if nothing navigated since `ticket` was taken.
pub fn deliver<T: 'static>(
    session: Signal<AcademySession>,
    ticket: ViewTicket,
    mut target: Signal<ViewState<T>>,
    result: Result<T, ToolError>,
) {
    if !session.peek().is_current(&ticket) {
        warn!(view = %ticket.view(), "dropping tool result for a view that is no longer active");
        return;
    }
    target.set(match result {
        Ok(value) => ViewState::Ready(value),
        Err(err) => ViewState::Error(ViewError::from(&err)),
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_errors_map_to_messages() {
        assert_eq!(ViewError::from(&ToolError::Disabled), ViewError::NotConfigured);
        assert_eq!(
            ViewError::from(&ToolError::EmptyInput("prompt")),
            ViewError::EmptyInput
        );
        assert_eq!(
            ViewError::from(&ToolError::MalformedPayload("x".into())),
            ViewError::Unusable
        );
        assert!(ViewError::NotConfigured.message().contains("ACADEMY_AI_API_KEY"));
    }
}
