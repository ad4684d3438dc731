use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use academy_core::XpPolicy;
use academy_core::time::fixed_clock;
use services::{AcademySession, AppServices, DisabledBackend, MemoryClipboard, SessionSettings};

use crate::app::Shell;
use crate::context::{UiApp, build_app_context};

#[derive(Props, Clone)]
struct ShellHarnessProps {
    app: Arc<AppServices>,
    session: AcademySession,
}

impl PartialEq for ShellHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ShellHarness(props: ShellHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    let session = props.session.clone();
    use_context_provider(|| Signal::new(session));
    rsx! { Shell {} }
}

pub struct ShellHarness {
    pub dom: VirtualDom,
    pub clipboard: Arc<MemoryClipboard>,
}

impl ShellHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Embedded content, no generative backend, in-memory clipboard, mastery-only XP.
pub fn services() -> (Arc<AppServices>, Arc<MemoryClipboard>) {
    let clipboard = Arc::new(MemoryClipboard::new());
    let services = AppServices::new(
        content::load_embedded().expect("embedded content"),
        SessionSettings {
            learner: "Ada Lovelace".into(),
            policy: XpPolicy::mastery_only(),
        },
        fixed_clock(),
        Arc::new(DisabledBackend),
        clipboard.clone(),
    );
    (Arc::new(services), clipboard)
}

/// Renders the shell around a session prepared by `prepare`.
pub fn setup_shell(prepare: impl FnOnce(&mut AcademySession)) -> ShellHarness {
    let (app, clipboard) = services();
    let mut session = app.start_session();
    prepare(&mut session);

    let dom = VirtualDom::new_with_props(ShellHarness, ShellHarnessProps { app, session });
    let mut harness = ShellHarness { dom, clipboard };
    harness.rebuild();
    harness
}

pub fn pass_current_module(session: &mut AcademySession) {
    let picks: Vec<usize> = session
        .attempt()
        .quiz()
        .questions()
        .iter()
        .map(|question| question.correct_index())
        .collect();
    for (question, option) in picks.into_iter().enumerate() {
        session.select_answer(question, option).expect("valid answer");
    }
    session.submit_quiz().expect("submit");
}
