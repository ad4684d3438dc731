use dioxus::prelude::*;

use academy_core::model::PromptAudit;
use services::AcademySession;

use crate::context::AppContext;
use crate::views::state::{ToolErrorNote, ViewState, deliver};
use crate::vm::markdown_to_html;

#[component]
pub fn AuditorView() -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_context::<Signal<AcademySession>>();
    let mut draft = use_signal(String::new);
    let mut audit = use_signal(|| ViewState::<PromptAudit>::Idle);
    let enabled = ctx.tools().enabled();

    let run = move |_: MouseEvent| {
        let text = draft.read().clone();
        let ticket = session.peek().ticket();
        let tools = ctx.tools();
        audit.set(ViewState::Loading);
        spawn(async move {
            let result = tools.audit_prompt(&text).await;
            deliver(session, ticket, audit, result);
        });
    };

    let busy = audit.read().is_loading();
    rsx! {
        div { class: "auditor",
            header { class: "page-header",
                h1 { "Prompt Auditor" }
                p { "Paste a prompt you would send an AI builder and get a score with advice." }
            }
            if !enabled {
                p { class: "notice",
                    "Generative tools are offline. Set ACADEMY_AI_API_KEY to try them."
                }
            }
            section { class: "card tool-panel",
                textarea {
                    rows: 6,
                    placeholder: "Build me a landing page for...",
                    value: "{draft}",
                    oninput: move |evt| draft.set(evt.value()),
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: busy,
                    onclick: run,
                    if busy { "Auditing..." } else { "Audit My Prompt" }
                }
                match &*audit.read() {
                    ViewState::Idle | ViewState::Loading => rsx! {},
                    ViewState::Ready(report) => rsx! {
                        AuditReport { report: report.clone() }
                    },
                    ViewState::Error(err) => rsx! {
                        ToolErrorNote { error: *err }
                    },
                }
            }
        }
    }
}

#[component]
fn AuditReport(report: PromptAudit) -> Element {
    let score = report.score();
    let level = report.level().to_string();
    let feedback = markdown_to_html(report.feedback());

    rsx! {
        div { class: "audit-report",
            div { class: "audit-report__score",
                strong { "{score}" }
                span { "/ 100" }
            }
            p { class: "audit-report__level", "Level: {level}" }
            div { class: "audit-report__feedback markdown", dangerous_inner_html: "{feedback}" }
        }
    }
}
