use dioxus::prelude::*;

use academy_core::model::DiagramKind;

#[component]
pub fn Diagram(kind: DiagramKind) -> Element {
    match kind {
        DiagramKind::IntentFlow => rsx! {
            figure { class: "diagram diagram--flow",
                figcaption { "The Vibe Coding Lifecycle" }
                div { class: "diagram__row",
                    DiagramNode { label: "Intent (You)", tone: "blue" }
                    span { class: "diagram__arrow", "→" }
                    DiagramNode { label: "AI Agent", tone: "purple" }
                    span { class: "diagram__arrow", "→" }
                    DiagramNode { label: "Software", tone: "green" }
                }
            }
        },
        DiagramKind::ApiWaiter => rsx! {
            figure { class: "diagram diagram--waiter",
                figcaption { "The API Waiter Concept" }
                div { class: "diagram__row",
                    DiagramNode { label: "Customer", note: "User interface", tone: "blue" }
                    span { class: "diagram__arrow", "⇄" }
                    DiagramNode { label: "Waiter (API)", note: "Messenger", tone: "purple" }
                    span { class: "diagram__arrow", "⇄" }
                    DiagramNode { label: "Kitchen", note: "Server / Database", tone: "green" }
                }
            }
        },
    }
}

#[component]
fn DiagramNode(label: &'static str, tone: &'static str, note: Option<&'static str>) -> Element {
    rsx! {
        div { class: "diagram__node diagram__node--{tone}",
            strong { "{label}" }
            if let Some(note) = note {
                small { "{note}" }
            }
        }
    }
}
