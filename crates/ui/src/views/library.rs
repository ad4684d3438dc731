use dioxus::prelude::*;
use tracing::warn;

use crate::context::AppContext;
use crate::vm::{TemplateSegment, prompt_sections, template_segments, toolkit_sections};

#[derive(Clone, PartialEq)]
struct PromptCard {
    title: String,
    scenario: String,
    template: String,
    segments: Vec<TemplateSegment>,
}

#[derive(Clone, PartialEq)]
struct ToolCard {
    name: String,
    description: String,
    link: Option<String>,
}

#[component]
pub fn LibraryView() -> Element {
    let ctx = use_context::<AppContext>();
    let library = ctx.library();

    let prompts = prompt_sections(&library)
        .into_iter()
        .map(|(category, templates)| {
            let cards = templates
                .into_iter()
                .map(|prompt| PromptCard {
                    title: prompt.title().to_string(),
                    scenario: prompt.scenario().to_string(),
                    template: prompt.template().to_string(),
                    segments: template_segments(prompt),
                })
                .collect::<Vec<_>>();
            (category.label(), cards)
        })
        .collect::<Vec<_>>();

    let toolkit = toolkit_sections(&library)
        .into_iter()
        .map(|(category, tools)| {
            let cards = tools
                .into_iter()
                .map(|tool| ToolCard {
                    name: tool.name().to_string(),
                    description: tool.description().to_string(),
                    link: tool.link().map(|link| link.as_str().to_string()),
                })
                .collect::<Vec<_>>();
            (category.label(), cards)
        })
        .collect::<Vec<_>>();

    rsx! {
        div { class: "library",
            header { class: "page-header",
                h1 { "Prompt Library" }
                p { "Copy a proven starting point, then fill in the highlighted blanks." }
            }
            for (label, cards) in prompts {
                section { key: "{label}", class: "library__section",
                    h2 { "{label}" }
                    div { class: "card-grid",
                        for card in cards {
                            PromptCardView { key: "{card.title}", card }
                        }
                    }
                }
            }
            header { class: "page-header",
                h1 { "The Toolkit" }
                p { "The tools this course leans on, grouped by the job they do." }
            }
            for (label, cards) in toolkit {
                section { key: "{label}", class: "library__section",
                    h2 { "{label}" }
                    div { class: "card-grid",
                        for card in cards {
                            ToolCardView { key: "{card.name}", card }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn PromptCardView(card: PromptCard) -> Element {
    let ctx = use_context::<AppContext>();
    let mut status = use_signal(|| None::<&'static str>);
    let template = card.template.clone();

    let copy = move |_: MouseEvent| {
        let outcome = ctx.clipboard().copy_text(&template);
        status.set(Some(match outcome {
            Ok(()) => "Copied!",
            Err(err) => {
                warn!(error = %err, "copy to clipboard failed");
                "Copy failed"
            }
        }));
    };

    rsx! {
        article { class: "card prompt-card",
            h3 { "{card.title}" }
            p { class: "prompt-card__scenario", "{card.scenario}" }
            pre { class: "prompt-card__template",
                for (index, segment) in card.segments.iter().enumerate() {
                    span {
                        key: "{index}",
                        class: if segment.placeholder { "placeholder" },
                        "{segment.text}"
                    }
                }
            }
            div { class: "prompt-card__actions",
                button { class: "btn btn-secondary", r#type: "button", onclick: copy, "Copy Prompt" }
                if let Some(message) = status() {
                    span { class: "copy-status", "{message}" }
                }
            }
        }
    }
}

#[component]
fn ToolCardView(card: ToolCard) -> Element {
    rsx! {
        article { class: "card tool-card",
            h3 { "{card.name}" }
            p { "{card.description}" }
            if let Some(href) = card.link {
                a { class: "tool-card__link", href, target: "_blank", rel: "noopener", "Visit" }
            }
        }
    }
}
