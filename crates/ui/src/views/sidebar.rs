use dioxus::prelude::*;
use tracing::warn;

use services::AcademySession;

use crate::views::state::navigate;
use crate::vm::{ViewLink, XpBarVm, module_nav_items, resource_links, tool_links};

#[component]
pub fn Sidebar() -> Element {
    let session = use_context::<Signal<AcademySession>>();
    let (bar, modules, resources, tools, learner) = {
        let s = session.read();
        (
            XpBarVm::from_progress(s.progress()),
            module_nav_items(&s),
            resource_links(&s),
            tool_links(&s),
            s.learner().to_string(),
        )
    };
    let initial = learner.chars().next().unwrap_or('?');
    let xp_label = bar.label();
    let xp_width = bar.width_style();

    rsx! {
        aside { class: "sidebar",
            div { class: "sidebar__brand",
                span { class: "sidebar__logo", "V" }
                span { class: "sidebar__name", "Vibe Academy" }
            }
            div { class: "xp",
                div { class: "xp__caption",
                    span { "Vibe XP" }
                    span { id: "xp-label", "{xp_label}" }
                }
                div { class: "xp__track",
                    div { class: "xp__fill", style: xp_width }
                }
            }
            nav { class: "sidebar__section",
                h4 { "Curriculum" }
                for item in modules {
                    button {
                        key: "{item.id}",
                        class: if item.active { "nav-item is-active" } else { "nav-item" },
                        r#type: "button",
                        onclick: {
                            let id = item.id.clone();
                            move |_| {
                                let id = id.clone();
                                if let Err(err) = navigate(session, move |s| s.select_module(&id)) {
                                    warn!(error = %err, "module link outside the curriculum");
                                }
                            }
                        },
                        span { class: "nav-item__number", "{item.number}" }
                        span { class: "nav-item__title", "{item.title}" }
                        if item.completed {
                            span { class: "nav-item__done", title: "Completed", "✓" }
                        }
                    }
                }
            }
            nav { class: "sidebar__section",
                h4 { "Resources" }
                for link in resources {
                    ViewLinkButton { key: "{link.label}", link }
                }
            }
            nav { class: "sidebar__section",
                h4 { "Creative Tools" }
                for link in tools {
                    ViewLinkButton { key: "{link.label}", link }
                }
            }
            div { class: "sidebar__learner",
                span { class: "sidebar__avatar", "{initial}" }
                span { "{learner}" }
            }
        }
    }
}

#[component]
fn ViewLinkButton(link: ViewLink) -> Element {
    let session = use_context::<Signal<AcademySession>>();
    let view = link.view;
    let class = match (link.active, link.locked) {
        (true, _) => "nav-item is-active",
        (false, true) => "nav-item is-locked",
        (false, false) => "nav-item",
    };

    rsx! {
        button {
            class,
            r#type: "button",
            disabled: link.locked,
            onclick: move |_| {
                navigate(session, |s| s.select_view(view));
            },
            "{link.label}"
        }
    }
}
