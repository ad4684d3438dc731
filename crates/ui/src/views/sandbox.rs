use dioxus::prelude::*;

use academy_core::model::{GeneratedImage, VibeManifesto};
use services::AcademySession;

use crate::context::AppContext;
use crate::views::state::{ToolErrorNote, ViewState, deliver};
use crate::vm::{image_data_url, markdown_to_html, swatch_style};

#[component]
pub fn SandboxView() -> Element {
    let ctx = use_context::<AppContext>();
    let enabled = ctx.tools().enabled();

    rsx! {
        div { class: "sandbox",
            header { class: "page-header",
                h1 { "Vibe Sandbox" }
                p { "Describe it, then let the model show you what it sees." }
            }
            if !enabled {
                p { class: "notice",
                    "Generative tools are offline. Set ACADEMY_AI_API_KEY to try them."
                }
            }
            ImageManifestor {}
            VibeGenerator {}
        }
    }
}

#[component]
fn ImageManifestor() -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_context::<Signal<AcademySession>>();
    let mut prompt = use_signal(String::new);
    let mut image = use_signal(|| ViewState::<GeneratedImage>::Idle);

    let manifest = move |_: MouseEvent| {
        let text = prompt.read().clone();
        let ticket = session.peek().ticket();
        let tools = ctx.tools();
        image.set(ViewState::Loading);
        spawn(async move {
            let result = tools.manifest_image(&text).await;
            deliver(session, ticket, image, result);
        });
    };

    let busy = image.read().is_loading();
    rsx! {
        section { class: "card tool-panel",
            h2 { "Image Manifestor" }
            textarea {
                rows: 3,
                placeholder: "A cozy reading app with warm paper textures...",
                value: "{prompt}",
                oninput: move |evt| prompt.set(evt.value()),
            }
            button {
                class: "btn btn-primary",
                r#type: "button",
                disabled: busy,
                onclick: manifest,
                if busy { "Manifesting..." } else { "Manifest Image" }
            }
            match &*image.read() {
                ViewState::Idle | ViewState::Loading => rsx! {},
                ViewState::Ready(generated) => rsx! {
                    img { class: "tool-panel__image", src: image_data_url(generated), alt: "Generated illustration" }
                },
                ViewState::Error(err) => rsx! {
                    ToolErrorNote { error: *err }
                },
            }
        }
    }
}

#[component]
fn VibeGenerator() -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_context::<Signal<AcademySession>>();
    let mut brief = use_signal(String::new);
    let mut vibe = use_signal(|| ViewState::<VibeManifesto>::Idle);

    let generate = move |_: MouseEvent| {
        let text = brief.read().clone();
        let ticket = session.peek().ticket();
        let tools = ctx.tools();
        vibe.set(ViewState::Loading);
        spawn(async move {
            let result = tools.generate_vibe(&text).await;
            deliver(session, ticket, vibe, result);
        });
    };

    let busy = vibe.read().is_loading();
    rsx! {
        section { class: "card tool-panel",
            h2 { "Vibe Generator" }
            input {
                r#type: "text",
                placeholder: "A meditation timer for night owls",
                value: "{brief}",
                oninput: move |evt| brief.set(evt.value()),
            }
            button {
                class: "btn btn-primary",
                r#type: "button",
                disabled: busy,
                onclick: generate,
                if busy { "Reading the room..." } else { "Generate Vibe" }
            }
            match &*vibe.read() {
                ViewState::Idle | ViewState::Loading => rsx! {},
                ViewState::Ready(manifesto) => rsx! {
                    VibeCard { manifesto: manifesto.clone() }
                },
                ViewState::Error(err) => rsx! {
                    ToolErrorNote { error: *err }
                },
            }
        }
    }
}

#[component]
fn VibeCard(manifesto: VibeManifesto) -> Element {
    let colors = manifesto.palette().to_vec();
    let fonts = manifesto.fonts().join(" · ");
    let description = markdown_to_html(manifesto.description());

    rsx! {
        div { class: "vibe-card",
            div { class: "vibe-card__palette",
                for color in colors {
                    div { key: "{color}", class: "swatch",
                        span { class: "swatch__chip", style: swatch_style(&color) }
                        code { "{color}" }
                    }
                }
            }
            p { class: "vibe-card__fonts", "{fonts}" }
            div { class: "vibe-card__mood markdown", dangerous_inner_html: "{description}" }
        }
    }
}
