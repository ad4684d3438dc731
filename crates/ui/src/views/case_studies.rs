use dioxus::prelude::*;

use crate::context::AppContext;

#[component]
pub fn CaseStudiesView() -> Element {
    let ctx = use_context::<AppContext>();
    let cases = ctx
        .library()
        .case_studies
        .iter()
        .map(|case| {
            (
                case.title().to_string(),
                case.description().to_string(),
                case.vibe().to_string(),
                case.outcome().to_string(),
                case.image().as_str().to_string(),
            )
        })
        .collect::<Vec<_>>();

    rsx! {
        div { class: "cases",
            header { class: "page-header",
                h1 { "Case Studies" }
                p { "Real builds by people who described the result instead of the code." }
            }
            for (title, description, vibe, outcome, image) in cases {
                article { key: "{title}", class: "card case-card",
                    img { class: "case-card__image", src: image, alt: "{title}" }
                    h2 { "{title}" }
                    p { "{description}" }
                    div { class: "case-card__split",
                        div {
                            h4 { "The Vibe" }
                            p { "{vibe}" }
                        }
                        div {
                            h4 { "The Outcome" }
                            p { "{outcome}" }
                        }
                    }
                }
            }
        }
    }
}
