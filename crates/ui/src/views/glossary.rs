use dioxus::prelude::*;

use crate::context::AppContext;
use crate::vm::filter_glossary;

#[component]
pub fn GlossaryView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut query = use_signal(String::new);

    let library = ctx.library();
    let entries = filter_glossary(&library.glossary, &query.read())
        .into_iter()
        .map(|item| (item.term().to_string(), item.definition().to_string()))
        .collect::<Vec<_>>();

    rsx! {
        div { class: "glossary",
            header { class: "page-header",
                h1 { "Glossary" }
                p { "Plain-language definitions for the words you will hear most." }
            }
            input {
                class: "search",
                r#type: "search",
                placeholder: "Search terms...",
                value: "{query}",
                oninput: move |evt| query.set(evt.value()),
            }
            if entries.is_empty() {
                p { class: "empty", "No terms match your search." }
            }
            dl { class: "glossary__list",
                for (term, definition) in entries {
                    div { key: "{term}", class: "glossary__entry",
                        dt { "{term}" }
                        dd { "{definition}" }
                    }
                }
            }
        }
    }
}
