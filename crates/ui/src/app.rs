use dioxus::prelude::*;

use academy_core::View;
use services::AcademySession;

use crate::context::AppContext;
use crate::views::{
    AuditorView, CaseStudiesView, CurriculumView, GlossaryView, GraduationView, LibraryView,
    SandboxView, Sidebar,
};

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    use_context_provider(|| Signal::new(ctx.start_session()));

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "Vibe Academy" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Shell {}
            }
        }
    }
}

/// Sidebar plus the active view. Expects an `AppContext` and a session signal in context.
#[component]
pub fn Shell() -> Element {
    let session = use_context::<Signal<AcademySession>>();
    let view = session.read().current_view();

    rsx! {
        div { class: "shell",
            Sidebar {}
            main { class: "main", id: "main-scroll",
                match view {
                    View::Curriculum => rsx! { CurriculumView {} },
                    View::Library => rsx! { LibraryView {} },
                    View::Glossary => rsx! { GlossaryView {} },
                    View::CaseStudies => rsx! { CaseStudiesView {} },
                    View::Sandbox => rsx! { SandboxView {} },
                    View::Auditor => rsx! { AuditorView {} },
                    View::Graduation => rsx! { GraduationView {} },
                }
            }
        }
    }
}
