use dioxus::prelude::*;

use services::AcademySession;

use crate::context::AppContext;
use crate::views::state::navigate;
use crate::vm::CertificateVm;

#[component]
pub fn GraduationView() -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_context::<Signal<AcademySession>>();
    let certificate = session
        .read()
        .certificate(&ctx.clock())
        .map(|certificate| CertificateVm::from(&certificate));

    let Some(vm) = certificate else {
        return rsx! {
            p { class: "empty", "Complete every module to claim your certificate." }
        };
    };

    rsx! {
        div { class: "graduation",
            h1 { "Congratulations, Vibe Architect!" }
            p { "You finished every module. Your intent now ships software." }
            section { class: "certificate", id: "certificate",
                p { class: "certificate__kicker", "Vibe Academy" }
                h2 { "Certificate of Professional Intent" }
                p { "This certifies that" }
                p { class: "certificate__name", "{vm.learner}" }
                p { "has mastered the art of building software through intent." }
                div { class: "certificate__meta",
                    span { "{vm.issued_on}" }
                    span { "{vm.score_label}" }
                }
            }
            button {
                class: "btn btn-secondary",
                r#type: "button",
                onclick: move |_| {
                    navigate(session, AcademySession::restart);
                },
                "Review All Modules"
            }
        }
    }
}
