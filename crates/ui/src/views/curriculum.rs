use dioxus::prelude::*;

use academy_core::model::Lesson;
use services::AcademySession;

use crate::views::diagram::Diagram;
use crate::views::quiz::QuizPanel;
use crate::views::state::navigate;
use crate::vm::{GateVm, gate, lesson_heading, module_header};

#[component]
pub fn CurriculumView() -> Element {
    let session = use_context::<Signal<AcademySession>>();
    let (header, lessons, checklist, video, gate_vm, has_previous) = {
        let s = session.read();
        let module = s.current_module();
        (
            module_header(&s),
            module.lessons().to_vec(),
            module.checklist().to_vec(),
            module.intro_video().map(|link| link.embed_url()),
            gate(&s),
            s.navigation().has_previous(),
        )
    };

    rsx! {
        article { class: "module",
            header { class: "module__header",
                p { class: "module__kicker", "{header.kicker}" }
                h1 { class: "module__title", "{header.title}" }
                p { class: "module__description", "{header.description}" }
                if header.completed {
                    span { class: "badge badge--done", "Mastered" }
                }
            }
            if let Some(src) = video {
                div { class: "module__video",
                    iframe { src, title: "Module introduction", allowfullscreen: true }
                }
            }
            for (index, lesson) in lessons.into_iter().enumerate() {
                LessonCard { key: "{index}", index, lesson }
            }
            if !checklist.is_empty() {
                section { class: "checklist",
                    h3 { "Launch Checklist" }
                    ul {
                        for item in checklist {
                            li { key: "{item}", "{item}" }
                        }
                    }
                }
            }
            QuizPanel {}
            footer { class: "module__gate",
                match gate_vm {
                    GateVm::Unlocked { label } => rsx! {
                        p { class: "gate__kicker", "Module Achievement Unlocked" }
                        button {
                            class: "btn btn-primary",
                            id: "advance",
                            r#type: "button",
                            onclick: move |_| {
                                navigate(session, AcademySession::advance);
                            },
                            "{label}"
                        }
                    },
                    GateVm::Locked { hint } => rsx! {
                        p { class: "gate__hint", "{hint}" }
                    },
                }
                if has_previous {
                    button {
                        class: "btn btn-link",
                        r#type: "button",
                        onclick: move |_| {
                            navigate(session, AcademySession::retreat);
                        },
                        "← Previous Module"
                    }
                }
            }
        }
    }
}

#[component]
fn LessonCard(index: usize, lesson: Lesson) -> Element {
    let heading = lesson_heading(index, &lesson);
    let concept_title = lesson.concept_title().to_string();
    let analogy = lesson.concept_analogy().to_string();
    let description = lesson.concept_description().to_string();
    let video = lesson.video().map(|link| link.embed_url());
    let steps = lesson.instructions().to_vec();
    let visual_guide = lesson.visual_guide().to_string();
    let image_prompt = lesson.image_prompt().to_string();
    let title = lesson.title().to_string();

    rsx! {
        section { class: "lesson",
            h2 { class: "lesson__title", "{heading}" }
            div { class: "concept",
                h3 { class: "concept__title", "{concept_title}" }
                blockquote { class: "concept__analogy", "{analogy}" }
                p { "{description}" }
            }
            if let Some(kind) = lesson.diagram() {
                Diagram { kind }
            }
            if let Some(src) = video {
                div { class: "lesson__video",
                    iframe { src, title: "{title}", allowfullscreen: true }
                }
            }
            ol { class: "lesson__steps",
                for (step, line) in steps.into_iter().enumerate() {
                    li { key: "{step}", "{line}" }
                }
            }
            div { class: "lesson__visual",
                h4 { "Visual Guide" }
                p { "{visual_guide}" }
            }
            details { class: "lesson__prompt",
                summary { "Illustration prompt" }
                p { "{image_prompt}" }
            }
        }
    }
}
