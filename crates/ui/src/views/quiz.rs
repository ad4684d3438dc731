use dioxus::prelude::*;
use tracing::warn;

use services::AcademySession;

use crate::vm::{option_class, quiz_result, quiz_subtitle};

#[component]
pub fn QuizPanel() -> Element {
    let mut session = use_context::<Signal<AcademySession>>();
    let (subtitle, questions, result, can_submit, submitted) = {
        let s = session.read();
        let attempt = s.attempt();
        let questions = attempt
            .quiz()
            .questions()
            .iter()
            .enumerate()
            .map(|(q_idx, question)| {
                let options = question
                    .options()
                    .iter()
                    .enumerate()
                    .map(|(o_idx, text)| (o_idx, text.clone(), option_class(attempt.feedback(q_idx, o_idx))))
                    .collect::<Vec<_>>();
                (q_idx, format!("{}. {}", q_idx + 1, question.question()), options)
            })
            .collect::<Vec<_>>();
        (
            quiz_subtitle(s.current_module()),
            questions,
            quiz_result(attempt),
            attempt.can_submit(),
            attempt.is_submitted(),
        )
    };

    rsx! {
        section { class: "quiz", id: "quiz",
            h3 { class: "quiz__title", "Vibe Check Quiz" }
            p { class: "quiz__subtitle", "{subtitle}" }
            for (q_idx, prompt, options) in questions {
                div { key: "{q_idx}", class: "quiz__question",
                    p { class: "quiz__prompt", "{prompt}" }
                    div { class: "quiz__options",
                        for (o_idx, text, class) in options {
                            button {
                                key: "{o_idx}",
                                class,
                                r#type: "button",
                                disabled: submitted,
                                onclick: move |_| {
                                    if let Err(err) = session.write().select_answer(q_idx, o_idx) {
                                        warn!(error = %err, "answer rejected");
                                    }
                                },
                                "{text}"
                            }
                        }
                    }
                }
            }
            match result {
                None => rsx! {
                    button {
                        class: "btn btn-primary quiz__submit",
                        r#type: "button",
                        disabled: !can_submit,
                        onclick: move |_| {
                            if let Err(err) = session.write().submit_quiz() {
                                warn!(error = %err, "quiz submission rejected");
                            }
                        },
                        "Check My Vibe"
                    }
                },
                Some(result) => {
                    let message = result.message();
                    let score = result.score_label;
                    rsx! {
                        div { class: "quiz__result",
                            p { "Result: " strong { "{score}" } }
                            if result.passed {
                                p { class: "quiz__verdict is-passed", "{message}" }
                            } else {
                                button {
                                    class: "btn btn-link",
                                    r#type: "button",
                                    onclick: move |_| session.write().retry_quiz(),
                                    "{message}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
