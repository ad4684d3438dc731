use academy_core::model::Module;
use services::{OptionFeedback, QuizAttempt};

#[must_use]
pub fn option_class(feedback: OptionFeedback) -> &'static str {
    match feedback {
        OptionFeedback::Idle => "quiz-option",
        OptionFeedback::Selected => "quiz-option is-selected",
        OptionFeedback::Correct => "quiz-option is-correct",
        OptionFeedback::Wrong => "quiz-option is-wrong",
    }
}

#[must_use]
pub fn quiz_subtitle(module: &Module) -> String {
    format!("Test your mastery of {}.", module.short_title())
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizResultVm {
    pub score_label: String,
    pub passed: bool,
}

impl QuizResultVm {
    #[must_use]
    pub fn message(&self) -> &'static str {
        if self.passed {
            "Vibe Verified! You've mastered this module."
        } else {
            "Try Again to Unlock Next Module"
        }
    }
}

#[must_use]
pub fn quiz_result(attempt: &QuizAttempt) -> Option<QuizResultVm> {
    attempt.result().map(|score| QuizResultVm {
        score_label: format!("{} / {}", score.correct, score.total),
        passed: score.passed(),
    })
}
