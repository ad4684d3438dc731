use academy_core::model::{AnswerSet, Module, ModuleId, Quiz};
use academy_core::{QuizScore, score};

use crate::error::QuizAttemptError;

/// How one option should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionFeedback {
    Idle,
    Selected,
    /// The right answer, revealed after submission.
    Correct,
    /// Chosen but wrong, revealed after submission.
    Wrong,
}

/// A learner's answers to one module's quiz, from first click to result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizAttempt {
    module: ModuleId,
    quiz: Quiz,
    answers: AnswerSet,
    result: Option<QuizScore>,
}

impl QuizAttempt {
    #[must_use]
    pub fn new(module: &Module) -> Self {
        let quiz = module.quiz().clone();
        Self {
            module: module.id().clone(),
            answers: AnswerSet::blank(&quiz),
            quiz,
            result: None,
        }
    }

    #[must_use]
    pub fn module_id(&self) -> &ModuleId {
        &self.module
    }

    #[must_use]
    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    #[must_use]
    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    #[must_use]
    pub fn result(&self) -> Option<QuizScore> {
        self.result
    }

    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.result.is_some()
    }

    /// Choose `option` for `question`, replacing any earlier choice.
    ///
    /// # Errors
    ///
    /// Returns `QuizAttemptError::AlreadySubmitted` once the attempt is scored and
    /// `QuizAttemptError::InvalidAnswer` for indices outside the quiz.
    pub fn select(&mut self, question: usize, option: usize) -> Result<(), QuizAttemptError> {
        if self.is_submitted() {
            return Err(QuizAttemptError::AlreadySubmitted);
        }
        let valid = self
            .quiz
            .question(question)
            .is_some_and(|q| q.has_option(option));
        if !valid || !self.answers.set(question, option) {
            return Err(QuizAttemptError::InvalidAnswer { question, option });
        }
        Ok(())
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.is_submitted() && self.answers.is_complete()
    }

    /// Score the answers and keep the result.
    ///
    /// # Errors
    ///
    /// Returns `QuizAttemptError::Incomplete` while a question is unanswered and
    /// `QuizAttemptError::AlreadySubmitted` on a second submit.
    pub fn submit(&mut self) -> Result<QuizScore, QuizAttemptError> {
        if self.is_submitted() {
            return Err(QuizAttemptError::AlreadySubmitted);
        }
        if !self.answers.is_complete() {
            return Err(QuizAttemptError::Incomplete {
                answered: self.answers.answered_count(),
                total: self.quiz.len(),
            });
        }
        let result = score(&self.quiz, &self.answers)?;
        self.result = Some(result);
        Ok(result)
    }

    /// Forget answers and result so the quiz can be taken again.
    pub fn retry(&mut self) {
        self.answers.clear();
        self.result = None;
    }

    #[must_use]
    pub fn feedback(&self, question: usize, option: usize) -> OptionFeedback {
        let selected = self.answers.get(question) == Some(option);
        if !self.is_submitted() {
            return if selected {
                OptionFeedback::Selected
            } else {
                OptionFeedback::Idle
            };
        }
        let correct = self
            .quiz
            .question(question)
            .is_some_and(|q| q.is_correct(option));
        match (correct, selected) {
            (true, _) => OptionFeedback::Correct,
            (false, true) => OptionFeedback::Wrong,
            (false, false) => OptionFeedback::Idle,
        }
    }
}
