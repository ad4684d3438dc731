//! Quiz scoring. Pure: no state, no side effects.

use thiserror::Error;

use crate::model::{AnswerSet, Quiz};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScoringError {
    #[error("answer set has {actual} entries but the quiz has {expected} questions")]
    LengthMismatch { expected: usize, actual: usize },
}

/// Number of correct answers out of the quiz length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizScore {
    pub correct: usize,
    pub total: usize,
}

impl QuizScore {
    /// Mastery is all-or-nothing: every question must be correct.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.correct == self.total
    }

    #[must_use]
    pub fn missed(&self) -> usize {
        self.total - self.correct
    }
}

/// Counts positions where the selected option is the correct one.
///
/// Unanswered entries and out-of-range selections count as incorrect.
///
/// # Errors
///
/// Returns `ScoringError::LengthMismatch` if `answers` is not sized for `quiz`.
pub fn score(quiz: &Quiz, answers: &AnswerSet) -> Result<QuizScore, ScoringError> {
    if answers.len() != quiz.len() {
        return Err(ScoringError::LengthMismatch {
            expected: quiz.len(),
            actual: answers.len(),
        });
    }

    let correct = quiz
        .questions()
        .iter()
        .zip(answers.as_slice())
        .filter(|(question, answer)| answer.is_some_and(|choice| question.is_correct(choice)))
        .count();

    Ok(QuizScore {
        correct,
        total: quiz.len(),
    })
}
