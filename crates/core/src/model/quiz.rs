use thiserror::Error;

use crate::model::text::{TextError, require_text, require_texts};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error(transparent)]
    Text(#[from] TextError),

    #[error("a question needs at least 2 options, got {count}")]
    TooFewOptions { count: usize },

    #[error("correct index {index} is out of range for {options} options")]
    CorrectIndexOutOfRange { index: usize, options: usize },

    #[error("a quiz needs at least one question")]
    Empty,

    #[error("question {position} is invalid: {source}")]
    Question {
        position: usize,
        #[source]
        source: Box<QuizError>,
    },
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// Multiple-choice question with exactly one correct option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizQuestion {
    question: String,
    options: Vec<String>,
    correct_index: usize,
}

impl QuizQuestion {
    /// Builds a validated question.
    ///
    /// # Errors
    ///
    /// Returns `QuizError` if the question or any option is blank, fewer than two
    /// options are given, or `correct_index` does not point at an option.
    pub fn new(
        question: impl Into<String>,
        options: Vec<String>,
        correct_index: usize,
    ) -> Result<Self, QuizError> {
        let question = require_text("question", question)?;
        let options = require_texts("option", options)?;
        if options.len() < 2 {
            return Err(QuizError::TooFewOptions {
                count: options.len(),
            });
        }
        if correct_index >= options.len() {
            return Err(QuizError::CorrectIndexOutOfRange {
                index: correct_index,
                options: options.len(),
            });
        }
        Ok(Self {
            question,
            options,
            correct_index,
        })
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    #[must_use]
    pub fn is_correct(&self, choice: usize) -> bool {
        choice == self.correct_index
    }

    #[must_use]
    pub fn has_option(&self, choice: usize) -> bool {
        choice < self.options.len()
    }
}

//
// ─── QUIZ ──────────────────────────────────────────────────────────────────────
//

/// Ordered set of questions gating progression past one module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quiz {
    questions: Vec<QuizQuestion>,
}

impl Quiz {
    /// # Errors
    ///
    /// Returns `QuizError::Empty` if no questions are given.
    pub fn new(questions: Vec<QuizQuestion>) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::Empty);
        }
        Ok(Self { questions })
    }

    #[must_use]
    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    #[must_use]
    pub fn question(&self, position: usize) -> Option<&QuizQuestion> {
        self.questions.get(position)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

//
// ─── ANSWER SET ────────────────────────────────────────────────────────────────
//

/// Selected option per question position; `None` marks an unanswered question.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnswerSet {
    answers: Vec<Option<usize>>,
}

impl AnswerSet {
    /// An all-unanswered set sized for `quiz`.
    #[must_use]
    pub fn blank(quiz: &Quiz) -> Self {
        Self {
            answers: vec![None; quiz.len()],
        }
    }

    #[must_use]
    pub fn from_choices(answers: Vec<Option<usize>>) -> Self {
        Self { answers }
    }

    #[must_use]
    pub fn get(&self, position: usize) -> Option<usize> {
        self.answers.get(position).copied().flatten()
    }

    /// Records `choice` for `position`. Returns false if the position does not exist.
    pub fn set(&mut self, position: usize, choice: usize) -> bool {
        match self.answers.get_mut(position) {
            Some(slot) => {
                *slot = Some(choice);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.answers.iter_mut().for_each(|slot| *slot = None);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|slot| slot.is_some()).count()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.answers.iter().all(Option::is_some)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Option<usize>] {
        &self.answers
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
