use std::sync::Arc;

use academy_core::model::{Certificate, Module, ModuleId};
use academy_core::{
    Clock, CurriculumCatalog, NavigationController, ProgressTracker, ProgressUpdate, QuizScore,
    Transition, View, ViewTicket, XpPolicy,
};
use tracing::info;

use crate::error::AcademyError;
use crate::quiz_attempt::QuizAttempt;

/// What a submitted quiz changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizOutcome {
    pub score: QuizScore,
    pub update: ProgressUpdate,
}

/// One learner's run through the curriculum: progress, position and the open quiz.
///
/// The quiz attempt belongs to the current module's curriculum page. It is
/// replaced whenever a transition leaves that page or lands on a different module.
#[derive(Debug, Clone)]
pub struct AcademySession {
    catalog: Arc<CurriculumCatalog>,
    progress: ProgressTracker,
    navigation: NavigationController,
    attempt: QuizAttempt,
    learner: String,
}

impl AcademySession {
    #[must_use]
    pub fn new(catalog: Arc<CurriculumCatalog>, policy: XpPolicy, learner: impl Into<String>) -> Self {
        let progress = ProgressTracker::new(&catalog, policy);
        let navigation = NavigationController::new(&catalog);
        let attempt = QuizAttempt::new(catalog.first());
        Self {
            catalog,
            progress,
            navigation,
            attempt,
            learner: learner.into(),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &CurriculumCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn progress(&self) -> &ProgressTracker {
        &self.progress
    }

    #[must_use]
    pub fn navigation(&self) -> &NavigationController {
        &self.navigation
    }

    #[must_use]
    pub fn attempt(&self) -> &QuizAttempt {
        &self.attempt
    }

    #[must_use]
    pub fn learner(&self) -> &str {
        &self.learner
    }

    #[must_use]
    pub fn current_module(&self) -> &Module {
        // The controller is built from this catalog and only stores positions inside
        // it; the catalog is never empty, so the fallback is unreachable.
        self.catalog
            .get(self.navigation.position())
            .unwrap_or_else(|| self.catalog.first())
    }

    #[must_use]
    pub fn current_view(&self) -> View {
        self.navigation.current_view()
    }

    //
    // ─── NAVIGATION ────────────────────────────────────────────────────────────
    //

    /// # Errors
    ///
    /// Returns `AcademyError::Navigation` if `id` is not in the curriculum.
    pub fn select_module(&mut self, id: &ModuleId) -> Result<Transition, AcademyError> {
        let transition = self.navigation.select_module(id)?;
        Ok(self.settle(transition))
    }

    pub fn select_view(&mut self, view: View) -> Transition {
        let transition = self.navigation.select_view(view, &self.progress);
        self.settle(transition)
    }

    pub fn advance(&mut self) -> Transition {
        let transition = self.navigation.advance(&self.progress);
        self.settle(transition)
    }

    pub fn retreat(&mut self) -> Transition {
        let transition = self.navigation.retreat();
        self.settle(transition)
    }

    pub fn restart(&mut self) -> Transition {
        let transition = self.navigation.restart();
        self.settle(transition)
    }

    pub fn take_scroll_reset(&mut self) -> bool {
        self.navigation.take_scroll_reset()
    }

    #[must_use]
    pub fn ticket(&self) -> ViewTicket {
        self.navigation.ticket()
    }

    #[must_use]
    pub fn is_current(&self, ticket: &ViewTicket) -> bool {
        self.navigation.is_current(ticket)
    }

    fn settle(&mut self, transition: Transition) -> Transition {
        let left_module = self.attempt.module_id() != self.navigation.current_module();
        if transition.is_moved() && (left_module || self.current_view() != View::Curriculum) {
            self.attempt = QuizAttempt::new(self.current_module());
        }
        transition
    }

    //
    // ─── QUIZ ──────────────────────────────────────────────────────────────────
    //

    /// # Errors
    ///
    /// Returns `AcademyError::Quiz` for invalid indices or a submitted attempt.
    pub fn select_answer(&mut self, question: usize, option: usize) -> Result<(), AcademyError> {
        Ok(self.attempt.select(question, option)?)
    }

    /// Score the open attempt and record it against the current module.
    ///
    /// # Errors
    ///
    /// Returns `AcademyError::Quiz` if the attempt is incomplete or already
    /// submitted, or `AcademyError::Progress` if the tracker rejects the result.
    pub fn submit_quiz(&mut self) -> Result<QuizOutcome, AcademyError> {
        let score = self.attempt.submit()?;
        let update = self.progress.record_quiz_result(
            self.attempt.module_id(),
            score.correct,
            score.total,
        )?;
        info!(
            module = %self.attempt.module_id(),
            correct = score.correct,
            total = score.total,
            xp_awarded = update.xp_awarded,
            "quiz submitted"
        );
        Ok(QuizOutcome { score, update })
    }

    pub fn retry_quiz(&mut self) {
        self.attempt.retry();
    }

    //
    // ─── GRADUATION ────────────────────────────────────────────────────────────
    //

    /// The learner's certificate, once every module is mastered.
    #[must_use]
    pub fn certificate(&self, clock: &Clock) -> Option<Certificate> {
        self.progress.is_fully_graduated().then(|| Certificate {
            learner: self.learner.clone(),
            issued_on: clock.today(),
            xp: self.progress.xp(),
        })
    }
}
