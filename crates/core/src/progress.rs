//! Completed modules and experience points for one learning session.

use std::collections::BTreeSet;

use thiserror::Error;
use tracing::{debug, info};

use crate::catalog::CurriculumCatalog;
use crate::model::ModuleId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProgressError {
    #[error("module `{0}` is not in the curriculum")]
    UnknownModule(ModuleId),

    #[error("score {score} is not valid for a quiz of {total} questions")]
    InvalidScore { score: usize, total: usize },
}

//
// ─── XP POLICY ─────────────────────────────────────────────────────────────────
//

/// How much XP a quiz attempt is worth.
///
/// `mastery_award` is granted once per module on its first perfect score.
/// `participation_award` is granted for every imperfect attempt; zero disables it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XpPolicy {
    pub mastery_award: u32,
    pub participation_award: u32,
}

impl XpPolicy {
    pub const DEFAULT_MASTERY_AWARD: u32 = 500;
    pub const DEFAULT_PARTICIPATION_AWARD: u32 = 50;

    /// Nothing is awarded until the module is mastered.
    #[must_use]
    pub fn mastery_only() -> Self {
        Self {
            mastery_award: Self::DEFAULT_MASTERY_AWARD,
            participation_award: 0,
        }
    }

    /// Imperfect attempts earn `participation_award`.
    #[must_use]
    pub fn with_participation(participation_award: u32) -> Self {
        Self {
            participation_award,
            ..Self::mastery_only()
        }
    }
}

impl Default for XpPolicy {
    fn default() -> Self {
        Self::mastery_only()
    }
}

//
// ─── STATE ─────────────────────────────────────────────────────────────────────
//

/// Snapshot of learner progress. Completed ids only grow and XP never decreases.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProgressState {
    completed: BTreeSet<ModuleId>,
    xp: u32,
}

impl ProgressState {
    #[must_use]
    pub fn completed(&self) -> &BTreeSet<ModuleId> {
        &self.completed
    }

    #[must_use]
    pub fn xp(&self) -> u32 {
        self.xp
    }
}

/// Result of recording one quiz attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressUpdate {
    pub xp_awarded: u32,
    pub newly_completed: bool,
    pub state: ProgressState,
}

//
// ─── TRACKER ───────────────────────────────────────────────────────────────────
//

/// Owns the session's `ProgressState` and is its only writer.
#[derive(Debug, Clone)]
pub struct ProgressTracker {
    known: BTreeSet<ModuleId>,
    policy: XpPolicy,
    state: ProgressState,
}

impl ProgressTracker {
    #[must_use]
    pub fn new(catalog: &CurriculumCatalog, policy: XpPolicy) -> Self {
        Self {
            known: catalog.ids().into_iter().collect(),
            policy,
            state: ProgressState::default(),
        }
    }

    #[must_use]
    pub fn policy(&self) -> XpPolicy {
        self.policy
    }

    #[must_use]
    pub fn state(&self) -> &ProgressState {
        &self.state
    }

    /// Records a quiz result for `module_id`.
    ///
    /// A perfect score completes the module and grants the mastery award the first
    /// time only. An imperfect score grants the participation award, if any.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::UnknownModule` for ids outside the catalog and
    /// `ProgressError::InvalidScore` when `total_questions` is zero or smaller than `score`.
    pub fn record_quiz_result(
        &mut self,
        module_id: &ModuleId,
        score: usize,
        total_questions: usize,
    ) -> Result<ProgressUpdate, ProgressError> {
        if !self.known.contains(module_id) {
            return Err(ProgressError::UnknownModule(module_id.clone()));
        }
        if total_questions == 0 || score > total_questions {
            return Err(ProgressError::InvalidScore {
                score,
                total: total_questions,
            });
        }

        let mut newly_completed = false;
        let xp_awarded = if score == total_questions {
            if self.state.completed.insert(module_id.clone()) {
                newly_completed = true;
                self.policy.mastery_award
            } else {
                0
            }
        } else {
            self.policy.participation_award
        };
        self.state.xp = self.state.xp.saturating_add(xp_awarded);

        if newly_completed {
            info!(
                module = %module_id,
                xp = self.state.xp,
                completed = self.state.completed.len(),
                "module mastered"
            );
            if self.is_fully_graduated() {
                info!(xp = self.state.xp, "curriculum complete");
            }
        } else {
            debug!(module = %module_id, score, total_questions, xp_awarded, "quiz attempt recorded");
        }

        Ok(ProgressUpdate {
            xp_awarded,
            newly_completed,
            state: self.state.clone(),
        })
    }

    #[must_use]
    pub fn is_completed(&self, module_id: &ModuleId) -> bool {
        self.state.completed.contains(module_id)
    }

    #[must_use]
    pub fn is_fully_graduated(&self) -> bool {
        self.state.completed.len() == self.known.len()
    }

    #[must_use]
    pub fn xp(&self) -> u32 {
        self.state.xp
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.state.completed.len()
    }

    #[must_use]
    pub fn total_modules(&self) -> usize {
        self.known.len()
    }

    /// XP earned by mastering every module once.
    #[must_use]
    pub fn xp_target(&self) -> u32 {
        let modules = u32::try_from(self.known.len()).unwrap_or(u32::MAX);
        modules.saturating_mul(self.policy.mastery_award)
    }

    /// Fill level of the XP bar, clamped to `[0, 1]`.
    #[must_use]
    pub fn xp_ratio(&self) -> f64 {
        let target = self.xp_target();
        if target == 0 {
            return 0.0;
        }
        (f64::from(self.state.xp) / f64::from(target)).min(1.0)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_support::{catalog, id};

    fn tracker(policy: XpPolicy) -> ProgressTracker {
        ProgressTracker::new(&catalog(&["intro", "workspace"]), policy)
    }

    #[test]
    fn perfect_score_completes_module_and_awards_mastery() {
        let mut tracker = tracker(XpPolicy::mastery_only());
        let update = tracker.record_quiz_result(&id("intro"), 3, 3).unwrap();

        assert!(update.newly_completed);
        assert_eq!(update.xp_awarded, 500);
        assert!(tracker.is_completed(&id("intro")));
        assert_eq!(tracker.xp(), 500);
        assert_eq!(update.state, *tracker.state());
    }

    #[test]
    fn repeat_perfect_score_is_idempotent() {
        for policy in [XpPolicy::mastery_only(), XpPolicy::with_participation(50)] {
            let mut tracker = tracker(policy);
            let once = tracker.record_quiz_result(&id("intro"), 1, 1).unwrap();
            let twice = tracker.record_quiz_result(&id("intro"), 1, 1).unwrap();

            assert_eq!(once.state.completed(), twice.state.completed());
            assert_eq!(twice.state.completed().len(), 1);
            assert!(!twice.newly_completed);
            assert_eq!(twice.xp_awarded, 0);
            assert_eq!(tracker.xp(), 500);
        }
    }

    #[test]
    fn imperfect_score_awards_nothing_under_mastery_only() {
        let mut tracker = tracker(XpPolicy::mastery_only());
        let update = tracker.record_quiz_result(&id("intro"), 2, 3).unwrap();

        assert_eq!(update.xp_awarded, 0);
        assert!(!tracker.is_completed(&id("intro")));
        assert_eq!(tracker.xp(), 0);
    }

    #[test]
    fn imperfect_score_awards_participation_when_enabled() {
        let mut tracker = tracker(XpPolicy::with_participation(50));
        tracker.record_quiz_result(&id("intro"), 0, 3).unwrap();
        tracker.record_quiz_result(&id("intro"), 2, 3).unwrap();

        assert_eq!(tracker.xp(), 100);
        assert!(!tracker.is_completed(&id("intro")));
    }

    #[test]
    fn xp_never_decreases() {
        let mut tracker = tracker(XpPolicy::with_participation(50));
        let mut last = tracker.xp();
        for (score, total) in [(0, 1), (1, 1), (0, 1), (1, 1)] {
            tracker.record_quiz_result(&id("workspace"), score, total).unwrap();
            assert!(tracker.xp() >= last);
            last = tracker.xp();
        }
    }

    #[test]
    fn unknown_module_is_invalid_argument() {
        let mut tracker = tracker(XpPolicy::default());
        let err = tracker.record_quiz_result(&id("backend"), 1, 1).unwrap_err();
        assert_eq!(err, ProgressError::UnknownModule(id("backend")));
        assert_eq!(tracker.xp(), 0);
    }

    #[test]
    fn score_above_total_is_invalid_argument() {
        let mut tracker = tracker(XpPolicy::default());
        let err = tracker.record_quiz_result(&id("intro"), 4, 3).unwrap_err();
        assert_eq!(err, ProgressError::InvalidScore { score: 4, total: 3 });
        assert!(tracker.record_quiz_result(&id("intro"), 0, 0).is_err());
    }

    #[test]
    fn graduation_requires_every_module() {
        let mut tracker = tracker(XpPolicy::default());
        assert!(!tracker.is_fully_graduated());

        tracker.record_quiz_result(&id("intro"), 1, 1).unwrap();
        assert!(!tracker.is_fully_graduated());

        tracker.record_quiz_result(&id("workspace"), 1, 1).unwrap();
        assert!(tracker.is_fully_graduated());
        assert_eq!(tracker.completed_count(), tracker.total_modules());
    }

    #[test]
    fn xp_ratio_is_clamped() {
        let mut tracker = tracker(XpPolicy::with_participation(50));
        assert_eq!(tracker.xp_target(), 1000);
        tracker.record_quiz_result(&id("intro"), 1, 1).unwrap();
        assert!((tracker.xp_ratio() - 0.5).abs() < f64::EPSILON);

        tracker.record_quiz_result(&id("workspace"), 1, 1).unwrap();
        for _ in 0..5 {
            tracker.record_quiz_result(&id("workspace"), 0, 1).unwrap();
        }
        assert!((tracker.xp_ratio() - 1.0).abs() < f64::EPSILON);
    }
}
