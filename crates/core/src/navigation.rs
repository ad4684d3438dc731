//! Which module and which view the learner is looking at, and the gating rules
//! for moving between them.

use std::fmt;

use thiserror::Error;
use tracing::debug;

use crate::catalog::CurriculumCatalog;
use crate::model::ModuleId;
use crate::progress::ProgressTracker;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NavigationError {
    #[error("module `{0}` is not in the curriculum")]
    UnknownModule(ModuleId),
}

//
// ─── VIEWS ─────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Curriculum,
    /// Prompt library and toolkit.
    Library,
    Glossary,
    CaseStudies,
    Graduation,
    /// Image manifestor and vibe generator.
    Sandbox,
    /// Prompt auditor.
    Auditor,
}

impl View {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            View::Curriculum => "Curriculum",
            View::Library => "Prompt Library",
            View::Glossary => "Glossary",
            View::CaseStudies => "Case Studies",
            View::Graduation => "Graduation",
            View::Sandbox => "Vibe Sandbox",
            View::Auditor => "Prompt Auditor",
        }
    }

    /// Auxiliary views backed by the generative service.
    #[must_use]
    pub fn is_tool(self) -> bool {
        matches!(self, View::Sandbox | View::Auditor)
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

//
// ─── STATE & TRANSITIONS ───────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    pub module: ModuleId,
    pub view: View,
}

/// Why a well-formed navigation request was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockReason {
    /// The current module's quiz has not been mastered.
    ModuleIncomplete,
    /// Last module is done but earlier modules are not.
    CurriculumIncomplete,
    /// Already at the first module.
    NoPreviousModule,
    /// Graduation is locked until every module is complete.
    NotGraduated,
}

impl BlockReason {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            BlockReason::ModuleIncomplete => "Pass the Vibe Check to unlock the next module.",
            BlockReason::CurriculumIncomplete => {
                "Complete every module to claim your certificate."
            }
            BlockReason::NoPreviousModule => "This is the first module.",
            BlockReason::NotGraduated => "Graduation unlocks after every module is mastered.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Moved(NavigationState),
    Blocked(BlockReason),
}

impl Transition {
    #[must_use]
    pub fn is_moved(&self) -> bool {
        matches!(self, Transition::Moved(_))
    }

    #[must_use]
    pub fn blocked_reason(&self) -> Option<BlockReason> {
        match self {
            Transition::Blocked(reason) => Some(*reason),
            Transition::Moved(_) => None,
        }
    }
}

/// Identifies the navigation state an async request was started from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewTicket {
    view: View,
    epoch: u64,
}

impl ViewTicket {
    #[must_use]
    pub fn view(&self) -> View {
        self.view
    }
}

//
// ─── CONTROLLER ────────────────────────────────────────────────────────────────
//

/// Explicit state machine over `(current module, current view)`.
///
/// Free navigation (`select_module`, `select_view`, `retreat`) is always allowed;
/// only the linear `advance` path is gated on completion.
#[derive(Debug, Clone)]
pub struct NavigationController {
    order: Vec<ModuleId>,
    index: usize,
    view: View,
    epoch: u64,
    scroll_reset: bool,
}

impl NavigationController {
    /// Starts at the first module in the curriculum view.
    #[must_use]
    pub fn new(catalog: &CurriculumCatalog) -> Self {
        Self {
            order: catalog.ids(),
            index: 0,
            view: View::Curriculum,
            epoch: 0,
            scroll_reset: false,
        }
    }

    #[must_use]
    pub fn state(&self) -> NavigationState {
        NavigationState {
            module: self.current_module().clone(),
            view: self.view,
        }
    }

    #[must_use]
    pub fn current_module(&self) -> &ModuleId {
        &self.order[self.index]
    }

    #[must_use]
    pub fn current_view(&self) -> View {
        self.view
    }

    /// Zero-based position of the current module.
    #[must_use]
    pub fn position(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.index + 1 < self.order.len()
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.index > 0
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        !self.has_next()
    }

    /// Number of applied transitions so far.
    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Jump to any module; revisiting content never requires completion.
    ///
    /// # Errors
    ///
    /// Returns `NavigationError::UnknownModule` if `id` is not in the curriculum.
    pub fn select_module(&mut self, id: &ModuleId) -> Result<Transition, NavigationError> {
        let index = self
            .order
            .iter()
            .position(|candidate| candidate == id)
            .ok_or_else(|| NavigationError::UnknownModule(id.clone()))?;
        Ok(self.apply(index, View::Curriculum))
    }

    /// Switch view, keeping the current module. Graduation stays locked until every
    /// module is complete.
    pub fn select_view(&mut self, view: View, progress: &ProgressTracker) -> Transition {
        if view == View::Graduation && !progress.is_fully_graduated() {
            return self.block(BlockReason::NotGraduated);
        }
        self.apply(self.index, view)
    }

    /// Move forward along the curriculum, or into graduation from the last module.
    pub fn advance(&mut self, progress: &ProgressTracker) -> Transition {
        if !progress.is_completed(self.current_module()) {
            return self.block(BlockReason::ModuleIncomplete);
        }
        if self.has_next() {
            return self.apply(self.index + 1, View::Curriculum);
        }
        if progress.is_fully_graduated() {
            return self.apply(self.index, View::Graduation);
        }
        self.block(BlockReason::CurriculumIncomplete)
    }

    /// Move back one module; no completion requirement.
    pub fn retreat(&mut self) -> Transition {
        if !self.has_previous() {
            return self.block(BlockReason::NoPreviousModule);
        }
        self.apply(self.index - 1, View::Curriculum)
    }

    /// Back to the first module's curriculum page.
    pub fn restart(&mut self) -> Transition {
        self.apply(0, View::Curriculum)
    }

    /// One-shot: true once after each applied transition.
    pub fn take_scroll_reset(&mut self) -> bool {
        std::mem::take(&mut self.scroll_reset)
    }

    #[must_use]
    pub fn ticket(&self) -> ViewTicket {
        ViewTicket {
            view: self.view,
            epoch: self.epoch,
        }
    }

    /// True while no transition has happened since `ticket` was issued.
    #[must_use]
    pub fn is_current(&self, ticket: &ViewTicket) -> bool {
        ticket.epoch == self.epoch && ticket.view == self.view
    }

    fn apply(&mut self, index: usize, view: View) -> Transition {
        self.index = index;
        self.view = view;
        self.epoch += 1;
        self.scroll_reset = true;
        debug!(module = %self.current_module(), view = %view, epoch = self.epoch, "navigated");
        Transition::Moved(self.state())
    }

    fn block(&self, reason: BlockReason) -> Transition {
        debug!(module = %self.current_module(), view = %self.view, ?reason, "navigation blocked");
        Transition::Blocked(reason)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_support::{catalog, id};
    use crate::progress::XpPolicy;

    fn setup(ids: &[&str]) -> (NavigationController, ProgressTracker) {
        let catalog = catalog(ids);
        (
            NavigationController::new(&catalog),
            ProgressTracker::new(&catalog, XpPolicy::default()),
        )
    }

    #[test]
    fn starts_at_first_module_in_curriculum() {
        let (nav, _) = setup(&["intro", "workspace"]);
        assert_eq!(
            nav.state(),
            NavigationState {
                module: id("intro"),
                view: View::Curriculum
            }
        );
        assert_eq!(nav.epoch(), 0);
    }

    #[test]
    fn advance_is_blocked_until_module_completed() {
        let (mut nav, mut progress) = setup(&["intro", "workspace"]);
        let before = nav.state();

        let blocked = nav.advance(&progress);
        assert_eq!(blocked, Transition::Blocked(BlockReason::ModuleIncomplete));
        assert_eq!(nav.state(), before);
        assert_eq!(nav.epoch(), 0);

        progress.record_quiz_result(&id("intro"), 1, 1).unwrap();
        let moved = nav.advance(&progress);
        assert!(moved.is_moved());
        assert_eq!(nav.current_module(), &id("workspace"));
        assert_eq!(nav.current_view(), View::Curriculum);
    }

    #[test]
    fn advance_from_last_module_enters_graduation_only_when_all_complete() {
        let (mut nav, mut progress) = setup(&["intro", "workspace"]);
        nav.select_module(&id("workspace")).unwrap();
        progress.record_quiz_result(&id("workspace"), 1, 1).unwrap();

        assert_eq!(
            nav.advance(&progress),
            Transition::Blocked(BlockReason::CurriculumIncomplete)
        );
        assert_eq!(nav.current_view(), View::Curriculum);

        progress.record_quiz_result(&id("intro"), 1, 1).unwrap();
        assert!(nav.advance(&progress).is_moved());
        assert_eq!(
            nav.state(),
            NavigationState {
                module: id("workspace"),
                view: View::Graduation
            }
        );
    }

    #[test]
    fn retreat_then_advance_on_first_module_changes_nothing() {
        let (mut nav, progress) = setup(&["intro", "workspace"]);
        let before = nav.state();

        assert_eq!(nav.retreat(), Transition::Blocked(BlockReason::NoPreviousModule));
        assert!(!nav.advance(&progress).is_moved());
        assert_eq!(nav.state(), before);
        assert!(!nav.take_scroll_reset());
    }

    #[test]
    fn retreat_needs_no_completion() {
        let (mut nav, _) = setup(&["intro", "workspace", "frontend"]);
        nav.select_module(&id("frontend")).unwrap();
        assert!(nav.retreat().is_moved());
        assert_eq!(nav.current_module(), &id("workspace"));
    }

    #[test]
    fn select_module_is_free_even_when_current_incomplete() {
        let (mut nav, _) = setup(&["intro", "workspace"]);
        nav.select_module(&id("workspace")).unwrap();
        let transition = nav.select_module(&id("intro")).unwrap();
        assert_eq!(
            transition,
            Transition::Moved(NavigationState {
                module: id("intro"),
                view: View::Curriculum
            })
        );
    }

    #[test]
    fn select_module_rejects_unknown_id() {
        let (mut nav, _) = setup(&["intro"]);
        assert_eq!(
            nav.select_module(&id("backend")).unwrap_err(),
            NavigationError::UnknownModule(id("backend"))
        );
    }

    #[test]
    fn select_module_resets_view_to_curriculum() {
        let (mut nav, progress) = setup(&["intro", "workspace"]);
        nav.select_view(View::Glossary, &progress);
        nav.select_module(&id("workspace")).unwrap();
        assert_eq!(nav.current_view(), View::Curriculum);
    }

    #[test]
    fn graduation_view_is_locked_before_graduating() {
        let (mut nav, mut progress) = setup(&["intro"]);
        assert_eq!(
            nav.select_view(View::Graduation, &progress),
            Transition::Blocked(BlockReason::NotGraduated)
        );

        progress.record_quiz_result(&id("intro"), 1, 1).unwrap();
        assert!(nav.select_view(View::Graduation, &progress).is_moved());
    }

    #[test]
    fn resource_and_tool_views_are_always_reachable() {
        let (mut nav, progress) = setup(&["intro", "workspace"]);
        for view in [View::Library, View::Glossary, View::CaseStudies, View::Sandbox, View::Auditor] {
            assert!(nav.select_view(view, &progress).is_moved());
            assert_eq!(nav.current_view(), view);
            assert_eq!(nav.current_module(), &id("intro"));
        }
    }

    #[test]
    fn every_applied_transition_requests_scroll_reset_once() {
        let (mut nav, progress) = setup(&["intro", "workspace"]);
        nav.select_view(View::Library, &progress);
        assert!(nav.take_scroll_reset());
        assert!(!nav.take_scroll_reset());

        nav.select_module(&id("workspace")).unwrap();
        assert!(nav.take_scroll_reset());
        assert_eq!(nav.epoch(), 2);
    }

    #[test]
    fn ticket_goes_stale_after_navigation() {
        let (mut nav, progress) = setup(&["intro", "workspace"]);
        nav.select_view(View::Sandbox, &progress);
        let ticket = nav.ticket();
        assert!(nav.is_current(&ticket));

        nav.select_view(View::Glossary, &progress);
        nav.select_view(View::Sandbox, &progress);
        assert_eq!(nav.current_view(), ticket.view());
        assert!(!nav.is_current(&ticket));
    }

    #[test]
    fn restart_returns_to_first_module() {
        let (mut nav, _) = setup(&["intro", "workspace"]);
        nav.select_module(&id("workspace")).unwrap();
        nav.restart();
        assert_eq!(nav.position(), 0);
        assert_eq!(nav.current_view(), View::Curriculum);
    }
}
