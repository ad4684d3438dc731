use academy_core::model::ModuleId;
use academy_core::{ProgressTracker, View};
use services::AcademySession;

/// Fill level and caption of the sidebar XP bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct XpBarVm {
    pub xp: u32,
    pub target: u32,
    pub percent: u8,
}

impl XpBarVm {
    #[must_use]
    pub fn from_progress(progress: &ProgressTracker) -> Self {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let percent = (progress.xp_ratio() * 100.0).round().clamp(0.0, 100.0) as u8;
        Self {
            xp: progress.xp(),
            target: progress.xp_target(),
            percent,
        }
    }

    #[must_use]
    pub fn label(&self) -> String {
        format!("{} XP", self.xp)
    }

    #[must_use]
    pub fn width_style(&self) -> String {
        format!("width: {}%;", self.percent)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleNavItem {
    pub id: ModuleId,
    pub number: usize,
    pub title: String,
    pub completed: bool,
    pub active: bool,
}

#[must_use]
pub fn module_nav_items(session: &AcademySession) -> Vec<ModuleNavItem> {
    let current = session.navigation().current_module();
    let on_curriculum = session.current_view() == View::Curriculum;
    session
        .catalog()
        .modules()
        .iter()
        .enumerate()
        .map(|(index, module)| ModuleNavItem {
            id: module.id().clone(),
            number: index + 1,
            title: module.short_title().to_string(),
            completed: session.progress().is_completed(module.id()),
            active: on_curriculum && module.id() == current,
        })
        .collect()
}

/// A sidebar entry that switches the main view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewLink {
    pub view: View,
    pub label: &'static str,
    pub active: bool,
    pub locked: bool,
}

fn links(session: &AcademySession, views: &[View]) -> Vec<ViewLink> {
    views
        .iter()
        .map(|&view| ViewLink {
            view,
            label: view.label(),
            active: session.current_view() == view,
            locked: view == View::Graduation && !session.progress().is_fully_graduated(),
        })
        .collect()
}

#[must_use]
pub fn resource_links(session: &AcademySession) -> Vec<ViewLink> {
    links(
        session,
        &[View::Library, View::Glossary, View::CaseStudies, View::Graduation],
    )
}

#[must_use]
pub fn tool_links(session: &AcademySession) -> Vec<ViewLink> {
    links(session, &[View::Sandbox, View::Auditor])
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use academy_core::XpPolicy;

    use super::*;

    fn session() -> AcademySession {
        let bundle = content::load_embedded().unwrap();
        AcademySession::new(Arc::new(bundle.catalog), XpPolicy::with_participation(50), "Ada")
    }

    fn pass_current(session: &mut AcademySession) {
        let picks: Vec<usize> = session
            .attempt()
            .quiz()
            .questions()
            .iter()
            .map(|q| q.correct_index())
            .collect();
        for (question, option) in picks.into_iter().enumerate() {
            session.select_answer(question, option).unwrap();
        }
        session.submit_quiz().unwrap();
    }

    #[test]
    fn xp_bar_tracks_the_full_curriculum() {
        let mut session = session();
        assert_eq!(XpBarVm::from_progress(session.progress()).percent, 0);

        pass_current(&mut session);
        let bar = XpBarVm::from_progress(session.progress());
        assert_eq!(bar.target, 3000);
        assert_eq!(bar.percent, 17);
        assert_eq!(bar.label(), "500 XP");
        assert_eq!(bar.width_style(), "width: 17%;");
    }

    #[test]
    fn nav_items_mark_completion_and_position() {
        let mut session = session();
        pass_current(&mut session);
        session.advance();

        let items = module_nav_items(&session);
        assert_eq!(items.len(), 6);
        assert!(items[0].completed && !items[0].active);
        assert!(!items[1].completed && items[1].active);
        assert_eq!(items[1].number, 2);
        assert_eq!(items[1].title, "Module 2");

        session.select_view(View::Glossary);
        assert!(module_nav_items(&session).iter().all(|item| !item.active));
    }

    #[test]
    fn graduation_link_is_locked_until_graduated() {
        let session = session();
        let graduation = resource_links(&session)
            .into_iter()
            .find(|link| link.view == View::Graduation)
            .unwrap();
        assert!(graduation.locked);
        assert!(tool_links(&session).iter().all(|link| !link.locked));
    }
}
