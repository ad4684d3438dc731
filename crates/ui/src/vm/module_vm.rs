use academy_core::BlockReason;
use academy_core::model::Lesson;
use services::AcademySession;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleHeaderVm {
    pub kicker: String,
    pub title: String,
    pub description: String,
    pub completed: bool,
}

#[must_use]
pub fn module_header(session: &AcademySession) -> ModuleHeaderVm {
    let module = session.current_module();
    ModuleHeaderVm {
        kicker: format!(
            "Module {} of {}",
            session.navigation().position() + 1,
            session.catalog().total_count()
        ),
        title: module.title().to_string(),
        description: module.description().to_string(),
        completed: session.progress().is_completed(module.id()),
    }
}

#[must_use]
pub fn lesson_heading(index: usize, lesson: &Lesson) -> String {
    format!("Lesson {}: {}", index + 1, lesson.title())
}

/// What sits under the quiz: the unlock button or the reason it is missing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateVm {
    Unlocked { label: &'static str },
    Locked { hint: &'static str },
}

/// Mirrors the checks `advance` makes so the button never promises a blocked move.
#[must_use]
pub fn gate(session: &AcademySession) -> GateVm {
    let progress = session.progress();
    let navigation = session.navigation();
    if !progress.is_completed(navigation.current_module()) {
        return GateVm::Locked {
            hint: BlockReason::ModuleIncomplete.message(),
        };
    }
    if navigation.has_next() {
        return GateVm::Unlocked {
            label: "Begin Next Module",
        };
    }
    if progress.is_fully_graduated() {
        GateVm::Unlocked {
            label: "Claim My Certificate",
        }
    } else {
        GateVm::Locked {
            hint: BlockReason::CurriculumIncomplete.message(),
        }
    }
}
