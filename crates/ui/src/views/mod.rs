mod auditor;
mod case_studies;
mod curriculum;
mod diagram;
mod glossary;
mod graduation;
mod library;
mod quiz;
mod sandbox;
mod sidebar;
mod state;

pub use auditor::AuditorView;
pub use case_studies::CaseStudiesView;
pub use curriculum::CurriculumView;
pub use diagram::Diagram;
pub use glossary::GlossaryView;
pub use graduation::GraduationView;
pub use library::LibraryView;
pub use quiz::QuizPanel;
pub use sandbox::SandboxView;
pub use sidebar::Sidebar;
pub use state::{ToolErrorNote, ViewError, ViewState, deliver, navigate};

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
