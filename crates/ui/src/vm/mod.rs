mod certificate_vm;
mod glossary_vm;
mod library_vm;
mod markdown_vm;
mod media_vm;
mod module_vm;
mod quiz_vm;
mod sidebar_vm;

pub use certificate_vm::CertificateVm;
pub use glossary_vm::filter_glossary;
pub use library_vm::{TemplateSegment, prompt_sections, template_segments, toolkit_sections};
pub use markdown_vm::{markdown_to_html, sanitize_html};
pub use media_vm::{image_data_url, swatch_style};
pub use module_vm::{GateVm, ModuleHeaderVm, gate, lesson_heading, module_header};
pub use quiz_vm::{QuizResultVm, option_class, quiz_result, quiz_subtitle};
pub use sidebar_vm::{ModuleNavItem, ViewLink, XpBarVm, module_nav_items, resource_links, tool_links};
