use academy_core::model::{Library, PromptCategory, PromptTemplate, Tool, ToolCategory};

/// Prompts grouped by category in display order; empty categories are skipped.
#[must_use]
pub fn prompt_sections(library: &Library) -> Vec<(PromptCategory, Vec<&PromptTemplate>)> {
    PromptCategory::ALL
        .into_iter()
        .map(|category| (category, library.prompts_in(category)))
        .filter(|(_, prompts)| !prompts.is_empty())
        .collect()
}

#[must_use]
pub fn toolkit_sections(library: &Library) -> Vec<(ToolCategory, Vec<&Tool>)> {
    ToolCategory::ALL
        .into_iter()
        .map(|category| {
            let tools = library
                .toolkit
                .iter()
                .filter(|tool| tool.category() == category)
                .collect::<Vec<_>>();
            (category, tools)
        })
        .filter(|(_, tools)| !tools.is_empty())
        .collect()
}

/// A run of template text; placeholders are drawn as chips.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TemplateSegment {
    pub text: String,
    pub placeholder: bool,
}

#[must_use]
pub fn template_segments(template: &PromptTemplate) -> Vec<TemplateSegment> {
    let names = template.placeholders();
    let mut segments = Vec::new();
    let mut rest = template.template();
    while let Some(start) = rest.find('[') {
        let after = &rest[start + 1..];
        let Some(end) = after.find(']') else {
            break;
        };
        let name = &after[..end];
        if names.contains(&name) {
            if start > 0 {
                segments.push(TemplateSegment {
                    text: rest[..start].to_string(),
                    placeholder: false,
                });
            }
            segments.push(TemplateSegment {
                text: format!("[{name}]"),
                placeholder: true,
            });
        } else {
            segments.push(TemplateSegment {
                text: rest[..start + end + 2].to_string(),
                placeholder: false,
            });
        }
        rest = &after[end + 1..];
    }
    if !rest.is_empty() {
        segments.push(TemplateSegment {
            text: rest.to_string(),
            placeholder: false,
        });
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholders_become_their_own_segments() {
        let template = PromptTemplate::new(
            "t",
            "s",
            "Build a [APP_TYPE] with [lowercase] bits and [COLOR_PALETTE].",
            PromptCategory::Design,
        )
        .unwrap();
        let segments = template_segments(&template);
        let chips: Vec<&str> = segments
            .iter()
            .filter(|segment| segment.placeholder)
            .map(|segment| segment.text.as_str())
            .collect();
        assert_eq!(chips, ["[APP_TYPE]", "[COLOR_PALETTE]"]);

        let joined: String = segments.iter().map(|segment| segment.text.as_str()).collect();
        assert_eq!(joined, template.template());
    }

    #[test]
    fn sections_skip_empty_categories() {
        let library = Library {
            prompts: vec![
                PromptTemplate::new("a", "s", "t", PromptCategory::Logic).unwrap(),
                PromptTemplate::new("b", "s", "t", PromptCategory::Logic).unwrap(),
            ],
            toolkit: vec![Tool::new("Cursor", ToolCategory::Ides, "Editor", None).unwrap()],
            ..Library::default()
        };
        let prompts = prompt_sections(&library);
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0].0, PromptCategory::Logic);
        assert_eq!(prompts[0].1.len(), 2);

        let tools = toolkit_sections(&library);
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0].0, ToolCategory::Ides);
    }
}
