use academy_core::model::GlossaryItem;

/// Case-insensitive match on term or definition; a blank query keeps everything.
#[must_use]
pub fn filter_glossary<'a>(items: &'a [GlossaryItem], query: &str) -> Vec<&'a GlossaryItem> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return items.iter().collect();
    }
    items
        .iter()
        .filter(|item| {
            item.term().to_lowercase().contains(&needle)
                || item.definition().to_lowercase().contains(&needle)
        })
        .collect()
}
