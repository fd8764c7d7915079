//! Autocomplete suggestions drawn from the synonym catalog

use std::sync::Arc;

use super::synonyms::SynonymCatalog;

/// Maximum number of suggestions returned
pub const MAX_SUGGESTIONS: usize = 5;

/// Produces short, deduplicated autocomplete lists
#[derive(Debug, Clone)]
pub struct SuggestionGenerator {
    catalog: Arc<SynonymCatalog>,
}

impl SuggestionGenerator {
    pub fn new(catalog: Arc<SynonymCatalog>) -> Self {
        Self { catalog }
    }

    /// Suggestions for a partial query
    ///
    /// Catalog hits come first as `"<synonym> (<category>)"`, at most one per
    /// category, followed by matching common terms.
    pub fn suggest(&self, partial: &str) -> Vec<String> {
        if partial.trim().is_empty() {
            return Vec::new();
        }
        let partial = partial.to_lowercase();

        let mut suggestions: Vec<String> = Vec::with_capacity(MAX_SUGGESTIONS);

        for entry in self.catalog.entries() {
            let hit = entry
                .folded()
                .iter()
                .position(|s| s.contains(&partial))
                .map(|pos| format!("{} ({})", entry.synonyms[pos], entry.category));

            if let Some(suggestion) = hit {
                if !suggestions.contains(&suggestion) {
                    suggestions.push(suggestion);
                }
            }
        }

        for term in self.catalog.common_terms() {
            if term.to_lowercase().contains(&partial) && !suggestions.contains(term) {
                suggestions.push(term.clone());
            }
        }

        suggestions.truncate(MAX_SUGGESTIONS);
        suggestions
    }
}
