//! Query operations for the prompt library

use crate::search::RelevanceExplanation;
use crate::types::{CategorySummary, QueryResult};

use super::PromptLibrary;

/// Ranked search over the current categories
pub fn search(library: &PromptLibrary, query: &str, selected: Option<&str>) -> QueryResult {
    let categories = library.categories.read();
    library.engine.search(query, &categories, selected)
}

/// Autocomplete for a partial query; independent of the loaded content
pub fn suggest(library: &PromptLibrary, partial: &str) -> Vec<String> {
    library.suggester.suggest(partial)
}

/// Per-category relevance breakdown for a query
pub fn explain(library: &PromptLibrary, query: &str) -> Vec<RelevanceExplanation> {
    let categories = library.categories.read();
    library.engine.explain(query, &categories)
}

/// Name, item count and synonym count for every category
pub fn summaries(library: &PromptLibrary) -> Vec<CategorySummary> {
    library
        .categories
        .read()
        .iter()
        .map(|c| CategorySummary {
            name: c.name.clone(),
            item_count: c.items.len(),
            synonym_count: library.catalog.lookup(&c.name).len(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::search::SynonymCatalog;
    use crate::types::{Category, Item};

    use super::*;

    fn library() -> PromptLibrary {
        PromptLibrary::from_categories(
            vec![
                Category::with_items(
                    "Fitness",
                    vec![Item::new("Morning Routine", "30 min workout and stretching")],
                ),
                Category::new("Astrology"),
            ],
            Arc::new(SynonymCatalog::builtin()),
        )
    }

    #[test]
    fn test_search_through_library() {
        let result = library().search("gym", None);
        assert_eq!(result.categories.len(), 1);
        assert_eq!(result.categories[0].score, 0.8);
    }

    #[test]
    fn test_summaries() {
        let summaries = library().summaries();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].item_count, 1);
        assert!(summaries[0].synonym_count > 0);
        assert_eq!(summaries[1].synonym_count, 0);
    }

    #[test]
    fn test_replace_does_not_touch_earlier_results() {
        let library = library();
        let before = library.search("workout", None);
        library.replace(vec![]);

        assert_eq!(before.items.len(), 1);
        assert!(library.search("workout", None).is_empty());
    }

    #[test]
    fn test_reload_without_file() {
        let err = library().reload().unwrap_err();
        assert!(matches!(err, crate::library::LibraryError::NoBackingFile));
    }

    #[test]
    fn test_reload_after_file_removed_keeps_categories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prompts.jsonl");
        std::fs::write(&path, "{\"name\":\"Fitness\"}\n").unwrap();

        let library = PromptLibrary::open(&path, Arc::new(SynonymCatalog::builtin())).unwrap();
        std::fs::remove_file(&path).unwrap();

        let err = library.reload().unwrap_err();
        assert!(matches!(err, crate::library::LibraryError::Io { .. }));
        assert_eq!(library.len(), 1);
    }
}
