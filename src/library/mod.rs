//! Prompt library - content holder and search facade
//!
//! Owns the category collection loaded from disk and runs every search and
//! suggestion against a read-locked snapshot of it.

mod error;
mod loader;
mod query;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::info;

pub use error::{LibraryError, LibraryResult};
pub use loader::{load_categories, normalize, parse_jsonl, read_categories};

use crate::search::{
    RelevanceExplanation, SearchEngine, SuggestionGenerator, SynonymCatalog,
};
use crate::types::{Category, CategorySummary, QueryResult};

/// Category collection plus the engines that search it
pub struct PromptLibrary {
    pub(crate) file_path: Option<PathBuf>,
    pub(crate) categories: RwLock<Vec<Category>>,
    pub(crate) catalog: Arc<SynonymCatalog>,
    pub(crate) engine: SearchEngine,
    pub(crate) suggester: SuggestionGenerator,
}

impl PromptLibrary {
    /// Open a library file with a given catalog
    pub fn open(path: impl Into<PathBuf>, catalog: Arc<SynonymCatalog>) -> LibraryResult<Self> {
        let path = path.into();
        let categories = load_categories(&path)?;
        info!(path = %path.display(), categories = categories.len(), "prompt library opened");

        let mut library = Self::from_categories(categories, catalog);
        library.file_path = Some(path);
        Ok(library)
    }

    /// Build an in-memory library with no backing file
    pub fn from_categories(categories: Vec<Category>, catalog: Arc<SynonymCatalog>) -> Self {
        Self {
            file_path: None,
            categories: RwLock::new(normalize(categories)),
            engine: SearchEngine::new(catalog.clone()),
            suggester: SuggestionGenerator::new(catalog.clone()),
            catalog,
        }
    }

    /// Re-read the backing file, replacing the category collection
    ///
    /// Results already handed out are unaffected. On error the current
    /// collection is kept, including when the file has gone missing.
    pub fn reload(&self) -> LibraryResult<usize> {
        let path = self.file_path.as_ref().ok_or(LibraryError::NoBackingFile)?;
        let categories = read_categories(path)?;
        let count = categories.len();
        *self.categories.write() = categories;
        info!(path = %path.display(), categories = count, "prompt library reloaded");
        Ok(count)
    }

    /// Replace the category collection in memory
    pub fn replace(&self, categories: Vec<Category>) {
        *self.categories.write() = normalize(categories);
    }

    /// Snapshot of all categories
    pub fn categories(&self) -> Vec<Category> {
        self.categories.read().clone()
    }

    /// Single category by exact name
    pub fn category(&self, name: &str) -> Option<Category> {
        self.categories.read().iter().find(|c| c.name == name).cloned()
    }

    pub fn catalog(&self) -> &Arc<SynonymCatalog> {
        &self.catalog
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn len(&self) -> usize {
        self.categories.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.read().is_empty()
    }
}

// Query operations live in query.rs
impl PromptLibrary {
    pub fn search(&self, query: &str, selected: Option<&str>) -> QueryResult {
        query::search(self, query, selected)
    }

    pub fn suggest(&self, partial: &str) -> Vec<String> {
        query::suggest(self, partial)
    }

    pub fn explain(&self, query: &str) -> Vec<RelevanceExplanation> {
        query::explain(self, query)
    }

    pub fn summaries(&self) -> Vec<CategorySummary> {
        query::summaries(self)
    }
}
