//! Loading categories from disk
//!
//! Two formats are accepted:
//! - `.json`: a single JSON array of categories, rejected as a whole if malformed
//! - anything else: JSONL, one category per line, malformed lines skipped

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use super::error::{LibraryError, LibraryResult};
use crate::types::Category;

/// Load categories from `path`; a missing file is an empty library
pub fn load_categories(path: &Path) -> LibraryResult<Vec<Category>> {
    if !path.exists() {
        warn!(path = %path.display(), "library file not found, starting empty");
        return Ok(Vec::new());
    }

    read_categories(path)
}

/// Read categories from an existing file; a missing file is an error
pub fn read_categories(path: &Path) -> LibraryResult<Vec<Category>> {
    let content = fs::read_to_string(path).map_err(|source| LibraryError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let is_json_array = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let categories = if is_json_array {
        serde_json::from_str::<Vec<Category>>(&content).map_err(|source| LibraryError::Parse {
            path: path.to_path_buf(),
            line: source.line(),
            source,
        })?
    } else {
        parse_jsonl(&content)
    };

    Ok(normalize(categories))
}

/// Parse one category per line, skipping blank and malformed lines
pub fn parse_jsonl(content: &str) -> Vec<Category> {
    let mut categories = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match serde_json::from_str::<Category>(line) {
            Ok(category) => categories.push(category),
            Err(e) => warn!(line = idx + 1, error = %e, "skipping malformed library line"),
        }
    }

    categories
}

/// Drop unnamed categories and repeated names (first one wins)
pub fn normalize(categories: Vec<Category>) -> Vec<Category> {
    let mut seen = HashSet::new();
    let mut kept = Vec::with_capacity(categories.len());

    for category in categories {
        if category.name.trim().is_empty() {
            warn!("skipping category without a name");
            continue;
        }
        if !seen.insert(category.name.clone()) {
            warn!(name = %category.name, "skipping duplicate category");
            continue;
        }
        kept.push(category);
    }

    debug!(count = kept.len(), "library categories loaded");
    kept
}
