//! Literal substring matching over item text

use crate::types::Item;

/// Check if an item's title or body contains an already-lowercased query
pub fn item_matches(item: &Item, query_lower: &str) -> bool {
    item.title.to_lowercase().contains(query_lower) || item.body.to_lowercase().contains(query_lower)
}

/// Items whose title or body contains `query`, case-insensitively, in original order
pub fn matches(query: &str, items: &[Item]) -> Vec<Item> {
    let query_lower = query.to_lowercase();
    items
        .iter()
        .filter(|item| item_matches(item, &query_lower))
        .cloned()
        .collect()
}
