//! Search output types

use serde::{Deserialize, Serialize};

use super::Item;

/// One category in a ranked result set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCategory {
    pub name: String,
    pub items: Vec<Item>,
    pub score: f64,
}

/// Result of a single search call
///
/// `items` is the concatenation of every ranked category's items, in ranked order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    pub categories: Vec<RankedCategory>,
    pub items: Vec<Item>,
}

impl QueryResult {
    /// The "no search" result
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a result from ranked categories, flattening their items
    pub fn from_ranked(categories: Vec<RankedCategory>) -> Self {
        let items = categories
            .iter()
            .flat_map(|c| c.items.iter().cloned())
            .collect();
        Self { categories, items }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
