//! Tiered category relevance scoring
//!
//! A query is scored against a category name in four coarse tiers. The first
//! tier that matches wins; tiers never add up.

use std::sync::Arc;

use serde::Serialize;

use super::synonyms::SynonymCatalog;

/// Relevance of a query to a category name, strongest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RelevanceTier {
    NoMatch,
    WordOverlap,
    SynonymContainment,
    DirectMatch,
}

impl RelevanceTier {
    /// Numeric weight used for ranking
    pub fn weight(self) -> f64 {
        match self {
            RelevanceTier::DirectMatch => 1.0,
            RelevanceTier::SynonymContainment => 0.8,
            RelevanceTier::WordOverlap => 0.6,
            RelevanceTier::NoMatch => 0.0,
        }
    }
}

/// Scores queries against category names using a synonym catalog
#[derive(Debug, Clone)]
pub struct SimilarityScorer {
    catalog: Arc<SynonymCatalog>,
}

impl SimilarityScorer {
    pub fn new(catalog: Arc<SynonymCatalog>) -> Self {
        Self { catalog }
    }

    /// Score in {0.0, 0.6, 0.8, 1.0}
    pub fn score(&self, query: &str, category_name: &str) -> f64 {
        self.classify(query, category_name).weight()
    }

    /// Tier of `query` against `category_name`
    pub fn classify(&self, query: &str, category_name: &str) -> RelevanceTier {
        let query = query.to_lowercase();
        if query.is_empty() {
            return RelevanceTier::NoMatch;
        }

        let name = category_name.to_lowercase();
        if !name.is_empty() && (name.contains(&query) || query.contains(&name)) {
            return RelevanceTier::DirectMatch;
        }

        let synonyms = match self.catalog.entry(category_name) {
            Some(entry) => entry.folded(),
            None => return RelevanceTier::NoMatch,
        };

        if synonyms
            .iter()
            .any(|s| !s.is_empty() && (s.contains(&query) || query.contains(s.as_str())))
        {
            return RelevanceTier::SynonymContainment;
        }

        let query_words: Vec<&str> = query.split_whitespace().collect();
        let overlaps = synonyms.iter().any(|synonym| {
            synonym.split_whitespace().any(|sw| {
                query_words
                    .iter()
                    .any(|qw| sw.contains(qw) || qw.contains(sw))
            })
        });

        if overlaps {
            RelevanceTier::WordOverlap
        } else {
            RelevanceTier::NoMatch
        }
    }

    pub fn catalog(&self) -> &Arc<SynonymCatalog> {
        &self.catalog
    }
}
