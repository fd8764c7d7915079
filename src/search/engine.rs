//! Category search and ranking
//!
//! Combines tiered category scoring with literal item matching. Categories
//! that are relevant by name or synonym but contain no literal hit still show
//! a short preview of their first items.

use std::sync::Arc;

use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use super::matcher;
use super::scorer::{RelevanceTier, SimilarityScorer};
use super::synonyms::SynonymCatalog;
use crate::types::{Category, Item, QueryResult, RankedCategory};

/// Minimum category score for inclusion without a literal item match
pub const RELEVANCE_THRESHOLD: f64 = 0.3;

/// Items shown for a category included on relevance alone
pub const PREVIEW_LIMIT: usize = 5;

/// Category count above which categories are evaluated in parallel
const PARALLEL_SEARCH_THRESHOLD: usize = 256;

/// Why a category was or was not included for a query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelevanceExplanation {
    pub category: String,
    pub tier: RelevanceTier,
    pub score: f64,
    #[serde(rename = "directMatches")]
    pub direct_matches: usize,
    pub included: bool,
    pub preview: bool,
}

/// Per-category evaluation, before ranking
struct Evaluation {
    tier: RelevanceTier,
    direct: Vec<Item>,
}

impl Evaluation {
    fn score(&self) -> f64 {
        self.tier.weight()
    }

    fn included(&self) -> bool {
        !self.direct.is_empty() || self.score() > RELEVANCE_THRESHOLD
    }

    fn preview(&self) -> bool {
        self.direct.is_empty() && self.score() > RELEVANCE_THRESHOLD
    }
}

/// Stateless search over caller-supplied categories
#[derive(Debug, Clone)]
pub struct SearchEngine {
    scorer: SimilarityScorer,
}

impl SearchEngine {
    pub fn new(catalog: Arc<SynonymCatalog>) -> Self {
        Self {
            scorer: SimilarityScorer::new(catalog),
        }
    }

    pub fn scorer(&self) -> &SimilarityScorer {
        &self.scorer
    }

    /// Search `categories` for `query`, optionally restricted to one category
    ///
    /// An empty or whitespace-only query yields an empty result, as does a
    /// selected category that is not in `categories`. Any other query is
    /// matched as given, surrounding whitespace included.
    pub fn search(
        &self,
        query: &str,
        categories: &[Category],
        selected: Option<&str>,
    ) -> QueryResult {
        if query.trim().is_empty() {
            return QueryResult::empty();
        }

        let result = match selected.filter(|s| !s.is_empty()) {
            Some(name) => self.search_selected(query, categories, name),
            None => self.search_global(query, categories),
        };

        debug!(
            query,
            selected,
            categories = result.categories.len(),
            items = result.items.len(),
            "search complete"
        );

        result
    }

    /// Per-category scoring details for `query`, in input order
    pub fn explain(&self, query: &str, categories: &[Category]) -> Vec<RelevanceExplanation> {
        if query.trim().is_empty() {
            return Vec::new();
        }

        self.evaluate_all(query, categories)
            .into_iter()
            .zip(categories)
            .map(|(eval, category)| RelevanceExplanation {
                category: category.name.clone(),
                tier: eval.tier,
                score: eval.score(),
                direct_matches: eval.direct.len(),
                included: eval.included(),
                preview: eval.preview(),
            })
            .collect()
    }

    fn search_selected(&self, query: &str, categories: &[Category], name: &str) -> QueryResult {
        let Some(category) = categories.iter().find(|c| c.name == name) else {
            debug!(selected = name, "selected category not found");
            return QueryResult::empty();
        };

        let direct = matcher::matches(query, &category.items);
        if direct.is_empty() {
            return QueryResult::empty();
        }

        QueryResult::from_ranked(vec![RankedCategory {
            name: category.name.clone(),
            items: direct,
            score: RelevanceTier::DirectMatch.weight(),
        }])
    }

    fn search_global(&self, query: &str, categories: &[Category]) -> QueryResult {
        let mut ranked: Vec<RankedCategory> = self
            .evaluate_all(query, categories)
            .into_iter()
            .zip(categories)
            .filter(|(eval, _)| eval.included())
            .map(|(eval, category)| {
                let score = eval.score();
                let items = if eval.preview() {
                    category.items.iter().take(PREVIEW_LIMIT).cloned().collect()
                } else {
                    eval.direct
                };
                RankedCategory {
                    name: category.name.clone(),
                    items,
                    score,
                }
            })
            .collect();

        // sort_by is stable: equal scores keep input order
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));

        QueryResult::from_ranked(ranked)
    }

    /// Evaluate every category, preserving input order
    fn evaluate_all(&self, query: &str, categories: &[Category]) -> Vec<Evaluation> {
        let evaluate = |category: &Category| Evaluation {
            tier: self.scorer.classify(query, &category.name),
            direct: matcher::matches(query, &category.items),
        };

        if categories.len() > PARALLEL_SEARCH_THRESHOLD {
            categories.par_iter().map(evaluate).collect()
        } else {
            categories.iter().map(evaluate).collect()
        }
    }
}
