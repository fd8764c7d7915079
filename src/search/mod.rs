//! Synonym-aware relevance search and autocomplete
//!
//! This module provides:
//! - A static synonym catalog keyed by category name
//! - Four-tier category scoring (direct, synonym, word overlap, none)
//! - Literal item matching over titles and bodies
//! - Ranked category search with bounded previews
//! - Autocomplete suggestions

mod engine;
mod scorer;
mod suggest;
mod synonyms;

pub mod matcher;

pub use engine::{RelevanceExplanation, SearchEngine, PREVIEW_LIMIT, RELEVANCE_THRESHOLD};
pub use scorer::{RelevanceTier, SimilarityScorer};
pub use suggest::{SuggestionGenerator, MAX_SUGGESTIONS};
pub use synonyms::{SynonymCatalog, SynonymEntry, COMMON_TERMS, LAUNCH_SYNONYMS};
