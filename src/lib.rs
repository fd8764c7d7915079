//! Prompt Search
//!
//! Synonym-aware relevance search and autocomplete over categorized prompt
//! templates, served over MCP (stdio) or HTTP.
//!
//! # Features
//!
//! - **Tiered relevance**: categories score 1.0 / 0.8 / 0.6 / 0 for direct,
//!   synonym, word-overlap or no match, so "gym" finds "Fitness"
//! - **Literal item matching**: titles and bodies are matched as substrings
//! - **Bounded previews**: relevant categories without literal hits still
//!   show their first items
//! - **Autocomplete**: up to 5 deduplicated suggestions per keystroke
//!
//! # Modules
//!
//! - `types`: Category, Item and search result types
//! - `search`: synonym catalog, scorer, matcher, engine and suggestions
//! - `library`: category collection loaded from disk, search facade
//! - `config`: environment settings
//! - `protocol`: MCP and JSON-RPC protocol types
//! - `server`: MCP server implementation
//! - `tools`: MCP tool implementations
//! - `api`: HTTP endpoints
//! - `utils`: logging setup
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use prompt_search::{Category, Item, SearchEngine, SynonymCatalog};
//!
//! let engine = SearchEngine::new(Arc::new(SynonymCatalog::builtin()));
//! let categories = vec![Category::with_items(
//!     "Fitness",
//!     vec![Item::new("Morning Routine", "30 min workout and stretching")],
//! )];
//!
//! let result = engine.search("gym", &categories, None);
//! assert_eq!(result.categories[0].name, "Fitness");
//! assert_eq!(result.categories[0].score, 0.8);
//! ```

pub mod api;
pub mod config;
pub mod library;
pub mod protocol;
pub mod search;
pub mod server;
pub mod tools;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use library::{LibraryError, PromptLibrary};
pub use protocol::{McpTool, ServerInfo, Tool};
pub use search::{
    RelevanceTier, SearchEngine, SimilarityScorer, SuggestionGenerator, SynonymCatalog,
};
pub use server::McpServer;
pub use types::{Category, CategorySummary, Item, McpResult, QueryResult, RankedCategory};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
