//! MCP tools exposing the prompt library
//!
//! - `search_prompts`: ranked search, optionally within one category
//! - `suggest_queries`: autocomplete for a partial query
//! - `list_categories`: category names with item and synonym counts
//! - `explain_relevance`: per-category scoring breakdown

mod explain_relevance;
mod list_categories;
mod search_prompts;
mod suggest_queries;

use std::io::{BufRead, Write};
use std::sync::Arc;

use serde_json::Value;

use crate::library::PromptLibrary;
use crate::server::McpServer;

pub use explain_relevance::ExplainRelevanceTool;
pub use list_categories::ListCategoriesTool;
pub use search_prompts::SearchPromptsTool;
pub use suggest_queries::SuggestQueriesTool;

/// Register every tool with the MCP server
pub fn register_all_tools<R: BufRead, W: Write>(
    server: &mut McpServer<R, W>,
    library: Arc<PromptLibrary>,
) {
    server.register_tool(Box::new(SearchPromptsTool::new(library.clone())));
    server.register_tool(Box::new(SuggestQueriesTool::new(library.clone())));
    server.register_tool(Box::new(ListCategoriesTool::new(library.clone())));
    server.register_tool(Box::new(ExplainRelevanceTool::new(library)));
}

/// Optional string argument; absent, null and non-string all read as `None`
pub(crate) fn str_arg<'a>(params: &'a Value, key: &str) -> Option<&'a str> {
    params.get(key).and_then(|v| v.as_str())
}
