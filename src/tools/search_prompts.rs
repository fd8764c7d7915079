//! Search prompts tool

use std::sync::Arc;

use serde_json::{json, Value};

use super::str_arg;
use crate::library::PromptLibrary;
use crate::protocol::{json_content, McpTool, Tool};
use crate::types::McpResult;

/// Ranked, synonym-aware search over the prompt library
pub struct SearchPromptsTool {
    library: Arc<PromptLibrary>,
}

impl SearchPromptsTool {
    pub fn new(library: Arc<PromptLibrary>) -> Self {
        Self { library }
    }
}

impl Tool for SearchPromptsTool {
    fn definition(&self) -> McpTool {
        McpTool::new(
            "search_prompts",
            "Search prompt templates by free text. Categories are ranked by name and synonym relevance; \
             items are matched literally in their title or body.",
            json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Free-text query, e.g. 'gym' or 'cold email'"
                    },
                    "category": {
                        "type": "string",
                        "description": "Restrict the search to this category name"
                    }
                },
                "required": ["query"]
            }),
        )
    }

    fn execute(&self, params: Value) -> McpResult<Value> {
        let query = str_arg(&params, "query").unwrap_or("");
        let category = str_arg(&params, "category");

        let result = self.library.search(query, category);
        json_content(&result)
    }
}
