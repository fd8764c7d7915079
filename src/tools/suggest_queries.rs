//! Suggest queries tool

use std::sync::Arc;

use serde_json::{json, Value};

use super::str_arg;
use crate::library::PromptLibrary;
use crate::protocol::{json_content, McpTool, Tool};
use crate::types::McpResult;

pub struct SuggestQueriesTool {
    library: Arc<PromptLibrary>,
}

impl SuggestQueriesTool {
    pub fn new(library: Arc<PromptLibrary>) -> Self {
        Self { library }
    }
}

impl Tool for SuggestQueriesTool {
    fn definition(&self) -> McpTool {
        McpTool::new(
            "suggest_queries",
            "Autocomplete a partial query. Returns at most 5 suggestions such as 'gym (Fitness)'.",
            json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "What the user has typed so far"
                    }
                },
                "required": ["query"]
            }),
        )
    }

    fn execute(&self, params: Value) -> McpResult<Value> {
        let partial = str_arg(&params, "query").unwrap_or("");
        json_content(&self.library.suggest(partial))
    }
}
