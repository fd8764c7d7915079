//! Explain relevance tool

use std::sync::Arc;

use serde_json::{json, Value};

use super::str_arg;
use crate::library::PromptLibrary;
use crate::protocol::{json_content, McpTool, Tool};
use crate::types::McpResult;

/// Shows which relevance tier each category reached for a query
pub struct ExplainRelevanceTool {
    library: Arc<PromptLibrary>,
}

impl ExplainRelevanceTool {
    pub fn new(library: Arc<PromptLibrary>) -> Self {
        Self { library }
    }
}

impl Tool for ExplainRelevanceTool {
    fn definition(&self) -> McpTool {
        McpTool::new(
            "explain_relevance",
            "Explain why categories do or do not show up for a query: relevance tier, score, \
             literal item matches and whether a preview is shown.",
            json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "The query to explain"
                    }
                },
                "required": ["query"]
            }),
        )
    }

    fn execute(&self, params: Value) -> McpResult<Value> {
        let query = str_arg(&params, "query").ok_or("Missing query")?;
        json_content(&self.library.explain(query))
    }
}
