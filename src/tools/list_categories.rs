//! List categories tool

use std::sync::Arc;

use serde_json::{json, Value};

use crate::library::PromptLibrary;
use crate::protocol::{json_content, McpTool, Tool};
use crate::types::McpResult;

pub struct ListCategoriesTool {
    library: Arc<PromptLibrary>,
}

impl ListCategoriesTool {
    pub fn new(library: Arc<PromptLibrary>) -> Self {
        Self { library }
    }
}

impl Tool for ListCategoriesTool {
    fn definition(&self) -> McpTool {
        McpTool::new(
            "list_categories",
            "List prompt categories with their item counts and number of curated synonyms.",
            json!({
                "type": "object",
                "properties": {}
            }),
        )
    }

    fn execute(&self, _params: Value) -> McpResult<Value> {
        json_content(&self.library.summaries())
    }
}
