//! Data types for the prompt search service
//!
//! This module contains the content model and the search output types.

mod category;
mod result;

pub use category::{Category, CategorySummary, Item};
pub use result::{QueryResult, RankedCategory};

/// Result type for MCP operations
pub type McpResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;
