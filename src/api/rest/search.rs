//! Search, suggestion and explanation endpoints

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use super::ApiResponse;
use crate::api::state::AppState;

/// Query parameters for search endpoints
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Free-text query; missing or blank yields an empty result
    #[serde(default)]
    pub q: String,
    /// Restrict to one category
    pub category: Option<String>,
}

/// GET /api/search - Ranked search over the library
///
/// `total` counts the flattened items.
pub async fn search_prompts(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    let result = state.library.search(&params.q, params.category.as_deref());
    let total = result.items.len();
    Json(ApiResponse::with_total(result, total))
}

/// GET /api/suggest - Autocomplete suggestions
pub async fn suggest_queries(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    let suggestions = state.library.suggest(&params.q);
    let total = suggestions.len();
    Json(ApiResponse::with_total(suggestions, total))
}

/// GET /api/explain - Relevance tier for every category
pub async fn explain_relevance(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    let explanations = state.library.explain(&params.q);
    let total = explanations.len();
    Json(ApiResponse::with_total(explanations, total))
}
