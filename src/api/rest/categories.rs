//! Category endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;
use tracing::error;

use super::{ApiError, ApiResponse};
use crate::api::state::AppState;
use crate::library::LibraryError;

/// GET /api/categories - Category summaries in library order
pub async fn list_categories(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let summaries = state.library.summaries();
    let total = summaries.len();
    Json(ApiResponse::with_total(summaries, total))
}

/// GET /api/categories/:name - Single category with its items
pub async fn get_category(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> impl IntoResponse {
    // `Path` has already percent-decoded the segment
    match state.library.category(&name) {
        Some(category) => (StatusCode::OK, Json(ApiResponse::new(category))).into_response(),
        None => {
            let error = ApiError::not_found(format!("Category '{}' not found", name));
            (StatusCode::NOT_FOUND, Json(error)).into_response()
        }
    }
}

/// POST /api/library/reload - Re-read the backing library file
pub async fn reload_library(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.library.reload() {
        Ok(count) => (
            StatusCode::OK,
            Json(ApiResponse::new(json!({ "categories": count }))),
        )
            .into_response(),
        Err(LibraryError::NoBackingFile) => {
            let error = ApiError::bad_request("Library has no backing file to reload");
            (StatusCode::BAD_REQUEST, Json(error)).into_response()
        }
        Err(e) => {
            error!(error = %e, "library reload failed");
            let error = ApiError::internal(e.to_string());
            (StatusCode::INTERNAL_SERVER_ERROR, Json(error)).into_response()
        }
    }
}
