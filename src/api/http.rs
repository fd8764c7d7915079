//! HTTP server setup with Axum

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use super::rest::{categories, search};
use super::state::AppState;
use crate::types::McpResult;

/// Create the Axum router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    // Open CORS: the API is read-only and consumed by browser UIs
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/api/search", get(search::search_prompts))
        .route("/api/suggest", get(search::suggest_queries))
        .route("/api/explain", get(search::explain_relevance))
        .route("/api/categories", get(categories::list_categories))
        .route("/api/categories/:name", get(categories::get_category))
        .route("/api/library/reload", post(categories::reload_library))
        .layer(cors)
        .with_state(state)
}

/// Bind `addr` and serve until Ctrl+C
pub async fn serve(addr: SocketAddr, state: Arc<AppState>) -> McpResult<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "HTTP API listening");

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("shutdown signal received");
        })
        .await?;
    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::PromptLibrary;
    use crate::search::SynonymCatalog;
    use axum::body::Body;
    use axum::http::Request;
    use tower::util::ServiceExt;

    #[tokio::test]
    async fn test_health_check() {
        let library = Arc::new(PromptLibrary::from_categories(
            vec![],
            Arc::new(SynonymCatalog::builtin()),
        ));
        let app = create_router(Arc::new(AppState::new(library)));

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
    }
}
