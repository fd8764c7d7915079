//! HTTP API for the prompt library
//!
//! Exposes search, suggestions and category listings as JSON over axum.

pub mod http;
pub mod rest;
pub mod state;

pub use http::{create_router, serve};
pub use state::AppState;
