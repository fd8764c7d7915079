//! Shared HTTP application state

use std::sync::Arc;

use crate::library::PromptLibrary;

pub struct AppState {
    pub library: Arc<PromptLibrary>,
}

impl AppState {
    pub fn new(library: Arc<PromptLibrary>) -> Self {
        Self { library }
    }
}
