//! Prompt Search - Binary Entry Point
//!
//! Serves MCP over stdio, or the HTTP API when `PROMPT_SEARCH_HTTP_ADDR` is set.

use std::sync::Arc;

use prompt_search::api::{self, AppState};
use prompt_search::config::Settings;
use prompt_search::library::PromptLibrary;
use prompt_search::protocol::ServerInfo;
use prompt_search::search::SynonymCatalog;
use prompt_search::server::McpServer;
use prompt_search::tools::register_all_tools;
use prompt_search::types::McpResult;
use prompt_search::utils::init_telemetry;

fn main() -> McpResult<()> {
    init_telemetry();

    let settings = Settings::from_env();
    let catalog = Arc::new(SynonymCatalog::builtin());
    let library = Arc::new(PromptLibrary::open(&settings.library_path, catalog)?);

    if let Some(addr) = settings.http_addr {
        let runtime = tokio::runtime::Runtime::new()?;
        return runtime.block_on(api::serve(addr, Arc::new(AppState::new(library))));
    }

    let mut server = McpServer::with_info(ServerInfo::default());
    register_all_tools(&mut server, library);

    server.run()
}
