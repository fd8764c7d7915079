//! Runtime configuration from environment variables
//!
//! - `PROMPT_LIBRARY_PATH`: library file, relative paths resolve against the
//!   current directory (default `prompts.jsonl`)
//! - `PROMPT_SEARCH_HTTP_ADDR`: when set, serve the HTTP API on this address
//!   instead of MCP over stdio
//! - `RUST_LOG`: log filter (default `info,prompt_search=debug`)

use std::env;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use tracing::warn;

pub const DEFAULT_LIBRARY_FILE: &str = "prompts.jsonl";
pub const DEFAULT_LOG_FILTER: &str = "info,prompt_search=debug";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub library_path: PathBuf,
    pub http_addr: Option<SocketAddr>,
}

impl Settings {
    /// Read settings from the process environment
    pub fn from_env() -> Self {
        let current_dir = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::from_vars(
            &current_dir,
            env::var("PROMPT_LIBRARY_PATH").ok(),
            env::var("PROMPT_SEARCH_HTTP_ADDR").ok(),
        )
    }

    /// Resolve settings from raw variable values
    pub fn from_vars(
        current_dir: &Path,
        library_path: Option<String>,
        http_addr: Option<String>,
    ) -> Self {
        let library_path = match library_path.filter(|p| !p.trim().is_empty()) {
            Some(path) if Path::new(&path).is_absolute() => PathBuf::from(path),
            Some(path) => current_dir.join(path),
            None => current_dir.join(DEFAULT_LIBRARY_FILE),
        };

        let http_addr = http_addr
            .filter(|a| !a.trim().is_empty())
            .and_then(|addr| match addr.trim().parse::<SocketAddr>() {
                Ok(parsed) => Some(parsed),
                Err(e) => {
                    warn!(addr = %addr, error = %e, "ignoring invalid PROMPT_SEARCH_HTTP_ADDR");
                    None
                }
            });

        Self {
            library_path,
            http_addr,
        }
    }
}
