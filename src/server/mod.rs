//! MCP server over line-delimited JSON-RPC
//!
//! Reads one request per line and writes one response per line. Runs on
//! stdio in production and on in-memory buffers in tests.

use std::collections::HashMap;
use std::io::{self, BufRead, BufReader, BufWriter, Stdin, Stdout, Write};

use serde::Serialize;
use serde_json::{json, Value};
use tracing::{debug, info, warn};

use crate::protocol::{
    JsonRpcError, JsonRpcRequest, JsonRpcResponse, McpTool, ServerInfo, Tool, PROTOCOL_VERSION,
};
use crate::types::McpResult;

pub struct McpServer<R = BufReader<Stdin>, W = BufWriter<Stdout>> {
    server_info: ServerInfo,
    tools: HashMap<String, Box<dyn Tool>>,
    reader: R,
    writer: W,
}

impl McpServer {
    /// Server on stdin/stdout with default info
    pub fn new() -> Self {
        Self::with_info(ServerInfo::default())
    }

    /// Server on stdin/stdout
    pub fn with_info(info: ServerInfo) -> Self {
        Self::with_io(info, BufReader::new(io::stdin()), BufWriter::new(io::stdout()))
    }
}

impl Default for McpServer {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead, W: Write> McpServer<R, W> {
    /// Server on arbitrary line reader and writer
    pub fn with_io(info: ServerInfo, reader: R, writer: W) -> Self {
        Self {
            server_info: info,
            tools: HashMap::new(),
            reader,
            writer,
        }
    }

    pub fn register_tool(&mut self, tool: Box<dyn Tool>) -> &mut Self {
        let name = tool.name();
        debug!(tool = %name, "registered tool");
        self.tools.insert(name, tool);
        self
    }

    pub fn tool_count(&self) -> usize {
        self.tools.len()
    }

    /// Serve until the reader is exhausted
    pub fn run(&mut self) -> McpResult<()> {
        info!(
            name = %self.server_info.name,
            version = %self.server_info.version,
            tools = self.tools.len(),
            "MCP server listening on stdio"
        );

        let mut line = String::new();
        while self.reader.read_line(&mut line)? > 0 {
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                self.handle_request(trimmed)?;
            }
            line.clear();
        }

        info!("input closed, MCP server stopping");
        Ok(())
    }

    /// Consume the server, returning its writer
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn handle_request(&mut self, raw: &str) -> McpResult<()> {
        let request: JsonRpcRequest = match serde_json::from_str(raw) {
            Ok(req) => req,
            Err(e) => {
                warn!(error = %e, "unparseable request");
                return self.send(&JsonRpcError::parse_error(e.to_string()));
            }
        };

        if !request.is_valid() {
            let id = request.id.unwrap_or(Value::Null);
            return self.send(&JsonRpcError::invalid_request(id, "jsonrpc must be '2.0'"));
        }

        debug!(method = %request.method, "request");

        if request.is_notification() {
            // no response for notifications, whatever the method
            return Ok(());
        }

        let id = request.id.clone().unwrap_or(Value::Null);
        match request.method.as_str() {
            "initialize" => self.handle_initialize(id),
            "tools/list" => self.handle_tools_list(id),
            "tools/call" => self.handle_tool_call(id, request.params),
            "ping" => self.send(&JsonRpcResponse::new(id, json!({}))),
            other => self.send(&JsonRpcError::method_not_found(id, other)),
        }
    }

    fn handle_initialize(&mut self, id: Value) -> McpResult<()> {
        let result = json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": {
                "tools": {}
            },
            "serverInfo": {
                "name": self.server_info.name,
                "version": self.server_info.version
            }
        });
        self.send(&JsonRpcResponse::new(id, result))
    }

    fn handle_tools_list(&mut self, id: Value) -> McpResult<()> {
        let mut tools: Vec<McpTool> = self.tools.values().map(|t| t.definition()).collect();
        tools.sort_by(|a, b| a.name.cmp(&b.name));
        self.send(&JsonRpcResponse::new(id, json!({ "tools": tools })))
    }

    fn handle_tool_call(&mut self, id: Value, params: Option<Value>) -> McpResult<()> {
        let Some(tool_name) = params
            .as_ref()
            .and_then(|p| p.get("name"))
            .and_then(|v| v.as_str())
        else {
            return self.send(&JsonRpcError::invalid_params(id, "missing tool name"));
        };

        let Some(tool) = self.tools.get(tool_name) else {
            return self.send(&JsonRpcError::unknown_tool(id, tool_name));
        };

        let arguments = params
            .as_ref()
            .and_then(|p| p.get("arguments"))
            .cloned()
            .unwrap_or_else(|| json!({}));

        let outcome = tool.execute(arguments);
        match outcome {
            Ok(result) => self.send(&JsonRpcResponse::new(id, result)),
            Err(e) => {
                warn!(tool = %tool_name, error = %e, "tool execution failed");
                self.send(&JsonRpcError::tool_failed(id, e.to_string()))
            }
        }
    }

    fn send<T: Serialize>(&mut self, message: &T) -> McpResult<()> {
        let json = serde_json::to_string(message)?;
        writeln!(self.writer, "{}", json)?;
        self.writer.flush()?;
        Ok(())
    }
}
