//! JSON-RPC dispatcher for the tool surface.

use std::sync::Arc;

use serde_json::{Value, json};
use ssrelay_core::{ErrorReport, RelayError, RelayService};
use tracing::{debug, info, warn};

use crate::error::McpError;
use crate::protocol::{
    InitializeResult, JSONRPC_VERSION, JsonRpcRequest, JsonRpcResponse, ToolCallParams,
    ToolResult, ToolsListResult,
};
use crate::tools::{Tool, tool_definitions};

/// MCP server backed by the shared relay service.
///
/// Stateless between messages; one instance serves every connection.
pub struct McpServer {
    relay: Arc<RelayService>,
}

impl McpServer {
    pub const fn new(relay: Arc<RelayService>) -> Self {
        Self { relay }
    }

    /// Handle one raw message body.
    ///
    /// Returns `None` for notifications, which get no response.
    pub async fn handle_raw(&self, body: &[u8]) -> Option<JsonRpcResponse> {
        let value: Value = match serde_json::from_slice(body) {
            Ok(value) => value,
            Err(e) => {
                return Some(JsonRpcResponse::error(
                    Value::Null,
                    McpError::Parse(e.to_string()).into(),
                ));
            }
        };

        let id = value.get("id").cloned().unwrap_or(Value::Null);
        let request: JsonRpcRequest = match serde_json::from_value(value) {
            Ok(request) => request,
            Err(e) => {
                return Some(JsonRpcResponse::error(
                    id,
                    McpError::InvalidRequest(e.to_string()).into(),
                ));
            }
        };

        if request.jsonrpc != JSONRPC_VERSION {
            return Some(JsonRpcResponse::error(
                id,
                McpError::InvalidRequest(format!(
                    "unsupported jsonrpc version '{}'",
                    request.jsonrpc
                ))
                .into(),
            ));
        }

        self.handle(request).await
    }

    /// Handle one parsed request.
    pub async fn handle(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        debug!(method = %request.method, "MCP request");
        let result = match request.method.as_str() {
            "initialize" => to_value(InitializeResult::default()),
            "initialized" | "notifications/initialized" | "ping" => Ok(json!({})),
            "tools/list" => to_value(ToolsListResult {
                tools: tool_definitions(),
            }),
            "tools/call" => self.handle_tools_call(request.params.clone()).await,
            other => Err(McpError::MethodNotFound(other.to_string())),
        };

        let Some(id) = request.id else {
            if let Err(e) = result {
                warn!(method = %request.method, error = %e, "Notification handling failed");
            }
            return None;
        };

        Some(match result {
            Ok(value) => JsonRpcResponse::success(id, value),
            Err(e) => JsonRpcResponse::error(id, e.into()),
        })
    }

    async fn handle_tools_call(&self, params: Value) -> Result<Value, McpError> {
        let params: ToolCallParams =
            serde_json::from_value(params).map_err(|e| McpError::InvalidParams(e.to_string()))?;

        let tool = Tool::from_name(&params.name)
            .ok_or_else(|| McpError::UnknownTool(params.name.clone()))?;

        info!(tool = %params.name, "Dispatching tool call");

        let outcome = match tool {
            Tool::Command(command) => self
                .relay
                .execute(command, params.arguments)
                .await
                .map(ssrelay_core::CommandOutcome::into_body),
            Tool::SearchYoutube => match search_query(&params.arguments) {
                Ok(query) => self.relay.search_video(query).await.and_then(|link| {
                    serde_json::to_value(link)
                        .map_err(|e| RelayError::MalformedResponse(e.to_string()))
                }),
                Err(e) => Err(e),
            },
        };

        let result = match outcome {
            Ok(body) => ToolResult::text(body.to_string()),
            Err(e) => {
                warn!(tool = %params.name, error = %e, "Tool call failed");
                let report = ErrorReport::from(&e);
                ToolResult::error(to_value(report)?.to_string())
            }
        };

        to_value(result)
    }
}

/// The `query` argument of `search_youtube`; absent counts as empty.
fn search_query(arguments: &Value) -> Result<&str, RelayError> {
    match arguments.get("query") {
        None | Some(Value::Null) => Ok(""),
        Some(Value::String(query)) => Ok(query.as_str()),
        Some(_) => Err(RelayError::Validation("query must be a string".to_string())),
    }
}

fn to_value(value: impl serde::Serialize) -> Result<Value, McpError> {
    serde_json::to_value(value).map_err(|e| McpError::Internal(e.to_string()))
}
