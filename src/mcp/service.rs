//! MCP service - dispatches JSON-RPC 2.0 requests.

use std::sync::Arc;

use log::{info, warn};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::mcp::rpc::{ErrorCode, RpcRequest, RpcResponse, JSONRPC_VERSION};
use crate::mcp::tools::{ToolDescriptor, ToolRegistry};

pub const PROTOCOL_VERSION: &str = "2024-11-05";

#[derive(Clone)]
pub struct McpService {
    registry: Arc<ToolRegistry>,
}

impl McpService {
    pub fn new(registry: ToolRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    /// Handle one request; notifications produce no response.
    pub fn handle_request(&self, request: RpcRequest) -> Option<RpcResponse> {
        if request.jsonrpc != JSONRPC_VERSION {
            warn!("received unsupported jsonrpc version: {}", request.jsonrpc);
            return Some(RpcResponse::error(
                request.id,
                ErrorCode::InvalidRequest,
                "Version jsonrpc non prise en charge (2.0 attendue)",
            ));
        }

        let RpcRequest {
            method, params, id, ..
        } = request;

        match method.as_str() {
            "initialize" => Some(self.handle_initialize(id, params)),
            "tools/list" => Some(respond(
                id,
                ListToolsResult {
                    tools: self.registry.list_tools(),
                },
            )),
            "tools/call" => Some(self.handle_call_tool(id, params)),
            "ping" => Some(RpcResponse::success(id, json!({}))),
            method if method.starts_with("notifications/") => {
                info!("received client notification: {}", method);
                None
            }
            other => Some(RpcResponse::method_not_found(id, other)),
        }
    }

    fn handle_initialize(&self, id: Option<Value>, params: Option<Value>) -> RpcResponse {
        let parsed: InitializeParams = match parse_params(params) {
            Ok(value) => value,
            Err(message) => return RpcResponse::error(id, ErrorCode::InvalidParams, message),
        };

        info!(
            "client {} v{} initializing (protocol {})",
            parsed.client_info.name,
            parsed.client_info.version.as_deref().unwrap_or("unknown"),
            parsed.protocol_version
        );

        respond(
            id,
            InitializeResult {
                protocol_version: PROTOCOL_VERSION,
                server_info: ServerInfo {
                    name: env!("CARGO_PKG_NAME"),
                    version: env!("CARGO_PKG_VERSION"),
                },
                capabilities: ServerCapabilities {
                    tools: ToolsCapability {
                        list_changed: false,
                    },
                },
            },
        )
    }

    fn handle_call_tool(&self, id: Option<Value>, params: Option<Value>) -> RpcResponse {
        let parsed: CallToolParams = match parse_params(params) {
            Ok(value) => value,
            Err(message) => return RpcResponse::error(id, ErrorCode::InvalidParams, message),
        };

        info!("calling tool {}", parsed.name);
        respond(id, self.registry.call_tool(&parsed.name, parsed.arguments))
    }
}

fn respond<T: Serialize>(id: Option<Value>, result: T) -> RpcResponse {
    match serde_json::to_value(result) {
        Ok(value) => RpcResponse::success(id, value),
        Err(err) => RpcResponse::error(id, ErrorCode::InternalError, err.to_string()),
    }
}

fn parse_params<T: DeserializeOwned>(params: Option<Value>) -> Result<T, String> {
    serde_json::from_value(params.unwrap_or(Value::Null)).map_err(|err| err.to_string())
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InitializeParams {
    protocol_version: String,
    client_info: ClientInfo,
}

#[derive(Debug, Deserialize)]
struct ClientInfo {
    name: String,
    #[serde(default)]
    version: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InitializeResult {
    protocol_version: &'static str,
    server_info: ServerInfo,
    capabilities: ServerCapabilities,
}

#[derive(Debug, Serialize)]
struct ServerInfo {
    name: &'static str,
    version: &'static str,
}

#[derive(Debug, Serialize)]
struct ServerCapabilities {
    tools: ToolsCapability,
}

#[derive(Debug, Serialize)]
struct ToolsCapability {
    #[serde(rename = "listChanged")]
    list_changed: bool,
}

#[derive(Debug, Serialize)]
struct ListToolsResult {
    tools: Vec<ToolDescriptor>,
}

#[derive(Debug, Deserialize)]
struct CallToolParams {
    name: String,
    #[serde(default)]
    arguments: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::{Branding, ContractGenerator};

    fn service() -> McpService {
        let generator = Arc::new(ContractGenerator::new(Branding::default()));
        McpService::new(ToolRegistry::new(generator))
    }

    fn request(method: &str, params: Option<Value>) -> RpcRequest {
        RpcRequest {
            jsonrpc: "2.0".to_string(),
            method: method.to_string(),
            params,
            id: Some(json!(1)),
        }
    }

    #[test]
    fn test_initialize() {
        let response = service()
            .handle_request(request(
                "initialize",
                Some(json!({
                    "protocolVersion": PROTOCOL_VERSION,
                    "clientInfo": { "name": "test-client" }
                })),
            ))
            .unwrap();

        let result = response.result.unwrap();
        assert_eq!(result["protocolVersion"], PROTOCOL_VERSION);
        assert_eq!(result["serverInfo"]["name"], env!("CARGO_PKG_NAME"));
    }

    #[test]
    fn test_initialize_without_params_is_invalid() {
        let response = service().handle_request(request("initialize", None)).unwrap();
        assert_eq!(response.error.unwrap().code, -32602);
    }

    #[test]
    fn test_notifications_have_no_response() {
        let mut notification = request("notifications/initialized", None);
        notification.id = None;
        assert!(service().handle_request(notification).is_none());
    }

    #[test]
    fn test_wrong_version_and_unknown_method() {
        let mut bad = request("ping", None);
        bad.jsonrpc = "1.0".to_string();
        assert_eq!(service().handle_request(bad).unwrap().error.unwrap().code, -32600);

        let response = service().handle_request(request("prompts/list", None)).unwrap();
        assert_eq!(response.error.unwrap().code, -32601);
    }
}
