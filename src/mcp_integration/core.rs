//! Core MCP integration types.
//!
//! Holds the server wrapper around [`SmartHrClient`] and the structured
//! result every tool handler returns.

use crate::client::{ApiResponse, SmartHrClient};
use crate::error::{SmartHrError, SmartHrResult};
use serde_json::{Value, json};

/// Information about the MCP server for AI agent discovery
#[derive(Debug, Clone)]
pub struct McpServerInfo {
    /// Human-readable server name
    pub name: String,
    pub version: String,
    pub description: String,
}

impl Default for McpServerInfo {
    fn default() -> Self {
        Self {
            name: "SmartHR".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            description: "SmartHR HR API exposed as MCP tools: crews, departments, \
                          employment types, job titles, grades, job categories and dependents"
                .to_string(),
        }
    }
}

/// Tool execution result for MCP clients
///
/// # Examples
///
/// ```rust
/// use smarthr_mcp_server::mcp_integration::SmartHrToolResult;
/// use serde_json::json;
///
/// let result = SmartHrToolResult::invalid_arguments("Missing crew_id parameter");
/// assert!(!result.success);
/// assert_eq!(result.content["error_code"], "INVALID_ARGUMENTS");
/// ```
#[derive(Debug, Clone)]
pub struct SmartHrToolResult {
    /// Whether the tool execution was successful
    pub success: bool,
    /// Remote payload, or error information
    pub content: Value,
    /// Operation context for the caller
    pub metadata: Option<Value>,
}

impl SmartHrToolResult {
    pub fn success(operation: &str, response: ApiResponse) -> Self {
        Self {
            success: true,
            content: response.into_value(),
            metadata: Some(json!({"operation": operation})),
        }
    }

    /// Map a client failure to an error result.
    pub fn failure(operation: &str, error: &SmartHrError) -> Self {
        let mut content = json!({
            "error": error.to_string(),
            "error_code": error.error_code(),
        });

        match error {
            SmartHrError::Validation(errors) => {
                let details: Vec<Value> = errors
                    .errors()
                    .iter()
                    .map(|e| json!({"field": e.field(), "message": e.to_string()}))
                    .collect();
                content["details"] = Value::Array(details);
            }
            SmartHrError::Http { status, body } => {
                content["status"] = json!(status);
                content["body"] = json!(body);
            }
            _ => {}
        }

        Self {
            success: false,
            content,
            metadata: Some(json!({"operation": operation, "local": error.is_local()})),
        }
    }

    pub fn from_result(operation: &str, result: SmartHrResult<ApiResponse>) -> Self {
        match result {
            Ok(response) => Self::success(operation, response),
            Err(error) => {
                log::warn!("{operation} failed: {error}");
                Self::failure(operation, &error)
            }
        }
    }

    /// Tool arguments are missing or have the wrong shape.
    pub fn invalid_arguments(message: impl Into<String>) -> Self {
        Self {
            success: false,
            content: json!({
                "error": message.into(),
                "error_code": "INVALID_ARGUMENTS"
            }),
            metadata: None,
        }
    }

    pub fn unknown_tool(tool_name: &str) -> Self {
        Self {
            success: false,
            content: json!({
                "error": "Unknown tool",
                "error_code": "UNKNOWN_TOOL",
                "tool_name": tool_name
            }),
            metadata: None,
        }
    }
}

/// MCP server wrapper for SmartHR operations
///
/// ```rust,no_run
/// use smarthr_mcp_server::{SmartHrClient, mcp_integration::SmartHrMcpServer};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
///     let server = SmartHrMcpServer::new(SmartHrClient::from_env()?);
///     println!("Available tools: {}", server.get_tools().len());
///     server.run_stdio().await
/// }
/// ```
#[derive(Debug, Clone)]
pub struct SmartHrMcpServer {
    pub(crate) client: SmartHrClient,
    pub(crate) server_info: McpServerInfo,
}

impl SmartHrMcpServer {
    pub fn new(client: SmartHrClient) -> Self {
        Self {
            client,
            server_info: McpServerInfo::default(),
        }
    }

    pub fn with_info(client: SmartHrClient, server_info: McpServerInfo) -> Self {
        Self {
            client,
            server_info,
        }
    }

    pub fn server_info(&self) -> &McpServerInfo {
        &self.server_info
    }

    pub fn client(&self) -> &SmartHrClient {
        &self.client
    }
}
