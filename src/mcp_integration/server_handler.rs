//! rmcp [`ServerHandler`] for [`SmartHrMcpServer`]
//!
//! Tool and resource listings are converted from the JSON descriptors in
//! `tools/` and `handlers/`; calls are routed through [`SmartHrMcpServer::execute_tool`]
//! and [`SmartHrMcpServer::read_resource`].

use super::core::{SmartHrMcpServer, SmartHrToolResult};
use super::protocol::describe_resource_error;
use log::{debug, info};
use rmcp::{
    ErrorData, RoleServer, ServerHandler, ServiceExt,
    model::{
        AnnotateAble, CallToolRequestParam, CallToolResult, Content, Implementation,
        ListResourcesResult, ListToolsResult, PaginatedRequestParam, ProtocolVersion, RawResource,
        ReadResourceRequestParam, ReadResourceResult, Resource, ResourceContents,
        ServerCapabilities, ServerInfo, Tool,
    },
    service::RequestContext,
    transport::stdio,
};
use serde_json::{Map, Value, json};
use std::sync::Arc;

impl SmartHrMcpServer {
    /// Run the MCP server on the process's stdin and stdout until the client disconnects.
    pub async fn run_stdio(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        info!("SmartHR MCP server ready for stdio communication");
        info!(
            "Available tools: {:?}",
            self.get_tools()
                .iter()
                .filter_map(|t| t.get("name").and_then(Value::as_str))
                .collect::<Vec<_>>()
        );

        let service = self.serve(stdio()).await?;
        let reason = service.waiting().await?;
        debug!("MCP session ended: {reason:?}");
        Ok(())
    }

    /// Tool descriptors as rmcp [`Tool`]s. Descriptors without a name are skipped.
    pub fn sdk_tools(&self) -> Vec<Tool> {
        self.get_tools().iter().filter_map(to_sdk_tool).collect()
    }

    pub fn sdk_resources(&self) -> Vec<Resource> {
        self.get_resources()
            .iter()
            .filter_map(to_sdk_resource)
            .collect()
    }
}

fn to_sdk_tool(descriptor: &Value) -> Option<Tool> {
    let name = descriptor.get("name")?.as_str()?.to_string();
    let description = descriptor
        .get("description")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let schema = match descriptor.get("inputSchema") {
        Some(Value::Object(schema)) => schema.clone(),
        _ => Map::new(),
    };
    Some(Tool::new(name, description, Arc::new(schema)))
}

fn to_sdk_resource(descriptor: &Value) -> Option<Resource> {
    let uri = descriptor.get("uri")?.as_str()?;
    let name = descriptor.get("name")?.as_str()?;

    let mut raw = RawResource::new(uri, name);
    raw.description = descriptor
        .get("description")
        .and_then(Value::as_str)
        .map(str::to_string);
    raw.mime_type = descriptor
        .get("mimeType")
        .and_then(Value::as_str)
        .map(str::to_string);
    Some(raw.no_annotation())
}

/// Tool results travel as one pretty-printed JSON text block; failures set `isError`.
pub(crate) fn to_call_tool_result(result: &SmartHrToolResult) -> CallToolResult {
    let text = serde_json::to_string_pretty(&result.content)
        .unwrap_or_else(|_| result.content.to_string());
    let content = vec![Content::text(text)];
    if result.success {
        CallToolResult::success(content)
    } else {
        CallToolResult::error(content)
    }
}

impl ServerHandler for SmartHrMcpServer {
    fn get_info(&self) -> ServerInfo {
        let info = self.server_info();
        let mut implementation = Implementation::from_build_env();
        implementation.name = info.name.clone();
        implementation.version = info.version.clone();

        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder()
                .enable_resources()
                .enable_tools()
                .build(),
            server_info: implementation,
            instructions: Some(info.description.clone()),
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, ErrorData> {
        Ok(ListToolsResult::with_all_items(self.sdk_tools()))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        let arguments = request
            .arguments
            .map(Value::Object)
            .unwrap_or_else(|| json!({}));
        let result = self.execute_tool(&request.name, arguments).await;
        Ok(to_call_tool_result(&result))
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, ErrorData> {
        Ok(ListResourcesResult::with_all_items(self.sdk_resources()))
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, ErrorData> {
        let uri = request.uri;
        match SmartHrMcpServer::read_resource(self, &uri).await {
            Ok(Some(content)) => Ok(ReadResourceResult {
                contents: vec![ResourceContents::text(content.to_string(), uri)],
            }),
            Ok(None) => Err(ErrorData::resource_not_found(
                format!("Resource not found: {uri}"),
                Some(json!({"uri": uri})),
            )),
            Err(e) => Err(ErrorData::internal_error(
                describe_resource_error(&uri, &e),
                None,
            )),
        }
    }
}
