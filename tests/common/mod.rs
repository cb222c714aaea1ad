//! Shared helpers for tests that talk to a mock SmartHR API.

use rmcp::service::RunningService;
use rmcp::{RoleClient, ServiceExt};
use serde_json::{Value, json};
use smarthr_mcp_server::mcp_integration::SmartHrMcpServer;
use smarthr_mcp_server::{SmartHrClient, SmartHrConfig};
use wiremock::MockServer;

pub mod fixtures;

/// Bearer token every mock expects.
pub const TEST_TOKEN: &str = "test-token";

/// Client pointed at `{mock}/api`, so every request also proves the base
/// path is kept when endpoint segments are appended.
pub fn client_for(mock_server: &MockServer) -> SmartHrClient {
    let config = SmartHrConfig::new(&format!("{}/api", mock_server.uri()), TEST_TOKEN)
        .expect("mock server URI is a valid base URL");
    SmartHrClient::new(config).expect("client builds")
}

pub fn mcp_server_for(mock_server: &MockServer) -> SmartHrMcpServer {
    SmartHrMcpServer::new(client_for(mock_server))
}

/// Serve `server` over an in-memory pipe and return a connected rmcp client.
pub async fn connect_mcp_client(server: SmartHrMcpServer) -> RunningService<RoleClient, ()> {
    let (server_io, client_io) = tokio::io::duplex(4096);
    tokio::spawn(async move {
        if let Ok(running) = server.serve(server_io).await {
            let _ = running.waiting().await;
        }
    });
    ().serve(client_io)
        .await
        .expect("client completes the initialize handshake")
}

/// Start a mock server and a client aimed at it.
pub async fn mock_client() -> (MockServer, SmartHrClient) {
    let mock_server = MockServer::start().await;
    let client = client_for(&mock_server);
    (mock_server, client)
}

/// Error code reported in a failed tool result.
pub fn error_code(content: &Value) -> &str {
    content["error_code"].as_str().unwrap_or_default()
}

/// The 204 marker rendered for empty success bodies.
pub fn no_content_marker() -> Value {
    json!({"status": 204, "message": "No Content"})
}
