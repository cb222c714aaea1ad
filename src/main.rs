//! SmartHR MCP stdio server
//!
//! Reads `SMARTHR_API_KEY` and `SMARTHR_API_BASE_URL` from the environment
//! (or a `.env` file) and serves MCP on stdin/stdout through `rmcp`. Logs go
//! to stderr so they never interleave with protocol output.
//!
//! ### Initialize the server:
//! ```json
//! {"jsonrpc":"2.0","id":1,"method":"initialize","params":{"protocolVersion":"2024-11-05","capabilities":{},"clientInfo":{"name":"test-client","version":"1.0.0"}}}
//! ```
//!
//! ### Fetch a crew:
//! ```json
//! {"jsonrpc":"2.0","id":2,"method":"tools/call","params":{"name":"smarthr_get_crew","arguments":{"crew_id":"c-001"}}}
//! ```

use smarthr_mcp_server::{SmartHrClient, mcp_integration::SmartHrMcpServer};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenvy::dotenv().ok();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .format_timestamp_secs()
        .init();

    // A missing API key stops the process here, before any request is served.
    let client = match SmartHrClient::from_env() {
        Ok(client) => client,
        Err(e) => {
            log::error!("SmartHR client configuration failed: {e}");
            return Err(e.into());
        }
    };
    log::info!("Using SmartHR API at {}", client.base_url());

    let mcp_server = SmartHrMcpServer::new(client);
    mcp_server.run_stdio().await?;

    log::info!("SmartHR MCP server shutdown complete");
    Ok(())
}
