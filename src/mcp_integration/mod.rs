//! MCP (Model Context Protocol) integration for SmartHR
//!
//! Exposes the SmartHR REST operations as structured tools, plus a
//! `crew_profiles` resource, served to AI agents over stdio with `rmcp`.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐    ┌──────────────────┐    ┌─────────────────┐
//! │   AI Agent      │───▶│  MCP Protocol    │───▶│  SmartHR API    │
//! │   (Client)      │    │  (This Module)   │    │  (reqwest)      │
//! └─────────────────┘    └──────────────────┘    └─────────────────┘
//!          │                        │                       │
//!          ▼                        ▼                       ▼
//!    Tool Discovery          Argument Checks        Bearer-authenticated
//!    Resource Reads          Model Validation       REST calls
//! ```
//!
//! ## Module Structure
//!
//! - `core` - [`McpServerInfo`], [`SmartHrToolResult`], [`SmartHrMcpServer`]
//! - `protocol` - tool discovery, dispatch and resource reads
//! - `server_handler` - the `rmcp` server handler and its stdio transport
//! - `tools/` - JSON schema definitions for tool discovery
//! - `handlers/` - tool execution handlers, one module per resource
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use smarthr_mcp_server::{SmartHrClient, mcp_integration::SmartHrMcpServer};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SmartHrClient::from_env()?;
//!     let server = SmartHrMcpServer::new(client);
//!
//!     let result = server
//!         .execute_tool("smarthr_get_crew", json!({"crew_id": "c-001"}))
//!         .await;
//!
//!     if result.success {
//!         println!("{}", result.content);
//!     }
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod handlers;
pub mod protocol;
pub mod server_handler;
pub mod tools;


pub use core::{McpServerInfo, SmartHrMcpServer, SmartHrToolResult};
pub use handlers::crew_profiles::CREW_PROFILES_URI;
