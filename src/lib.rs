//! SmartHR API adapter for AI agents.
//!
//! Wraps the SmartHR HR REST API (crews, departments, lookup resources and
//! dependents) in typed request models and exposes every operation as an
//! MCP tool over stdio.
//!
//! # Core Components
//!
//! - [`SmartHrClient`] - bearer-authenticated async HTTP client
//! - [`models`] - request models with local validation and tri-state fields
//! - [`mcp_integration::SmartHrMcpServer`] - tool discovery and dispatch
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use smarthr_mcp_server::{SmartHrClient, SmartHrConfig};
//! use smarthr_mcp_server::models::DepartmentCreateRequest;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = SmartHrConfig::new("https://example.smarthr.jp/api", "access-token")?;
//! let client = SmartHrClient::new(config)?;
//! let created = client
//!     .create_department(&DepartmentCreateRequest::new("Engineering"))
//!     .await?;
//! println!("{}", created.into_value());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod mcp_integration;
pub mod models;

pub use client::{ApiResponse, SmartHrClient};
pub use config::SmartHrConfig;
pub use error::{SmartHrError, SmartHrResult, ValidationError, ValidationErrors};
pub use mcp_integration::{McpServerInfo, SmartHrMcpServer, SmartHrToolResult};
pub use models::{Field, RequestModel, SerializationPolicy};
