//! Tool discovery and dispatch

use super::core::{SmartHrMcpServer, SmartHrToolResult};
use super::handlers::{
    classification_ops, crew_ops, crew_profiles, department_ops, dependent_ops,
};
use super::tools::{LookupKind, classification_schemas, crew_schemas, department_schemas, dependent_schemas};
use crate::error::{SmartHrError, SmartHrResult};
use log::debug;
use serde_json::Value;

impl SmartHrMcpServer {
    /// Get the list of available MCP tools as JSON
    ///
    /// ```rust
    /// use smarthr_mcp_server::{SmartHrClient, SmartHrConfig, mcp_integration::SmartHrMcpServer};
    ///
    /// let config = SmartHrConfig::new("https://app.smarthr.jp/api", "token").unwrap();
    /// let server = SmartHrMcpServer::new(SmartHrClient::new(config).unwrap());
    /// assert!(server.get_tools().iter().all(|t| t["name"].as_str().unwrap().starts_with("smarthr_")));
    /// ```
    pub fn get_tools(&self) -> Vec<Value> {
        let mut tools = vec![
            crew_schemas::create_crew_tool(),
            crew_schemas::get_crew_tool(),
            crew_schemas::update_crew_tool(),
            crew_schemas::list_crews_tool(),
            crew_schemas::search_crews_tool(),
            crew_schemas::delete_crew_tool(),
            crew_schemas::invite_crew_tool(),
            department_schemas::create_department_tool(),
            department_schemas::list_departments_tool(),
            department_schemas::get_department_tool(),
            department_schemas::update_department_tool(),
            department_schemas::partial_update_department_tool(),
            department_schemas::discontinue_department_tool(),
        ];
        tools.extend(classification_schemas::lookup_tools());
        tools.extend([
            dependent_schemas::list_dependents_tool(),
            dependent_schemas::create_dependent_tool(),
            dependent_schemas::get_dependent_tool(),
            dependent_schemas::update_dependent_tool(),
            dependent_schemas::partial_update_dependent_tool(),
            dependent_schemas::delete_dependent_tool(),
            dependent_schemas::list_relations_tool(),
        ]);
        tools
    }

    /// Execute a tool by name with arguments
    pub async fn execute_tool(&self, tool_name: &str, arguments: Value) -> SmartHrToolResult {
        debug!("Executing MCP tool: {} with args: {}", tool_name, arguments);

        match tool_name {
            // Crews
            "smarthr_create_crew" => crew_ops::handle_create_crew(self, arguments).await,
            "smarthr_get_crew" => crew_ops::handle_get_crew(self, arguments).await,
            "smarthr_update_crew" => crew_ops::handle_update_crew(self, arguments).await,
            "smarthr_list_crews" => crew_ops::handle_list_crews(self, arguments).await,
            "smarthr_search_crews" => crew_ops::handle_search_crews(self, arguments).await,
            "smarthr_delete_crew" => crew_ops::handle_delete_crew(self, arguments).await,
            "smarthr_invite_crew" => crew_ops::handle_invite_crew(self, arguments).await,

            // Departments
            "smarthr_create_department" => {
                department_ops::handle_create_department(self, arguments).await
            }
            "smarthr_list_departments" => {
                department_ops::handle_list_departments(self, arguments).await
            }
            "smarthr_get_department" => department_ops::handle_get_department(self, arguments).await,
            "smarthr_update_department" => {
                department_ops::handle_update_department(self, arguments).await
            }
            "smarthr_partial_update_department" => {
                department_ops::handle_partial_update_department(self, arguments).await
            }
            "smarthr_discontinue_department" => {
                department_ops::handle_discontinue_department(self, arguments).await
            }

            // Dependents
            "smarthr_list_dependents" => dependent_ops::handle_list_dependents(self, arguments).await,
            "smarthr_create_dependent" => {
                dependent_ops::handle_create_dependent(self, arguments).await
            }
            "smarthr_get_dependent" => dependent_ops::handle_get_dependent(self, arguments).await,
            "smarthr_update_dependent" => {
                dependent_ops::handle_update_dependent(self, arguments).await
            }
            "smarthr_partial_update_dependent" => {
                dependent_ops::handle_partial_update_dependent(self, arguments).await
            }
            "smarthr_delete_dependent" => {
                dependent_ops::handle_delete_dependent(self, arguments).await
            }
            "smarthr_list_relations" => dependent_ops::handle_list_relations(self, arguments).await,

            // Employment types, job titles, grades, job categories
            other => match LookupKind::parse_tool(other) {
                Some((kind, action)) => {
                    classification_ops::handle_lookup(self, kind, action, arguments).await
                }
                None => SmartHrToolResult::unknown_tool(tool_name),
            },
        }
    }

    /// Resource descriptors for `resources/list`
    pub fn get_resources(&self) -> Vec<Value> {
        vec![crew_profiles::crew_profiles_resource()]
    }

    /// Read a resource by URI.
    ///
    /// Returns `Ok(None)` for an unknown URI.
    pub async fn read_resource(&self, uri: &str) -> SmartHrResult<Option<Value>> {
        match uri {
            crew_profiles::CREW_PROFILES_URI => {
                crew_profiles::read_crew_profiles(self).await.map(Some)
            }
            _ => Ok(None),
        }
    }
}

/// Resource read failures are reported as text inside the JSON-RPC error.
pub(crate) fn describe_resource_error(uri: &str, error: &SmartHrError) -> String {
    format!("Failed to read resource {uri}: {error}")
}
