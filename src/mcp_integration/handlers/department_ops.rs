//! Department tool handlers
//!
//! Department tools take the body fields flat next to `department_id`.

use super::{decode_args, decode_model, required_str};
use crate::mcp_integration::core::{SmartHrMcpServer, SmartHrToolResult};
use crate::models::{
    DepartmentCreateRequest, DepartmentDiscontinueRequest, DepartmentListQuery,
    DepartmentPartialUpdateRequest, DepartmentUpdateRequest,
};
use serde_json::Value;

pub async fn handle_create_department(
    server: &SmartHrMcpServer,
    arguments: Value,
) -> SmartHrToolResult {
    let department = try_arg!(decode_model::<DepartmentCreateRequest>(
        "create_department",
        arguments
    ));
    SmartHrToolResult::from_result(
        "create_department",
        server.client.create_department(&department).await,
    )
}

pub async fn handle_list_departments(
    server: &SmartHrMcpServer,
    arguments: Value,
) -> SmartHrToolResult {
    let query = try_arg!(decode_args::<DepartmentListQuery>(&arguments));
    SmartHrToolResult::from_result(
        "list_departments",
        server.client.list_departments(&query).await,
    )
}

pub async fn handle_get_department(
    server: &SmartHrMcpServer,
    arguments: Value,
) -> SmartHrToolResult {
    let department_id = try_arg!(required_str(&arguments, "department_id"));
    SmartHrToolResult::from_result(
        "get_department",
        server.client.get_department(department_id).await,
    )
}

pub async fn handle_update_department(
    server: &SmartHrMcpServer,
    arguments: Value,
) -> SmartHrToolResult {
    let department_id = try_arg!(required_str(&arguments, "department_id")).to_string();
    let department = try_arg!(decode_model::<DepartmentUpdateRequest>(
        "update_department",
        arguments
    ));
    SmartHrToolResult::from_result(
        "update_department",
        server.client.update_department(&department_id, &department).await,
    )
}

pub async fn handle_partial_update_department(
    server: &SmartHrMcpServer,
    arguments: Value,
) -> SmartHrToolResult {
    let department_id = try_arg!(required_str(&arguments, "department_id")).to_string();
    let department = try_arg!(decode_model::<DepartmentPartialUpdateRequest>(
        "partial_update_department",
        arguments
    ));
    SmartHrToolResult::from_result(
        "partial_update_department",
        server
            .client
            .partial_update_department(&department_id, &department)
            .await,
    )
}

pub async fn handle_discontinue_department(
    server: &SmartHrMcpServer,
    arguments: Value,
) -> SmartHrToolResult {
    let department_id = try_arg!(required_str(&arguments, "department_id")).to_string();
    let request = try_arg!(decode_model::<DepartmentDiscontinueRequest>(
        "discontinue_department",
        arguments
    ));
    SmartHrToolResult::from_result(
        "discontinue_department",
        server
            .client
            .discontinue_department(&department_id, &request)
            .await,
    )
}
