//! Dependent and relation tool handlers

use super::{decode_args, decode_model, required_object, required_str};
use crate::mcp_integration::core::{SmartHrMcpServer, SmartHrToolResult};
use crate::models::{
    DependentCreateRequest, DependentListQuery, DependentPartialUpdateRequest,
    DependentUpdateRequest, ListParams,
};
use serde::Deserialize;
use serde_json::Value;

/// Relation types are few; the tool fetches them in one page by default.
const RELATIONS_PER_PAGE: u32 = 100;

#[derive(Deserialize)]
struct RelationPaging {
    #[serde(default = "first_page")]
    page: u32,
    #[serde(default = "relations_per_page")]
    per_page: u32,
}

fn first_page() -> u32 {
    1
}

fn relations_per_page() -> u32 {
    RELATIONS_PER_PAGE
}

pub async fn handle_list_dependents(
    server: &SmartHrMcpServer,
    arguments: Value,
) -> SmartHrToolResult {
    let crew_id = try_arg!(required_str(&arguments, "crew_id"));
    let mut query = try_arg!(decode_args::<DependentListQuery>(&arguments));
    query.extra.remove("crew_id");
    SmartHrToolResult::from_result(
        "list_dependents",
        server.client.list_dependents(crew_id, &query).await,
    )
}

pub async fn handle_create_dependent(
    server: &SmartHrMcpServer,
    arguments: Value,
) -> SmartHrToolResult {
    let crew_id = try_arg!(required_str(&arguments, "crew_id"));
    let data = try_arg!(required_object(&arguments, "dependent_data"));
    let dependent = try_arg!(decode_model::<DependentCreateRequest>("create_dependent", data));
    SmartHrToolResult::from_result(
        "create_dependent",
        server.client.create_dependent(crew_id, &dependent).await,
    )
}

pub async fn handle_get_dependent(
    server: &SmartHrMcpServer,
    arguments: Value,
) -> SmartHrToolResult {
    let crew_id = try_arg!(required_str(&arguments, "crew_id"));
    let dependent_id = try_arg!(required_str(&arguments, "dependent_id"));
    SmartHrToolResult::from_result(
        "get_dependent",
        server.client.get_dependent(crew_id, dependent_id).await,
    )
}

pub async fn handle_update_dependent(
    server: &SmartHrMcpServer,
    arguments: Value,
) -> SmartHrToolResult {
    let crew_id = try_arg!(required_str(&arguments, "crew_id"));
    let dependent_id = try_arg!(required_str(&arguments, "dependent_id"));
    let data = try_arg!(required_object(&arguments, "dependent_data"));
    let dependent = try_arg!(decode_model::<DependentUpdateRequest>("update_dependent", data));
    SmartHrToolResult::from_result(
        "update_dependent",
        server
            .client
            .update_dependent(crew_id, dependent_id, &dependent)
            .await,
    )
}

pub async fn handle_partial_update_dependent(
    server: &SmartHrMcpServer,
    arguments: Value,
) -> SmartHrToolResult {
    let crew_id = try_arg!(required_str(&arguments, "crew_id"));
    let dependent_id = try_arg!(required_str(&arguments, "dependent_id"));
    let data = try_arg!(required_object(&arguments, "dependent_data"));
    let dependent = try_arg!(decode_model::<DependentPartialUpdateRequest>(
        "partial_update_dependent",
        data
    ));
    SmartHrToolResult::from_result(
        "partial_update_dependent",
        server
            .client
            .partial_update_dependent(crew_id, dependent_id, &dependent)
            .await,
    )
}

pub async fn handle_delete_dependent(
    server: &SmartHrMcpServer,
    arguments: Value,
) -> SmartHrToolResult {
    let crew_id = try_arg!(required_str(&arguments, "crew_id"));
    let dependent_id = try_arg!(required_str(&arguments, "dependent_id"));
    SmartHrToolResult::from_result(
        "delete_dependent",
        server.client.delete_dependent(crew_id, dependent_id).await,
    )
}

pub async fn handle_list_relations(
    server: &SmartHrMcpServer,
    arguments: Value,
) -> SmartHrToolResult {
    let paging = try_arg!(decode_args::<RelationPaging>(&arguments));
    let params = ListParams::page(paging.page, paging.per_page);
    SmartHrToolResult::from_result(
        "list_relations",
        server.client.list_relations(&params).await,
    )
}
