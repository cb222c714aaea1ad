//! Crew tool handlers

use super::{decode_args, decode_model, optional_str, required_object, required_str};
use crate::mcp_integration::core::{SmartHrMcpServer, SmartHrToolResult};
use crate::models::{
    CrewCreateRequest, CrewInviteRequest, CrewListQuery, CrewSearchQuery, CrewUpdateRequest,
};
use serde_json::Value;

pub async fn handle_create_crew(server: &SmartHrMcpServer, arguments: Value) -> SmartHrToolResult {
    let data = try_arg!(required_object(&arguments, "data"));
    let crew = try_arg!(decode_model::<CrewCreateRequest>("create_crew", data));
    SmartHrToolResult::from_result("create_crew", server.client.create_crew(&crew).await)
}

pub async fn handle_get_crew(server: &SmartHrMcpServer, arguments: Value) -> SmartHrToolResult {
    let crew_id = try_arg!(required_str(&arguments, "crew_id"));
    let fields = optional_str(&arguments, "fields");
    SmartHrToolResult::from_result("get_crew", server.client.get_crew(crew_id, fields).await)
}

pub async fn handle_update_crew(server: &SmartHrMcpServer, arguments: Value) -> SmartHrToolResult {
    let crew_id = try_arg!(required_str(&arguments, "crew_id"));
    let data = try_arg!(required_object(&arguments, "data"));
    let crew = try_arg!(decode_model::<CrewUpdateRequest>("update_crew", data));
    SmartHrToolResult::from_result(
        "update_crew",
        server.client.update_crew(crew_id, &crew).await,
    )
}

/// Every argument besides paging is forwarded as a list filter.
pub async fn handle_list_crews(server: &SmartHrMcpServer, arguments: Value) -> SmartHrToolResult {
    let query = try_arg!(decode_args::<CrewListQuery>(&arguments));
    SmartHrToolResult::from_result("list_crews", server.client.list_crews(&query).await)
}

pub async fn handle_search_crews(server: &SmartHrMcpServer, arguments: Value) -> SmartHrToolResult {
    let query = try_arg!(decode_args::<CrewSearchQuery>(&arguments));
    SmartHrToolResult::from_result("search_crews", server.client.search_crews(&query).await)
}

pub async fn handle_invite_crew(server: &SmartHrMcpServer, arguments: Value) -> SmartHrToolResult {
    let crew_id = try_arg!(required_str(&arguments, "crew_id"));
    let invite = try_arg!(decode_args::<CrewInviteRequest>(&arguments));
    SmartHrToolResult::from_result(
        "invite_crew",
        server.client.invite_crew(crew_id, &invite).await,
    )
}

pub async fn handle_delete_crew(server: &SmartHrMcpServer, arguments: Value) -> SmartHrToolResult {
    let crew_id = try_arg!(required_str(&arguments, "crew_id"));
    SmartHrToolResult::from_result("delete_crew", server.client.delete_crew(crew_id).await)
}
