//! `/v1/crews` operations.

use crate::client::core::SmartHrClient;
use crate::client::response::ApiResponse;
use crate::error::SmartHrResult;
use crate::models::query::QueryParams;
use crate::models::{
    CrewCreateRequest, CrewInviteRequest, CrewListQuery, CrewSearchQuery, CrewUpdateRequest,
    SerializationPolicy,
};
use reqwest::Method;

const CREWS: [&str; 2] = ["v1", "crews"];

impl SmartHrClient {
    pub async fn create_crew(&self, crew: &CrewCreateRequest) -> SmartHrResult<ApiResponse> {
        self.send_model(Method::POST, &CREWS, crew, SerializationPolicy::OmitUnsetAndNull)
            .await
    }

    /// Fetch one crew; `fields` narrows the returned attributes.
    pub async fn get_crew(&self, crew_id: &str, fields: Option<&str>) -> SmartHrResult<ApiResponse> {
        let mut query = QueryParams::new();
        query.push_opt("fields", fields);
        self.get(&["v1", "crews", crew_id], Some(&query)).await
    }

    /// Partially update a crew with PATCH.
    pub async fn update_crew(
        &self,
        crew_id: &str,
        crew: &CrewUpdateRequest,
    ) -> SmartHrResult<ApiResponse> {
        self.send_model(
            Method::PATCH,
            &["v1", "crews", crew_id],
            crew,
            SerializationPolicy::OmitUnsetAndNull,
        )
        .await
    }

    pub async fn list_crews(&self, query: &CrewListQuery) -> SmartHrResult<ApiResponse> {
        self.get(&CREWS, Some(&query.to_query())).await
    }

    pub async fn search_crews(&self, query: &CrewSearchQuery) -> SmartHrResult<ApiResponse> {
        self.get(&CREWS, Some(&query.to_query())).await
    }

    /// Send an account invitation to a crew.
    pub async fn invite_crew(
        &self,
        crew_id: &str,
        invite: &CrewInviteRequest,
    ) -> SmartHrResult<ApiResponse> {
        let body = serde_json::to_value(invite)?;
        self.send(Method::PUT, &["v1", "crews", crew_id, "invite"], None, Some(body))
            .await
    }

    pub async fn delete_crew(&self, crew_id: &str) -> SmartHrResult<ApiResponse> {
        self.delete(&["v1", "crews", crew_id]).await
    }
}
