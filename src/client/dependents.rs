//! Dependents nested under `/v1/crews/{crew_id}` and the relation lookup.

use crate::client::core::SmartHrClient;
use crate::client::response::ApiResponse;
use crate::error::{SmartHrError, SmartHrResult};
use crate::models::{
    DependentCreateRequest, DependentListQuery, DependentPartialUpdateRequest,
    DependentUpdateRequest, ListParams, SerializationPolicy,
};
use reqwest::Method;
use serde_json::{Value, json};

/// Message attached to an empty dependents listing.
pub const NO_DEPENDENTS_MESSAGE: &str = "No dependents are registered for this crew member.";

impl SmartHrClient {
    /// List a crew's dependents. Filters in `query.extra` are forwarded as-is.
    ///
    /// An empty listing, whether `{"dependents": []}`, a bare `[]` or a 2xx
    /// with no body, comes back as `{"message": ..., "dependents": []}`.
    pub async fn list_dependents(
        &self,
        crew_id: &str,
        query: &DependentListQuery,
    ) -> SmartHrResult<ApiResponse> {
        let response = self
            .get(&["v1", "crews", crew_id, "dependents"], Some(&query.to_query()))
            .await?;
        Ok(annotate_empty_dependents(response))
    }

    /// Create a dependent; unset support types default to `"supported"`.
    pub async fn create_dependent(
        &self,
        crew_id: &str,
        dependent: &DependentCreateRequest,
    ) -> SmartHrResult<ApiResponse> {
        let dependent = dependent.clone().with_support_defaults();
        self.send_model(
            Method::POST,
            &["v1", "crews", crew_id, "dependents"],
            &dependent,
            SerializationPolicy::OmitUnsetAndNull,
        )
        .await
    }

    pub async fn get_dependent(
        &self,
        crew_id: &str,
        dependent_id: &str,
    ) -> SmartHrResult<ApiResponse> {
        self.get(&["v1", "crews", crew_id, "dependents", dependent_id], None)
            .await
    }

    pub async fn update_dependent(
        &self,
        crew_id: &str,
        dependent_id: &str,
        dependent: &DependentUpdateRequest,
    ) -> SmartHrResult<ApiResponse> {
        self.send_model(
            Method::PUT,
            &["v1", "crews", crew_id, "dependents", dependent_id],
            dependent,
            SerializationPolicy::OmitUnsetAndNull,
        )
        .await
    }

    /// PATCH a dependent.
    ///
    /// # Errors
    ///
    /// Fails with a precondition error, without sending anything, unless
    /// last_name, first_name, birth_at, gender, live_together_type and
    /// relation_id are all supplied and non-empty.
    pub async fn partial_update_dependent(
        &self,
        crew_id: &str,
        dependent_id: &str,
        dependent: &DependentPartialUpdateRequest,
    ) -> SmartHrResult<ApiResponse> {
        let missing = dependent.missing_patch_fields();
        if !missing.is_empty() {
            return Err(SmartHrError::precondition(format!(
                "partial dependent update requires last_name, first_name, birth_at, gender, \
                 live_together_type and relation_id; missing: {}",
                missing.join(", ")
            )));
        }

        self.send_model(
            Method::PATCH,
            &["v1", "crews", crew_id, "dependents", dependent_id],
            dependent,
            SerializationPolicy::OmitUnsetAndNull,
        )
        .await
    }

    pub async fn delete_dependent(
        &self,
        crew_id: &str,
        dependent_id: &str,
    ) -> SmartHrResult<ApiResponse> {
        self.delete(&["v1", "crews", crew_id, "dependents", dependent_id])
            .await
    }

    /// `GET /v1/dependent_relations`
    pub async fn list_relations(&self, params: &ListParams) -> SmartHrResult<ApiResponse> {
        self.get(&["v1", "dependent_relations"], Some(&params.to_query()))
            .await
    }
}

fn annotate_empty_dependents(response: ApiResponse) -> ApiResponse {
    let empty = match &response {
        ApiResponse::NoContent { .. } => true,
        ApiResponse::Json(Value::Array(items)) => items.is_empty(),
        ApiResponse::Json(Value::Object(map)) => map
            .get("dependents")
            .and_then(Value::as_array)
            .is_some_and(Vec::is_empty),
        ApiResponse::Json(_) => false,
    };

    if empty {
        ApiResponse::Json(json!({
            "message": NO_DEPENDENTS_MESSAGE,
            "dependents": []
        }))
    } else {
        response
    }
}
