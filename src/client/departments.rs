//! `/v1/departments` operations.

use crate::client::core::SmartHrClient;
use crate::client::response::ApiResponse;
use crate::error::SmartHrResult;
use crate::models::{
    DepartmentCreateRequest, DepartmentDiscontinueRequest, DepartmentListQuery,
    DepartmentPartialUpdateRequest, DepartmentUpdateRequest, RequestModel, SerializationPolicy,
};
use chrono::{Local, NaiveDate};
use reqwest::Method;
use serde_json::json;

const DEPARTMENTS: [&str; 2] = ["v1", "departments"];

/// Message returned when the discontinue call succeeds without a body.
pub const DEPARTMENT_DISCONTINUED_MESSAGE: &str = "Department discontinued successfully";

impl SmartHrClient {
    pub async fn create_department(
        &self,
        department: &DepartmentCreateRequest,
    ) -> SmartHrResult<ApiResponse> {
        self.send_model(
            Method::POST,
            &DEPARTMENTS,
            department,
            SerializationPolicy::OmitUnsetAndNull,
        )
        .await
    }

    pub async fn get_department(&self, department_id: &str) -> SmartHrResult<ApiResponse> {
        self.get(&["v1", "departments", department_id], None).await
    }

    pub async fn list_departments(&self, query: &DepartmentListQuery) -> SmartHrResult<ApiResponse> {
        self.get(&DEPARTMENTS, Some(&query.to_query())).await
    }

    /// Replace a department with PUT; omitted optional fields are sent as null.
    pub async fn update_department(
        &self,
        department_id: &str,
        department: &DepartmentUpdateRequest,
    ) -> SmartHrResult<ApiResponse> {
        self.send_model(
            Method::PUT,
            &["v1", "departments", department_id],
            department,
            SerializationPolicy::IncludeAll,
        )
        .await
    }

    pub async fn partial_update_department(
        &self,
        department_id: &str,
        department: &DepartmentPartialUpdateRequest,
    ) -> SmartHrResult<ApiResponse> {
        self.send_model(
            Method::PATCH,
            &["v1", "departments", department_id],
            department,
            SerializationPolicy::OmitUnsetAndNull,
        )
        .await
    }

    /// Close a department as of a past date.
    ///
    /// # Errors
    ///
    /// A malformed date is a validation error and a date that is today or
    /// later is a precondition error; neither sends a request.
    pub async fn discontinue_department(
        &self,
        department_id: &str,
        request: &DepartmentDiscontinueRequest,
    ) -> SmartHrResult<ApiResponse> {
        self.discontinue_department_on(department_id, request, Local::now().date_naive())
            .await
    }

    /// [`discontinue_department`](Self::discontinue_department) with an explicit current date.
    ///
    /// A bodiless success becomes `{"status": <code>, "message": DEPARTMENT_DISCONTINUED_MESSAGE}`;
    /// a JSON body is returned unchanged.
    pub async fn discontinue_department_on(
        &self,
        department_id: &str,
        request: &DepartmentDiscontinueRequest,
        today: NaiveDate,
    ) -> SmartHrResult<ApiResponse> {
        request.validate_on(today)?;
        let body = request.to_body(SerializationPolicy::IncludeAll)?;
        let response = self
            .send(
                Method::POST,
                &["v1", "departments", department_id, "discontinue"],
                None,
                Some(body),
            )
            .await?;

        Ok(match response {
            ApiResponse::NoContent { status } => ApiResponse::Json(json!({
                "status": status,
                "message": DEPARTMENT_DISCONTINUED_MESSAGE
            })),
            json => json,
        })
    }
}
