//! Lookup resources sharing one CRUD shape: employment types, job titles,
//! grades and job categories.

use crate::client::core::SmartHrClient;
use crate::client::response::ApiResponse;
use crate::error::SmartHrResult;
use crate::models::{
    EmploymentTypeCreateRequest, EmploymentTypePartialUpdateRequest, EmploymentTypeUpdateRequest,
    GradeCreateRequest, GradePartialUpdateRequest, GradeUpdateRequest, JobCategoryCreateRequest,
    JobCategoryPartialUpdateRequest, JobCategoryUpdateRequest, JobTitleCreateRequest,
    JobTitlePartialUpdateRequest, JobTitleUpdateRequest, ListParams, SerializationPolicy,
};
use reqwest::Method;

macro_rules! lookup_resource {
    (
        $collection:literal,
        $list:ident, $create:ident, $get:ident, $update:ident, $partial:ident, $delete:ident,
        $create_req:ty, $update_req:ty, $partial_req:ty
    ) => {
        impl SmartHrClient {
            #[doc = concat!("`GET /v1/", $collection, "`")]
            pub async fn $list(&self, params: &ListParams) -> SmartHrResult<ApiResponse> {
                self.get(&["v1", $collection], Some(&params.to_query())).await
            }

            #[doc = concat!("`POST /v1/", $collection, "`")]
            pub async fn $create(&self, request: &$create_req) -> SmartHrResult<ApiResponse> {
                self.send_model(
                    Method::POST,
                    &["v1", $collection],
                    request,
                    SerializationPolicy::OmitUnsetAndNull,
                )
                .await
            }

            #[doc = concat!("`GET /v1/", $collection, "/{id}`")]
            pub async fn $get(&self, id: &str) -> SmartHrResult<ApiResponse> {
                self.get(&["v1", $collection, id], None).await
            }

            #[doc = concat!("`PUT /v1/", $collection, "/{id}`, every field sent")]
            pub async fn $update(
                &self,
                id: &str,
                request: &$update_req,
            ) -> SmartHrResult<ApiResponse> {
                self.send_model(
                    Method::PUT,
                    &["v1", $collection, id],
                    request,
                    SerializationPolicy::IncludeAll,
                )
                .await
            }

            #[doc = concat!("`PATCH /v1/", $collection, "/{id}`, supplied fields only")]
            pub async fn $partial(
                &self,
                id: &str,
                request: &$partial_req,
            ) -> SmartHrResult<ApiResponse> {
                self.send_model(
                    Method::PATCH,
                    &["v1", $collection, id],
                    request,
                    SerializationPolicy::OmitUnsetAndNull,
                )
                .await
            }

            #[doc = concat!("`DELETE /v1/", $collection, "/{id}`")]
            pub async fn $delete(&self, id: &str) -> SmartHrResult<ApiResponse> {
                self.delete(&["v1", $collection, id]).await
            }
        }
    };
}

lookup_resource!(
    "employment_types",
    list_employment_types,
    create_employment_type,
    get_employment_type,
    update_employment_type,
    partial_update_employment_type,
    delete_employment_type,
    EmploymentTypeCreateRequest,
    EmploymentTypeUpdateRequest,
    EmploymentTypePartialUpdateRequest
);

lookup_resource!(
    "job_titles",
    list_job_titles,
    create_job_title,
    get_job_title,
    update_job_title,
    partial_update_job_title,
    delete_job_title,
    JobTitleCreateRequest,
    JobTitleUpdateRequest,
    JobTitlePartialUpdateRequest
);

lookup_resource!(
    "grades",
    list_grades,
    create_grade,
    get_grade,
    update_grade,
    partial_update_grade,
    delete_grade,
    GradeCreateRequest,
    GradeUpdateRequest,
    GradePartialUpdateRequest
);

lookup_resource!(
    "job_categories",
    list_job_categories,
    create_job_category,
    get_job_category,
    update_job_category,
    partial_update_job_category,
    delete_job_category,
    JobCategoryCreateRequest,
    JobCategoryUpdateRequest,
    JobCategoryPartialUpdateRequest
);
