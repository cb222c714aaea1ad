//! Lookup resource tool handlers: employment types, job titles, grades and
//! job categories.

use super::{decode_args, decode_model, required_str};
use crate::mcp_integration::core::{SmartHrMcpServer, SmartHrToolResult};
use crate::mcp_integration::tools::{LookupAction, LookupKind};
use crate::models::{
    EmploymentTypeCreateRequest, EmploymentTypePartialUpdateRequest, EmploymentTypeUpdateRequest,
    GradeCreateRequest, GradePartialUpdateRequest, GradeUpdateRequest, JobCategoryCreateRequest,
    JobCategoryPartialUpdateRequest, JobCategoryUpdateRequest, JobTitleCreateRequest,
    JobTitlePartialUpdateRequest, JobTitleUpdateRequest, ListParams,
};
use serde_json::Value;

use LookupKind::{EmploymentType, Grade, JobCategory, JobTitle};

pub async fn handle_lookup(
    server: &SmartHrMcpServer,
    kind: LookupKind,
    action: LookupAction,
    arguments: Value,
) -> SmartHrToolResult {
    let tool = action.tool_name(kind);
    let operation = tool.trim_start_matches("smarthr_");
    let client = &server.client;

    let result = match action {
        LookupAction::List => {
            let params = try_arg!(decode_args::<ListParams>(&arguments));
            match kind {
                EmploymentType => client.list_employment_types(&params).await,
                JobTitle => client.list_job_titles(&params).await,
                Grade => client.list_grades(&params).await,
                JobCategory => client.list_job_categories(&params).await,
            }
        }
        LookupAction::Create => match kind {
            EmploymentType => {
                let request = try_arg!(decode_model::<EmploymentTypeCreateRequest>(operation, arguments));
                client.create_employment_type(&request).await
            }
            JobTitle => {
                let request = try_arg!(decode_model::<JobTitleCreateRequest>(operation, arguments));
                client.create_job_title(&request).await
            }
            Grade => {
                let request = try_arg!(decode_model::<GradeCreateRequest>(operation, arguments));
                client.create_grade(&request).await
            }
            JobCategory => {
                let request = try_arg!(decode_model::<JobCategoryCreateRequest>(operation, arguments));
                client.create_job_category(&request).await
            }
        },
        LookupAction::Get => {
            let id = try_arg!(required_str(&arguments, &kind.id_param()));
            match kind {
                EmploymentType => client.get_employment_type(id).await,
                JobTitle => client.get_job_title(id).await,
                Grade => client.get_grade(id).await,
                JobCategory => client.get_job_category(id).await,
            }
        }
        LookupAction::Update => {
            let id = try_arg!(required_str(&arguments, &kind.id_param())).to_string();
            match kind {
                EmploymentType => {
                    let request = try_arg!(decode_model::<EmploymentTypeUpdateRequest>(operation, arguments));
                    client.update_employment_type(&id, &request).await
                }
                JobTitle => {
                    let request = try_arg!(decode_model::<JobTitleUpdateRequest>(operation, arguments));
                    client.update_job_title(&id, &request).await
                }
                Grade => {
                    let request = try_arg!(decode_model::<GradeUpdateRequest>(operation, arguments));
                    client.update_grade(&id, &request).await
                }
                JobCategory => {
                    let request = try_arg!(decode_model::<JobCategoryUpdateRequest>(operation, arguments));
                    client.update_job_category(&id, &request).await
                }
            }
        }
        LookupAction::PartialUpdate => {
            let id = try_arg!(required_str(&arguments, &kind.id_param())).to_string();
            match kind {
                EmploymentType => {
                    let request =
                        try_arg!(decode_model::<EmploymentTypePartialUpdateRequest>(operation, arguments));
                    client.partial_update_employment_type(&id, &request).await
                }
                JobTitle => {
                    let request =
                        try_arg!(decode_model::<JobTitlePartialUpdateRequest>(operation, arguments));
                    client.partial_update_job_title(&id, &request).await
                }
                Grade => {
                    let request =
                        try_arg!(decode_model::<GradePartialUpdateRequest>(operation, arguments));
                    client.partial_update_grade(&id, &request).await
                }
                JobCategory => {
                    let request =
                        try_arg!(decode_model::<JobCategoryPartialUpdateRequest>(operation, arguments));
                    client.partial_update_job_category(&id, &request).await
                }
            }
        }
        LookupAction::Delete => {
            let id = try_arg!(required_str(&arguments, &kind.id_param()));
            match kind {
                EmploymentType => client.delete_employment_type(id).await,
                JobTitle => client.delete_job_title(id).await,
                Grade => client.delete_grade(id).await,
                JobCategory => client.delete_job_category(id).await,
            }
        }
    };

    SmartHrToolResult::from_result(operation, result)
}
