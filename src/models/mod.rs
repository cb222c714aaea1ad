//! Typed request payloads for every SmartHR operation.
//!
//! Each model implements [`RequestModel`], which decodes JSON tool arguments,
//! runs the model's validators and renders the outbound body under a
//! [`SerializationPolicy`].

pub mod classification;
pub mod common;
pub mod crew;
pub mod department;
pub mod dependent;
pub mod field;
pub mod query;
pub mod validation;

pub use classification::{
    EmploymentTypeCreateRequest, EmploymentTypePartialUpdateRequest, EmploymentTypeUpdateRequest,
    GradeCreateRequest, GradePartialUpdateRequest, GradeUpdateRequest, JobCategoryCreateRequest,
    JobCategoryPartialUpdateRequest, JobCategoryUpdateRequest, JobTitleCreateRequest,
    JobTitlePartialUpdateRequest, JobTitleUpdateRequest,
};
pub use common::{
    Address, Attachment, BankAccount, CustomField, CustomFieldValue, EmpType, EmploymentStatus,
    Gender, LiveTogetherType,
};
pub use crew::{CrewCreateRequest, CrewUpdateRequest};
pub use department::{
    DepartmentCreateRequest, DepartmentDiscontinueRequest, DepartmentPartialUpdateRequest,
    DepartmentUpdateRequest,
};
pub use dependent::{
    DependentCreateRequest, DependentDetails, DependentPartialUpdateRequest,
    DependentUpdateRequest,
};
pub use field::{Field, SerializationPolicy};
pub use query::{
    CrewInviteRequest, CrewListQuery, CrewSearchQuery, DepartmentListQuery, DependentListQuery,
    ListParams,
    QueryParams,
};
pub use validation::RequestModel;
