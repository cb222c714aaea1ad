//! Request models for the lookup resources: employment types, job titles,
//! grades and job categories.

use crate::error::{ValidationErrors, ValidationResult};
use crate::models::field::Field;
use crate::models::validation::{RequestModel, check_rank, check_raw_rank};
use serde_json::{Map, Value};
use serde::{Deserialize, Serialize};

/// Requests with nothing to check beyond their shape.
macro_rules! shape_only {
    ($($model:ty => [$($required:literal),*]),* $(,)?) => {
        $(impl RequestModel for $model {
            const REQUIRED_FIELDS: &'static [&'static str] = &[$($required),*];

            fn validate(&self) -> ValidationResult<()> {
                Ok(())
            }
        })*
    };
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmploymentTypeCreateRequest {
    pub name: String,
    #[serde(default)]
    pub code: Field<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmploymentTypeUpdateRequest {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmploymentTypePartialUpdateRequest {
    #[serde(default)]
    pub name: Field<String>,
    #[serde(default)]
    pub code: Field<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobTitleCreateRequest {
    pub name: String,
    /// 1..=99999
    pub rank: i64,
    #[serde(default)]
    pub code: Field<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobTitleUpdateRequest {
    pub name: String,
    pub rank: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobTitlePartialUpdateRequest {
    #[serde(default)]
    pub name: Field<String>,
    #[serde(default)]
    pub rank: Field<i64>,
    #[serde(default)]
    pub code: Field<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeCreateRequest {
    pub name: String,
    /// 1..=99999
    pub rank: i64,
}

pub type GradeUpdateRequest = GradeCreateRequest;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradePartialUpdateRequest {
    #[serde(default)]
    pub name: Field<String>,
    #[serde(default)]
    pub rank: Field<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobCategoryCreateRequest {
    pub name: String,
}

pub type JobCategoryUpdateRequest = JobCategoryCreateRequest;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobCategoryPartialUpdateRequest {
    #[serde(default)]
    pub name: Field<String>,
}

shape_only! {
    EmploymentTypeCreateRequest => ["name"],
    EmploymentTypeUpdateRequest => ["name"],
    EmploymentTypePartialUpdateRequest => [],
    JobCategoryCreateRequest => ["name"],
    JobCategoryPartialUpdateRequest => [],
}

impl RequestModel for JobTitleCreateRequest {
    const REQUIRED_FIELDS: &'static [&'static str] = &["name", "rank"];

    fn check_raw(map: &Map<String, Value>, errors: &mut ValidationErrors) {
        check_raw_rank(errors, map, "rank");
    }

    fn validate(&self) -> ValidationResult<()> {
        let mut errors = ValidationErrors::new();
        check_rank(&mut errors, "rank", self.rank);
        errors.into_result()
    }
}

impl RequestModel for JobTitleUpdateRequest {
    const REQUIRED_FIELDS: &'static [&'static str] = &["name", "rank"];

    fn check_raw(map: &Map<String, Value>, errors: &mut ValidationErrors) {
        check_raw_rank(errors, map, "rank");
    }

    fn validate(&self) -> ValidationResult<()> {
        let mut errors = ValidationErrors::new();
        check_rank(&mut errors, "rank", self.rank);
        errors.into_result()
    }
}

impl RequestModel for JobTitlePartialUpdateRequest {
    fn validate(&self) -> ValidationResult<()> {
        let mut errors = ValidationErrors::new();
        if let Some(rank) = self.rank.value() {
            check_rank(&mut errors, "rank", *rank);
        }
        errors.into_result()
    }
}

impl RequestModel for GradeCreateRequest {
    const REQUIRED_FIELDS: &'static [&'static str] = &["name", "rank"];

    fn check_raw(map: &Map<String, Value>, errors: &mut ValidationErrors) {
        check_raw_rank(errors, map, "rank");
    }

    fn validate(&self) -> ValidationResult<()> {
        let mut errors = ValidationErrors::new();
        check_rank(&mut errors, "rank", self.rank);
        errors.into_result()
    }
}

impl RequestModel for GradePartialUpdateRequest {
    fn validate(&self) -> ValidationResult<()> {
        let mut errors = ValidationErrors::new();
        if let Some(rank) = self.rank.value() {
            check_rank(&mut errors, "rank", *rank);
        }
        errors.into_result()
    }
}
