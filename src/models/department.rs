//! Department request models.

use crate::error::{SmartHrError, SmartHrResult, ValidationErrors, ValidationResult};
use crate::models::field::Field;
use crate::models::validation::{RequestModel, check_date, check_department_name, parse_date};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Body of `POST /v1/departments`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentCreateRequest {
    pub name: String,
    #[serde(default)]
    pub position: Field<i64>,
    #[serde(default)]
    pub code: Field<String>,
    #[serde(default)]
    pub parent_id: Field<String>,
}

impl DepartmentCreateRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

impl RequestModel for DepartmentCreateRequest {
    const REQUIRED_FIELDS: &'static [&'static str] = &["name"];

    fn validate(&self) -> ValidationResult<()> {
        let mut errors = ValidationErrors::new();
        check_department_name(&mut errors, "name", &self.name);
        errors.into_result()
    }
}

/// Body of `PUT /v1/departments/{id}`. Same shape as create; sent with every
/// field present.
pub type DepartmentUpdateRequest = DepartmentCreateRequest;

/// Body of `PATCH /v1/departments/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentPartialUpdateRequest {
    #[serde(default)]
    pub name: Field<String>,
    #[serde(default)]
    pub position: Field<i64>,
    #[serde(default)]
    pub code: Field<String>,
    #[serde(default)]
    pub parent_id: Field<String>,
}

impl RequestModel for DepartmentPartialUpdateRequest {
    fn validate(&self) -> ValidationResult<()> {
        let mut errors = ValidationErrors::new();
        if let Some(name) = self.name.value() {
            check_department_name(&mut errors, "name", name);
        }
        errors.into_result()
    }
}

/// Body of `POST /v1/departments/{id}/discontinue`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentDiscontinueRequest {
    /// `YYYY-MM-DD`, strictly before the current date
    pub discontinued_date: String,
}

impl DepartmentDiscontinueRequest {
    pub fn new(discontinued_date: impl Into<String>) -> Self {
        Self {
            discontinued_date: discontinued_date.into(),
        }
    }

    /// Check the date format, then require the date to be strictly before `today`.
    ///
    /// A malformed date is a validation error; a same-day or future date is a
    /// precondition error.
    pub fn validate_on(&self, today: NaiveDate) -> SmartHrResult<()> {
        self.validate()?;
        self.ensure_in_past(today)
    }

    fn ensure_in_past(&self, today: NaiveDate) -> SmartHrResult<()> {
        match parse_date(&self.discontinued_date) {
            Some(date) if date < today => Ok(()),
            _ => Err(SmartHrError::precondition(format!(
                "discontinued_date {} must be before {today}; specify yesterday or earlier",
                self.discontinued_date
            ))),
        }
    }
}

impl RequestModel for DepartmentDiscontinueRequest {
    const REQUIRED_FIELDS: &'static [&'static str] = &["discontinued_date"];

    fn validate(&self) -> ValidationResult<()> {
        let mut errors = ValidationErrors::new();
        check_date(&mut errors, "discontinued_date", &self.discontinued_date);
        errors.into_result()
    }
}
