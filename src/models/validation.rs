//! Request model trait and the field validators shared by all models.
//!
//! Validators push into a [`ValidationErrors`] collector instead of returning
//! early, so one pass over a model reports every violated field.

use crate::error::{ValidationError, ValidationErrors, ValidationResult};
use crate::models::field::{Field, SerializationPolicy};
use chrono::NaiveDate;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Wire format for every date field.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Lowest accepted job title / grade rank.
pub const RANK_MIN: i64 = 1;

/// Highest accepted job title / grade rank.
pub const RANK_MAX: i64 = 99999;

/// Behaviour shared by every outbound request payload.
pub trait RequestModel: Serialize + DeserializeOwned {
    /// Top-level keys that must be present and non-null in JSON input.
    const REQUIRED_FIELDS: &'static [&'static str] = &[];

    /// Check every declared constraint, collecting all violations.
    fn validate(&self) -> ValidationResult<()>;

    /// Field checks run against the undecoded object when required keys are
    /// missing, so those errors are reported alongside the missing keys.
    fn check_raw(_map: &Map<String, Value>, _errors: &mut ValidationErrors) {}

    /// Decode and validate a model from JSON tool arguments.
    ///
    /// Missing required keys are reported together with whatever
    /// [`check_raw`](Self::check_raw) finds. Type mismatches are reported
    /// singly because the decoder stops at the first.
    fn from_value(value: Value) -> ValidationResult<Self> {
        let Value::Object(map) = &value else {
            return Err(ValidationError::invalid_input("expected a JSON object").into());
        };

        let mut errors = ValidationErrors::new();
        for field in Self::REQUIRED_FIELDS {
            if map.get(*field).is_none_or(Value::is_null) {
                errors.push(ValidationError::missing_required(*field));
            }
        }
        if !errors.is_empty() {
            Self::check_raw(map, &mut errors);
            return Err(errors);
        }

        let model: Self = serde_json::from_value(value)
            .map_err(|e| ValidationErrors::from(ValidationError::invalid_input(e.to_string())))?;
        model.validate()?;
        Ok(model)
    }

    /// Render the outbound JSON body.
    fn to_body(&self, policy: SerializationPolicy) -> Result<Value, serde_json::Error> {
        policy.render(self)
    }
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

pub fn check_date(errors: &mut ValidationErrors, field: &str, value: &str) {
    if parse_date(value).is_none() {
        errors.push(ValidationError::InvalidDateFormat {
            field: field.to_string(),
            value: value.to_string(),
        });
    }
}

pub fn check_optional_date(errors: &mut ValidationErrors, field: &str, value: &Field<String>) {
    if let Some(v) = value.value() {
        check_date(errors, field, v);
    }
}

pub fn check_rank(errors: &mut ValidationErrors, field: &str, value: i64) {
    if !(RANK_MIN..=RANK_MAX).contains(&value) {
        errors.push(ValidationError::OutOfRange {
            field: field.to_string(),
            value,
            min: RANK_MIN,
            max: RANK_MAX,
        });
    }
}

/// Department names are path-like on the remote side and may not contain `/`.
pub fn check_department_name(errors: &mut ValidationErrors, field: &str, value: &str) {
    if value.contains('/') {
        errors.push(ValidationError::ForbiddenCharacter {
            field: field.to_string(),
            character: '/',
        });
    }
}

pub fn check_one_of(errors: &mut ValidationErrors, field: &str, value: &str, allowed: &[&str]) {
    if !allowed.contains(&value) {
        errors.push(ValidationError::InvalidEnumValue {
            field: field.to_string(),
            value: value.to_string(),
            allowed: allowed.iter().map(ToString::to_string).collect(),
        });
    }
}

pub fn check_not_empty(errors: &mut ValidationErrors, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(ValidationError::EmptyField {
            field: field.to_string(),
        });
    }
}

/// Rank check on undecoded input. Non-integers are left to the decoder.
pub fn check_raw_rank(errors: &mut ValidationErrors, map: &Map<String, Value>, field: &str) {
    if let Some(rank) = map.get(field).and_then(Value::as_i64) {
        check_rank(errors, field, rank);
    }
}

pub fn check_raw_one_of(
    errors: &mut ValidationErrors,
    map: &Map<String, Value>,
    field: &str,
    allowed: &[&str],
) {
    if let Some(value) = map.get(field).and_then(Value::as_str) {
        check_one_of(errors, field, value, allowed);
    }
}
