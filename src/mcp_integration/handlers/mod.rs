//! MCP tool handlers
//!
//! Handlers are grouped by resource. Each one pulls its arguments out of the
//! JSON call, builds the typed request, runs one client operation and wraps
//! the outcome in a [`SmartHrToolResult`].

use crate::error::SmartHrError;
use crate::mcp_integration::core::SmartHrToolResult;
use crate::models::RequestModel;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Unwrap an argument result or return its error result from the handler.
macro_rules! try_arg {
    ($expr:expr) => {
        match $expr {
            Ok(value) => value,
            Err(result) => return result,
        }
    };
}

pub mod classification_ops;
pub mod crew_ops;
pub mod crew_profiles;
pub mod department_ops;
pub mod dependent_ops;

type ArgResult<T> = Result<T, SmartHrToolResult>;

pub(crate) fn required_str<'a>(arguments: &'a Value, name: &str) -> ArgResult<&'a str> {
    arguments
        .get(name)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| SmartHrToolResult::invalid_arguments(format!("Missing {name} parameter")))
}

pub(crate) fn optional_str<'a>(arguments: &'a Value, name: &str) -> Option<&'a str> {
    arguments.get(name).and_then(Value::as_str)
}

/// A nested request payload such as `data` or `dependent_data`.
pub(crate) fn required_object(arguments: &Value, name: &str) -> ArgResult<Value> {
    match arguments.get(name) {
        Some(value @ Value::Object(_)) => Ok(value.clone()),
        Some(_) => Err(SmartHrToolResult::invalid_arguments(format!(
            "{name} must be an object"
        ))),
        None => Err(SmartHrToolResult::invalid_arguments(format!(
            "Missing {name} parameter"
        ))),
    }
}

/// Decode plain arguments (queries, paging) into `T`.
pub(crate) fn decode_args<T: DeserializeOwned>(arguments: &Value) -> ArgResult<T> {
    let arguments = if arguments.is_null() {
        Value::Object(Default::default())
    } else {
        arguments.clone()
    };
    serde_json::from_value(arguments)
        .map_err(|e| SmartHrToolResult::invalid_arguments(format!("Invalid arguments: {e}")))
}

/// Decode and validate a request model, reporting every violation.
pub(crate) fn decode_model<M: RequestModel>(operation: &str, value: Value) -> ArgResult<M> {
    M::from_value(value)
        .map_err(|errors| SmartHrToolResult::failure(operation, &SmartHrError::Validation(errors)))
}
