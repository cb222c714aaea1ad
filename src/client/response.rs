//! Normalized result of one SmartHR API call.

use serde_json::{Value, json};

/// What a successful call returned.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    /// Decoded JSON body
    Json(Value),
    /// Success without a body (HTTP 204, or any 2xx with an empty body)
    NoContent { status: u16 },
}

impl ApiResponse {
    pub fn is_no_content(&self) -> bool {
        matches!(self, Self::NoContent { .. })
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::NoContent { .. } => None,
        }
    }

    /// JSON view of the response; a bodiless success becomes
    /// `{"status": <code>, "message": "No Content"}`.
    pub fn into_value(self) -> Value {
        match self {
            Self::Json(value) => value,
            Self::NoContent { status } => json!({
                "status": status,
                "message": "No Content"
            }),
        }
    }
}

impl From<ApiResponse> for Value {
    fn from(response: ApiResponse) -> Self {
        response.into_value()
    }
}
