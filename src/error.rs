//! Error types for SmartHR client and tool operations.
//!
//! Every failure a caller can observe is one of the [`SmartHrError`] variants.
//! Field-level problems found while checking a request model are collected into
//! [`ValidationErrors`] so that all violations are reported together.

use std::fmt;

/// Main error type for SmartHR operations.
#[derive(Debug, thiserror::Error)]
pub enum SmartHrError {
    /// Input failed a request model's declared constraints; nothing was sent
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    /// A business rule checked before building the request was violated
    #[error("Precondition failed: {message}")]
    Precondition { message: String },

    /// The remote API answered with a non-success status
    #[error("HTTP error {status}: {body}")]
    Http { status: u16, body: String },

    /// Connection-level failure (DNS, TLS, timeout, broken body stream)
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Required configuration is missing or malformed
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// A success response carried a body that is not valid JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A single field-level violation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Required field is absent or null
    #[error("Required field '{field}' is missing")]
    MissingRequiredField { field: String },

    /// Required field is present but empty
    #[error("Field '{field}' must not be empty")]
    EmptyField { field: String },

    /// Date value does not parse as YYYY-MM-DD
    #[error("Field '{field}' has invalid date '{value}', expected YYYY-MM-DD")]
    InvalidDateFormat { field: String, value: String },

    /// Numeric value outside its accepted range
    #[error("Field '{field}' value {value} is out of range {min}..={max}")]
    OutOfRange {
        field: String,
        value: i64,
        min: i64,
        max: i64,
    },

    /// String contains a character the remote API rejects
    #[error("Field '{field}' must not contain '{character}'")]
    ForbiddenCharacter { field: String, character: char },

    /// Value is not one of the accepted literals
    #[error("Field '{field}' has invalid value '{value}', allowed values: {allowed:?}")]
    InvalidEnumValue {
        field: String,
        value: String,
        allowed: Vec<String>,
    },

    /// Attachment content is not valid Base64
    #[error("Field '{field}' is not valid Base64 content")]
    InvalidBase64 { field: String },

    /// Input could not be decoded into the model's shape
    #[error("Invalid input: {details}")]
    InvalidInput { details: String },
}

impl ValidationError {
    /// Create a missing required field error
    pub fn missing_required(field: impl Into<String>) -> Self {
        Self::MissingRequiredField {
            field: field.into(),
        }
    }

    /// Create an invalid input error from a decoder message
    pub fn invalid_input(details: impl Into<String>) -> Self {
        Self::InvalidInput {
            details: details.into(),
        }
    }

    /// Name of the offending field, when the violation is tied to one
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MissingRequiredField { field }
            | Self::EmptyField { field }
            | Self::InvalidDateFormat { field, .. }
            | Self::OutOfRange { field, .. }
            | Self::ForbiddenCharacter { field, .. }
            | Self::InvalidEnumValue { field, .. }
            | Self::InvalidBase64 { field } => Some(field),
            Self::InvalidInput { .. } => None,
        }
    }
}

/// Every violation found while checking one request model.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, error: ValidationError) {
        self.0.push(error);
    }

    /// Append all violations from `other`, prefixing their field names with `prefix.`
    pub fn extend_nested(&mut self, prefix: &str, other: ValidationErrors) {
        for error in other.0 {
            self.0.push(prefix_field(prefix, error));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    /// Whether any violation refers to `field`
    pub fn contains_field(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field() == Some(field))
    }

    /// `Ok(())` when no violation was collected
    pub fn into_result(self) -> ValidationResult<()> {
        if self.0.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self(vec![error])
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

fn prefix_field(prefix: &str, error: ValidationError) -> ValidationError {
    let nest = |field: String| format!("{prefix}.{field}");
    match error {
        ValidationError::MissingRequiredField { field } => ValidationError::MissingRequiredField {
            field: nest(field),
        },
        ValidationError::EmptyField { field } => ValidationError::EmptyField { field: nest(field) },
        ValidationError::InvalidDateFormat { field, value } => ValidationError::InvalidDateFormat {
            field: nest(field),
            value,
        },
        ValidationError::OutOfRange {
            field,
            value,
            min,
            max,
        } => ValidationError::OutOfRange {
            field: nest(field),
            value,
            min,
            max,
        },
        ValidationError::ForbiddenCharacter { field, character } => {
            ValidationError::ForbiddenCharacter {
                field: nest(field),
                character,
            }
        }
        ValidationError::InvalidEnumValue {
            field,
            value,
            allowed,
        } => ValidationError::InvalidEnumValue {
            field: nest(field),
            value,
            allowed,
        },
        ValidationError::InvalidBase64 { field } => ValidationError::InvalidBase64 {
            field: nest(field),
        },
        other @ ValidationError::InvalidInput { .. } => other,
    }
}

// Convenience methods for creating common errors
impl SmartHrError {
    /// Create a precondition error
    pub fn precondition(message: impl Into<String>) -> Self {
        Self::Precondition {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http(status: u16, body: impl Into<String>) -> Self {
        Self::Http {
            status,
            body: body.into(),
        }
    }

    /// HTTP status carried by the error, if it came from the remote API
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Stable machine-readable code for tool results
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_FAILED",
            Self::Precondition { .. } => "PRECONDITION_FAILED",
            Self::Http { .. } => "HTTP_ERROR",
            Self::Transport(_) => "TRANSPORT_ERROR",
            Self::Configuration { .. } => "CONFIGURATION_ERROR",
            Self::Json(_) => "INVALID_RESPONSE",
        }
    }

    /// Whether the failure happened locally, before any request was sent
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::Precondition { .. } | Self::Configuration { .. }
        )
    }
}

// Result type aliases for convenience
pub type SmartHrResult<T> = Result<T, SmartHrError>;
pub type ValidationResult<T> = Result<T, ValidationErrors>;
