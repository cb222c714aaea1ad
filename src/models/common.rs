//! Value types shared by several request models.

use crate::error::{ValidationError, ValidationErrors, ValidationResult};
use crate::models::validation::check_not_empty;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Postal address block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    pub country_number: Option<String>,
    pub zip_code: Option<String>,
    pub pref: Option<String>,
    pub city: Option<String>,
    pub street: Option<String>,
    pub building: Option<String>,
    pub literal_yomi: Option<String>,
}

/// A file uploaded inline as Base64 text.
///
/// ```rust
/// use smarthr_mcp_server::models::Attachment;
///
/// let attachment = Attachment::from_bytes("card.png", b"\x89PNG");
/// assert_eq!(attachment.content, "iVBORw==");
/// assert!(attachment.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub file_name: String,
    /// Base64-encoded file content
    pub content: String,
}

impl Attachment {
    pub fn new(file_name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            content: content.into(),
        }
    }

    /// Encode raw file bytes into an attachment.
    pub fn from_bytes(file_name: impl Into<String>, bytes: &[u8]) -> Self {
        Self::new(file_name, STANDARD.encode(bytes))
    }

    /// Decode the attachment content back to bytes.
    pub fn decode(&self) -> Result<Vec<u8>, base64::DecodeError> {
        STANDARD.decode(self.content.as_bytes())
    }

    pub fn validate(&self) -> ValidationResult<()> {
        let mut errors = ValidationErrors::new();
        check_not_empty(&mut errors, "file_name", &self.file_name);
        if self.decode().is_err() {
            errors.push(ValidationError::InvalidBase64 {
                field: "content".to_string(),
            });
        }
        errors.into_result()
    }
}

/// Validate an optional nested attachment and file its violations under `field`.
pub(crate) fn check_attachment(
    errors: &mut ValidationErrors,
    field: &str,
    attachment: Option<&Attachment>,
) {
    if let Some(Err(nested)) = attachment.map(Attachment::validate) {
        errors.extend_nested(field, nested);
    }
}

/// Crew bank account registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankAccount {
    pub bank_code: String,
    pub bank_branch_code: String,
    pub account_type: String,
    pub account_number: String,
    pub account_holder_name: String,
    #[serde(default)]
    pub bankbook_image: Option<Attachment>,
    #[serde(default)]
    pub bank_account_setting_id: Option<String>,
}

impl BankAccount {
    pub fn validate(&self) -> ValidationResult<()> {
        let mut errors = ValidationErrors::new();
        check_not_empty(&mut errors, "bank_code", &self.bank_code);
        check_not_empty(&mut errors, "bank_branch_code", &self.bank_branch_code);
        check_not_empty(&mut errors, "account_type", &self.account_type);
        check_not_empty(&mut errors, "account_number", &self.account_number);
        check_not_empty(&mut errors, "account_holder_name", &self.account_holder_name);
        check_attachment(&mut errors, "bankbook_image", self.bankbook_image.as_ref());
        errors.into_result()
    }
}

/// Value of a tenant-defined custom field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CustomFieldValue {
    Integer(i64),
    Number(f64),
    Text(String),
}

/// A value for one custom field template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomField {
    pub template_id: String,
    #[serde(default)]
    pub value: Option<CustomFieldValue>,
    #[serde(default)]
    pub file_name: Option<String>,
}

impl CustomField {
    pub fn validate(&self) -> ValidationResult<()> {
        let mut errors = ValidationErrors::new();
        check_not_empty(&mut errors, "template_id", &self.template_id);
        errors.into_result()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Accepted wire literals.
    pub const ALLOWED: [&'static str; 2] = ["male", "female"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentStatus {
    Employed,
    Absent,
    Retired,
}

impl EmploymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Employed => "employed",
            Self::Absent => "absent",
            Self::Retired => "retired",
        }
    }
}

/// Built-in employment category (`emp_type`), distinct from tenant-defined
/// employment type records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmpType {
    BoardMember,
    FullTimer,
    ContractWorker,
    Permatemp,
    PartTimer,
    OutsourcingContractor,
    Etc,
}

impl EmpType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BoardMember => "board_member",
            Self::FullTimer => "full_timer",
            Self::ContractWorker => "contract_worker",
            Self::Permatemp => "permatemp",
            Self::PartTimer => "part_timer",
            Self::OutsourcingContractor => "outsourcing_contractor",
            Self::Etc => "etc",
        }
    }
}

/// Whether a dependent lives with the crew member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiveTogetherType {
    LivingTogether,
    LivingSeparately,
}

impl LiveTogetherType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LivingTogether => "living_together",
            Self::LivingSeparately => "living_separately",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

display_as_str!(Gender, EmploymentStatus, EmpType, LiveTogetherType);
