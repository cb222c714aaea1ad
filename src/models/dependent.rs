//! Dependent (family member) request models, nested under a crew.

use crate::error::{ValidationErrors, ValidationResult};
use crate::models::common::{Address, Attachment, Gender, LiveTogetherType, check_attachment};
use crate::models::field::Field;
use crate::models::validation::{RequestModel, check_one_of, check_raw_one_of};
use serde_json::{Map, Value};
use serde::{Deserialize, Serialize};

/// Default for the two support-type flags on create.
pub const SUPPORTED: &str = "supported";

/// Optional attributes shared by every dependent request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DependentDetails {
    pub is_spouse: Field<bool>,
    pub last_name_yomi: Field<String>,
    pub first_name_yomi: Field<String>,
    pub moved_at: Field<String>,
    pub job: Field<String>,
    pub basic_pension_number: Field<String>,
    pub basic_pension_number_image: Field<Attachment>,
    pub address: Field<Address>,
    pub tel_number: Field<String>,
    pub handicapped_type: Field<String>,
    pub handicapped_note_type: Field<String>,
    pub handicapped_note_delivery_at: Field<String>,
    pub handicapped_image: Field<Attachment>,
    pub remittance_to_relative: Field<bool>,
    pub remittance_image1: Field<Attachment>,
    pub remittance_image2: Field<Attachment>,
    pub remittance_image3: Field<Attachment>,
    pub international_student: Field<bool>,
    pub international_student_image: Field<Attachment>,
    pub social_insurance_support_type: Field<String>,
    pub income: Field<i64>,
    pub monthly_income: Field<i64>,
    pub soc_ins_qualified_at: Field<String>,
    pub soc_ins_qualified_reason: Field<String>,
    pub soc_ins_disqualified_at: Field<String>,
    pub disqualified_reason_type: Field<String>,
    pub disqualified_reason: Field<String>,
    pub tax_law_support_type: Field<String>,
    pub tax_deduction_income: Field<i64>,
    pub tax_deduction_qualified_at: Field<String>,
    pub tax_deduction_qualified_reason: Field<String>,
    pub tax_deduction_disqualified_at: Field<String>,
    pub tax_deduction_disqualified_reason_type: Field<String>,
    pub tax_deduction_disqualified_reason: Field<String>,
    pub maternity_handbook_image: Field<Attachment>,
    pub kinship_image: Field<Attachment>,
    pub code: Field<String>,
}

impl DependentDetails {
    fn check(&self, errors: &mut ValidationErrors) {
        let attachments = [
            ("basic_pension_number_image", &self.basic_pension_number_image),
            ("handicapped_image", &self.handicapped_image),
            ("remittance_image1", &self.remittance_image1),
            ("remittance_image2", &self.remittance_image2),
            ("remittance_image3", &self.remittance_image3),
            ("international_student_image", &self.international_student_image),
            ("maternity_handbook_image", &self.maternity_handbook_image),
            ("kinship_image", &self.kinship_image),
        ];
        for (field, attachment) in attachments {
            check_attachment(errors, field, attachment.value());
        }
    }
}

/// Body of `POST /v1/crews/{crew_id}/dependents`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DependentCreateRequest {
    pub relation_id: String,
    pub last_name: String,
    pub first_name: String,
    pub birth_at: String,
    /// `male` or `female`
    pub gender: String,
    pub live_together_type: LiveTogetherType,
    #[serde(flatten)]
    pub details: DependentDetails,
}

impl DependentCreateRequest {
    pub fn new(
        relation_id: impl Into<String>,
        last_name: impl Into<String>,
        first_name: impl Into<String>,
        birth_at: impl Into<String>,
        gender: Gender,
        live_together_type: LiveTogetherType,
    ) -> Self {
        Self {
            relation_id: relation_id.into(),
            last_name: last_name.into(),
            first_name: first_name.into(),
            birth_at: birth_at.into(),
            gender: gender.as_str().to_string(),
            live_together_type,
            details: DependentDetails::default(),
        }
    }

    /// Fill unset support types with `"supported"`, as create expects.
    pub fn with_support_defaults(mut self) -> Self {
        let details = &mut self.details;
        details.social_insurance_support_type =
            std::mem::take(&mut details.social_insurance_support_type)
                .or_default_value(SUPPORTED.to_string());
        details.tax_law_support_type = std::mem::take(&mut details.tax_law_support_type)
            .or_default_value(SUPPORTED.to_string());
        self
    }
}

impl RequestModel for DependentCreateRequest {
    const REQUIRED_FIELDS: &'static [&'static str] = &[
        "relation_id",
        "last_name",
        "first_name",
        "birth_at",
        "gender",
        "live_together_type",
    ];

    fn check_raw(map: &Map<String, Value>, errors: &mut ValidationErrors) {
        check_raw_one_of(errors, map, "gender", &Gender::ALLOWED);
    }

    fn validate(&self) -> ValidationResult<()> {
        let mut errors = ValidationErrors::new();
        check_one_of(&mut errors, "gender", &self.gender, &Gender::ALLOWED);
        self.details.check(&mut errors);
        errors.into_result()
    }
}

/// Body of `PUT /v1/crews/{crew_id}/dependents/{id}`.
pub type DependentUpdateRequest = DependentCreateRequest;

/// Body of `PATCH /v1/crews/{crew_id}/dependents/{id}`.
///
/// Every field decodes as optional, but the remote API rejects a PATCH that
/// lacks the identifying six; see [`has_required_patch_fields`](Self::has_required_patch_fields).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DependentPartialUpdateRequest {
    #[serde(default)]
    pub relation_id: Field<String>,
    #[serde(default)]
    pub last_name: Field<String>,
    #[serde(default)]
    pub first_name: Field<String>,
    #[serde(default)]
    pub birth_at: Field<String>,
    #[serde(default)]
    pub gender: Field<String>,
    #[serde(default)]
    pub live_together_type: Field<LiveTogetherType>,
    #[serde(flatten)]
    pub details: DependentDetails,
}

impl DependentPartialUpdateRequest {
    /// Field names that must be supplied and non-empty before a PATCH is sent.
    pub const PATCH_REQUIRED: [&'static str; 6] = [
        "last_name",
        "first_name",
        "birth_at",
        "gender",
        "live_together_type",
        "relation_id",
    ];

    /// Names from [`PATCH_REQUIRED`](Self::PATCH_REQUIRED) that are missing or empty.
    pub fn missing_patch_fields(&self) -> Vec<&'static str> {
        let filled = |field: &Field<String>| field.value().is_some_and(|v| !v.trim().is_empty());
        let checks = [
            filled(&self.last_name),
            filled(&self.first_name),
            filled(&self.birth_at),
            filled(&self.gender),
            self.live_together_type.is_present(),
            filled(&self.relation_id),
        ];
        Self::PATCH_REQUIRED
            .into_iter()
            .zip(checks)
            .filter_map(|(name, ok)| (!ok).then_some(name))
            .collect()
    }

    pub fn has_required_patch_fields(&self) -> bool {
        self.missing_patch_fields().is_empty()
    }
}

impl RequestModel for DependentPartialUpdateRequest {
    fn validate(&self) -> ValidationResult<()> {
        let mut errors = ValidationErrors::new();
        if let Some(gender) = self.gender.value() {
            check_one_of(&mut errors, "gender", gender, &Gender::ALLOWED);
        }
        self.details.check(&mut errors);
        errors.into_result()
    }
}
