//! Crew (employee) request model.
//!
//! Every attribute is optional; the same shape serves create (POST) and
//! update (PATCH), both sent with unset and null members omitted.

use crate::error::{ValidationErrors, ValidationResult};
use crate::models::common::{
    Address, Attachment, BankAccount, CustomField, EmpType, EmploymentStatus, Gender,
    check_attachment,
};
use crate::models::field::Field;
use crate::models::validation::{RequestModel, check_optional_date};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrewCreateRequest {
    pub last_name: Field<String>,
    pub first_name: Field<String>,
    pub last_name_yomi: Field<String>,
    pub first_name_yomi: Field<String>,
    pub email: Field<String>,
    pub gender: Field<Gender>,
    pub birth_at: Field<String>,
    pub employment_type_id: Field<String>,
    pub emp_type: Field<EmpType>,
    pub department_ids: Field<Vec<String>>,
    pub department: Field<String>,
    pub positions: Field<Vec<String>>,
    pub position: Field<String>,
    pub emp_status: Field<EmploymentStatus>,
    pub entered_at: Field<String>,
    pub resigned_at: Field<String>,
    pub custom_fields: Field<Vec<CustomField>>,

    pub user_id: Field<String>,
    pub biz_establishment_id: Field<String>,
    pub emp_code: Field<String>,

    pub business_last_name: Field<String>,
    pub business_first_name: Field<String>,
    pub business_last_name_yomi: Field<String>,
    pub business_first_name_yomi: Field<String>,

    pub tel_number: Field<String>,
    pub address: Field<Address>,
    pub address_head_of_family: Field<String>,
    pub address_relation_name: Field<String>,

    pub emergency_relation_name: Field<String>,
    pub emergency_last_name: Field<String>,
    pub emergency_first_name: Field<String>,
    pub emergency_last_name_yomi: Field<String>,
    pub emergency_first_name_yomi: Field<String>,
    pub emergency_tel_number: Field<String>,
    pub emergency_address: Field<Address>,

    pub resident_card_address: Field<Address>,
    pub resident_card_address_head_of_family: Field<String>,
    pub resident_card_address_relation_name: Field<String>,

    pub grade: Field<String>,
    pub job_category: Field<String>,
    pub occupation: Field<String>,
    pub resigned_reason: Field<String>,

    pub emp_ins_insured_person_number: Field<String>,
    pub emp_ins_insured_person_number_unknown_reason_type: Field<String>,
    pub emp_ins_qualified_at: Field<String>,
    pub emp_ins_disqualified_at: Field<String>,

    pub previous_workplace: Field<String>,
    pub previous_employment_start_on: Field<String>,
    pub previous_employment_end_on: Field<String>,

    pub soc_ins_insured_person_number: Field<i64>,
    pub hel_ins_insured_person_number: Field<i64>,
    pub basic_pension_number: Field<String>,
    pub first_enrolling_in_emp_pns_ins_flag: Field<bool>,
    pub basic_pension_number_unknown_reason_type: Field<String>,

    pub first_workplace: Field<String>,
    pub first_workplace_address_text: Field<String>,
    pub first_employment_start_on: Field<String>,
    pub first_employment_end_on: Field<String>,

    pub last_workplace: Field<String>,
    pub last_workplace_address_text: Field<String>,
    pub last_employment_start_on: Field<String>,
    pub last_employment_end_on: Field<String>,

    pub soc_ins_qualified_at: Field<String>,
    pub soc_ins_disqualified_at: Field<String>,

    pub having_spouse: Field<bool>,
    pub spouse_yearly_income: Field<i64>,

    pub monthly_income_currency: Field<i64>,
    pub monthly_income_goods: Field<i64>,
    pub monthly_standard_income_updated_at: Field<String>,
    pub monthly_standard_income_hel: Field<i64>,
    pub monthly_standard_income_pns: Field<i64>,

    pub nearest_station_and_line: Field<String>,
    pub commutation_1_expenses: Field<i64>,
    pub commutation_1_period: Field<String>,
    pub commutation_1_single_fare: Field<i64>,
    pub commutation_2_expenses: Field<i64>,
    pub commutation_2_period: Field<String>,
    pub commutation_2_single_fare: Field<i64>,

    pub foreign_resident_last_name: Field<String>,
    pub foreign_resident_first_name: Field<String>,
    pub foreign_resident_middle_name: Field<String>,
    pub foreign_resident_card_number: Field<String>,
    pub nationality_code: Field<String>,
    pub resident_status_type: Field<String>,
    pub resident_status_other_reason: Field<String>,
    pub resident_end_at: Field<String>,
    pub having_ex_activity_permission: Field<String>,
    pub other_be_workable_type: Field<String>,
    pub contract_type: Field<String>,
    pub contract_start_on: Field<String>,
    pub contract_end_on: Field<String>,
    pub contract_renewal_type: Field<String>,
    pub tax_cd: Field<String>,
    pub handicapped_type: Field<String>,
    pub handicapped_note_type: Field<String>,
    pub handicapped_note_delivery_at: Field<String>,

    pub working_student_flag: Field<bool>,
    pub school_name: Field<String>,
    pub enrolled_at: Field<String>,
    pub working_student_income: Field<i64>,

    pub employment_income_flag: Field<bool>,
    pub business_income_flag: Field<bool>,
    // Remote attribute name carries the typo.
    pub devidend_income_flag: Field<bool>,
    pub estate_income_flag: Field<bool>,

    pub widow_type: Field<String>,
    pub widow_reason_type: Field<String>,
    pub widow_memo: Field<String>,

    pub payment_period_id: Field<String>,

    pub profile_image: Field<Attachment>,
    pub resume1: Field<Attachment>,
    pub resume2: Field<Attachment>,
    pub identity_card_image1: Field<Attachment>,
    pub identity_card_image2: Field<Attachment>,
    pub address_image: Field<Attachment>,
    pub emp_ins_insured_person_number_image: Field<Attachment>,
    pub basic_pension_number_image: Field<Attachment>,
    pub foreign_resident_card_image1: Field<Attachment>,
    pub foreign_resident_card_image2: Field<Attachment>,
    pub handicapped_image: Field<Attachment>,
    pub student_card_image: Field<Attachment>,

    pub bank_accounts: Field<Vec<BankAccount>>,
}

/// Body of `PATCH /v1/crews/{id}`.
pub type CrewUpdateRequest = CrewCreateRequest;

impl CrewCreateRequest {
    fn dates(&self) -> [(&'static str, &Field<String>); 7] {
        [
            ("birth_at", &self.birth_at),
            ("entered_at", &self.entered_at),
            ("resigned_at", &self.resigned_at),
            ("first_employment_start_on", &self.first_employment_start_on),
            ("first_employment_end_on", &self.first_employment_end_on),
            ("last_employment_start_on", &self.last_employment_start_on),
            ("last_employment_end_on", &self.last_employment_end_on),
        ]
    }

    fn attachments(&self) -> [(&'static str, &Field<Attachment>); 12] {
        [
            ("profile_image", &self.profile_image),
            ("resume1", &self.resume1),
            ("resume2", &self.resume2),
            ("identity_card_image1", &self.identity_card_image1),
            ("identity_card_image2", &self.identity_card_image2),
            ("address_image", &self.address_image),
            (
                "emp_ins_insured_person_number_image",
                &self.emp_ins_insured_person_number_image,
            ),
            ("basic_pension_number_image", &self.basic_pension_number_image),
            ("foreign_resident_card_image1", &self.foreign_resident_card_image1),
            ("foreign_resident_card_image2", &self.foreign_resident_card_image2),
            ("handicapped_image", &self.handicapped_image),
            ("student_card_image", &self.student_card_image),
        ]
    }
}

impl RequestModel for CrewCreateRequest {
    fn validate(&self) -> ValidationResult<()> {
        let mut errors = ValidationErrors::new();

        for (field, value) in self.dates() {
            check_optional_date(&mut errors, field, value);
        }
        for (field, attachment) in self.attachments() {
            check_attachment(&mut errors, field, attachment.value());
        }

        if let Some(accounts) = self.bank_accounts.value() {
            for (i, account) in accounts.iter().enumerate() {
                if let Err(nested) = account.validate() {
                    errors.extend_nested(&format!("bank_accounts[{i}]"), nested);
                }
            }
        }
        if let Some(fields) = self.custom_fields.value() {
            for (i, field) in fields.iter().enumerate() {
                if let Err(nested) = field.validate() {
                    errors.extend_nested(&format!("custom_fields[{i}]"), nested);
                }
            }
        }

        errors.into_result()
    }
}
