//! The add/edit insurance company form.

use super::{optional_text, required_text};
use crate::error::SubmitError;
use cura_fields::{FieldRule, FieldSpec, FieldValue, FormConfig, FormSchema, FormValues};
use cura_model::{InsuranceCompany, InsuranceCompanyPayload};
use std::sync::{Arc, OnceLock};

pub fn schema() -> Arc<FormSchema> {
    static SCHEMA: OnceLock<Arc<FormSchema>> = OnceLock::new();
    SCHEMA
        .get_or_init(|| {
            Arc::new(
                FormConfig::new("insurance-company")
                    .field(
                        FieldSpec::text("name", "name")
                            .with_rule(FieldRule::Text { min_len: 2 })
                            .required(),
                    )
                    .field(FieldSpec::text("email", "email").with_rule(FieldRule::Email).required())
                    .field(
                        FieldSpec::text("phone_number", "phone number")
                            .with_rule(FieldRule::Phone)
                            .required(),
                    )
                    .field(FieldSpec::text("description", "description"))
                    .field(FieldSpec::text("website", "website"))
                    .compile()
                    .expect("insurance company form definition is valid"),
            )
        })
        .clone()
}

pub fn seed(company: &InsuranceCompany) -> FormValues {
    let text = |s: &Option<String>| FieldValue::Text(s.clone().unwrap_or_default());

    FormValues::new()
        .with("name", FieldValue::Text(company.name.clone()))
        .with("email", FieldValue::Text(company.email.clone()))
        .with("phone_number", FieldValue::Text(company.phone_number.clone()))
        .with("description", text(&company.description))
        .with("website", text(&company.website))
}

pub fn payload(values: &FormValues) -> Result<InsuranceCompanyPayload, SubmitError> {
    Ok(InsuranceCompanyPayload {
        name: required_text(values, "name")?,
        email: required_text(values, "email")?,
        phone_number: required_text(values, "phone_number")?,
        description: optional_text(values, "description"),
        website: optional_text(values, "website"),
    })
}
