//! Field tables for the admin forms, plus seeding from existing records
//! and payload extraction at submit time.
//!
//! Each form declares which fields are required (driving full
//! re-validation and submit-enablement); rule-carrying optional fields
//! are checked as the user touches them.

pub mod doctor;
pub mod insurance;

use crate::error::SubmitError;
use cura_fields::FormValues;

fn required_text(values: &FormValues, name: &str) -> Result<String, SubmitError> {
    values
        .trimmed_text(name)
        .map(str::to_string)
        .ok_or_else(|| SubmitError::Payload(format!("missing field: {name}")))
}

fn optional_text(values: &FormValues, name: &str) -> Option<String> {
    values.trimmed_text(name).map(str::to_string)
}

fn required_int(values: &FormValues, name: &str) -> Result<i64, SubmitError> {
    let number = values
        .number(name)
        .ok_or_else(|| SubmitError::Payload(format!("missing field: {name}")))?;
    if !number.is_finite() {
        return Err(SubmitError::Payload(format!("field is not a number: {name}")));
    }
    Ok(number.round() as i64)
}

fn required_number(values: &FormValues, name: &str) -> Result<f64, SubmitError> {
    let number = values
        .number(name)
        .ok_or_else(|| SubmitError::Payload(format!("missing field: {name}")))?;
    if !number.is_finite() {
        return Err(SubmitError::Payload(format!("field is not a number: {name}")));
    }
    Ok(number)
}

/// Finite number if the field was filled in, `None` otherwise.
fn optional_int(values: &FormValues, name: &str) -> Option<i64> {
    values
        .number(name)
        .filter(|n| n.is_finite())
        .map(|n| n.round() as i64)
}
