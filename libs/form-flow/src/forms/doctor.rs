//! The add/edit doctor form.

use super::{optional_int, optional_text, required_text};
use crate::error::SubmitError;
use cura_fields::{FieldRule, FieldSpec, FieldValue, FormConfig, FormSchema, FormValues};
use cura_model::{Doctor, DoctorPayload};
use std::sync::{Arc, OnceLock};

/// Name and email are required at intake; the rest of the profile is
/// optional but validated as soon as the user touches it.
pub fn schema() -> Arc<FormSchema> {
    static SCHEMA: OnceLock<Arc<FormSchema>> = OnceLock::new();
    SCHEMA
        .get_or_init(|| {
            Arc::new(
                FormConfig::new("doctor")
                    .field(
                        FieldSpec::text("name", "name")
                            .with_rule(FieldRule::Text { min_len: 2 })
                            .required(),
                    )
                    .field(FieldSpec::text("email", "email").with_rule(FieldRule::Email).required())
                    .field(
                        FieldSpec::text("specialization", "specialization")
                            .with_rule(FieldRule::Text { min_len: 1 }),
                    )
                    .field(
                        FieldSpec::text("phone_number", "phone number").with_rule(FieldRule::Phone),
                    )
                    .field(
                        FieldSpec::number("age", "age")
                            .with_rule(FieldRule::Range { min: 18.0, max: 100.0 }),
                    )
                    .field(
                        FieldSpec::number("years_of_experience", "years of experience")
                            .with_rule(FieldRule::Range { min: 0.0, max: 80.0 }),
                    )
                    .field(FieldSpec::text("bio", "bio"))
                    .field(FieldSpec::text("location", "location"))
                    .field(FieldSpec::text("profile_image_url", "profile image URL"))
                    .field(FieldSpec::text("nationality", "nationality"))
                    .field(FieldSpec::text("languages", "languages"))
                    .field(FieldSpec::ids("insurance_company_ids", "accepted insurers"))
                    .compile()
                    .expect("doctor form definition is valid"),
            )
        })
        .clone()
}

/// Initial values for editing an existing doctor.
pub fn seed(doctor: &Doctor) -> FormValues {
    let text = |s: &Option<String>| FieldValue::Text(s.clone().unwrap_or_default());
    let number = |n: &Option<i64>| FieldValue::Number(n.map_or(f64::NAN, |v| v as f64));

    let mut values = FormValues::new();
    values.insert("name", FieldValue::Text(doctor.name.clone()));
    values.insert("email", FieldValue::Text(doctor.email.clone()));
    values.insert("specialization", text(&doctor.specialization));
    values.insert("phone_number", text(&doctor.phone_number));
    values.insert("age", number(&doctor.age));
    values.insert("years_of_experience", number(&doctor.years_of_experience));
    values.insert("bio", text(&doctor.bio));
    values.insert("location", text(&doctor.location));
    values.insert("profile_image_url", text(&doctor.profile_image_url));
    values.insert("nationality", text(&doctor.nationality));
    values.insert("languages", text(&doctor.languages));
    values.insert(
        "insurance_company_ids",
        FieldValue::Ids(doctor.insurance_company_ids.clone()),
    );
    values
}

/// Build the create/update payload from the entered values.
pub fn payload(values: &FormValues) -> Result<DoctorPayload, SubmitError> {
    Ok(DoctorPayload {
        name: required_text(values, "name")?,
        email: required_text(values, "email")?,
        specialization: optional_text(values, "specialization"),
        phone_number: optional_text(values, "phone_number"),
        age: optional_int(values, "age"),
        years_of_experience: optional_int(values, "years_of_experience"),
        bio: optional_text(values, "bio"),
        location: optional_text(values, "location"),
        profile_image_url: optional_text(values, "profile_image_url"),
        nationality: optional_text(values, "nationality"),
        languages: optional_text(values, "languages"),
        insurance_company_ids: values
            .ids("insurance_company_ids")
            .map(<[_]>::to_vec)
            .unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn sample_doctor() -> Doctor {
        Doctor {
            id: Uuid::new_v4(),
            hospital_id: Uuid::new_v4(),
            name: "Greg House".to_string(),
            email: "house@ppth.example".to_string(),
            specialization: Some("diagnostics".to_string()),
            phone_number: Some("5551234567".to_string()),
            age: Some(52),
            years_of_experience: Some(25),
            bio: None,
            location: Some("Princeton".to_string()),
            profile_image_url: None,
            nationality: None,
            languages: Some("english".to_string()),
            insurance_company_ids: vec![Uuid::new_v4()],
            created_at: Utc::now(),
        }
    }

    #[test]
    fn seed_then_payload_round_trips() {
        let doctor = sample_doctor();
        let built = payload(&seed(&doctor)).unwrap();

        assert_eq!(built.name, doctor.name);
        assert_eq!(built.email, doctor.email);
        assert_eq!(built.specialization, doctor.specialization);
        assert_eq!(built.age, doctor.age);
        assert_eq!(built.insurance_company_ids, doctor.insurance_company_ids);
        // Unset profile fields stay unset rather than becoming "".
        assert_eq!(built.bio, None);
        assert_eq!(built.nationality, None);
    }

    #[test]
    fn payload_requires_name_and_email() {
        let err = payload(&FormValues::new()).unwrap_err();
        assert!(matches!(err, SubmitError::Payload(_)));
    }
}
