//! Data-driven rule suite.
//!
//! Uses libtest-mimic to generate one test per manifest entry. Each entry
//! types a raw value into a field and compares the resulting issue code
//! against the expectation.
//!
//! ```bash
//! # Run all cases
//! cargo test -p cura-fields --test rule_suite
//!
//! # Filter by name
//! cargo test -p cura-fields --test rule_suite -- phone
//! ```

use cura_fields::{FieldInput, FieldRule, FieldSpec, FormConfig, FormSchema};
use libtest_mimic::{Arguments, Failed, Trial};
use serde::Deserialize;
use std::sync::OnceLock;

const MANIFEST: &str = include_str!("cases/rules.yaml");

#[derive(Debug, Deserialize)]
struct Case {
    name: String,
    field: String,
    input: String,
    expect: String,
}

/// All rule shapes used by the admin forms, in one table.
fn suite_schema() -> &'static FormSchema {
    static SCHEMA: OnceLock<FormSchema> = OnceLock::new();
    SCHEMA.get_or_init(|| {
        FormConfig::new("rule-suite")
            .field(
                FieldSpec::text("name", "name")
                    .with_rule(FieldRule::Text { min_len: 2 })
                    .required(),
            )
            .field(
                FieldSpec::text("specialization", "specialization")
                    .with_rule(FieldRule::Text { min_len: 1 })
                    .required(),
            )
            .field(FieldSpec::text("email", "email").with_rule(FieldRule::Email).required())
            .field(
                FieldSpec::text("phone_number", "phone number")
                    .with_rule(FieldRule::Phone)
                    .required(),
            )
            .field(
                FieldSpec::number("age", "age")
                    .with_rule(FieldRule::Range { min: 18.0, max: 100.0 })
                    .required(),
            )
            .field(
                FieldSpec::number("years_of_experience", "years of experience")
                    .with_rule(FieldRule::Range { min: 0.0, max: 80.0 })
                    .required(),
            )
            .field(
                FieldSpec::number("duration_minutes", "duration")
                    .with_rule(FieldRule::Range { min: 1.0, max: 1440.0 })
                    .required(),
            )
            .field(
                FieldSpec::number("fasting_hours", "fasting hours")
                    .with_rule(FieldRule::Range { min: 0.0, max: 72.0 })
                    .required(),
            )
            .field(
                FieldSpec::number("cost", "cost")
                    .with_rule(FieldRule::AtLeast { min: 1.0 })
                    .required(),
            )
            .field(FieldSpec::text("bio", "bio"))
            .field(FieldSpec::text("languages", "languages"))
            .compile()
            .expect("suite schema is valid")
    })
}

fn run_case(case: &Case) -> Result<(), Failed> {
    let spec = suite_schema()
        .get(&case.field)
        .ok_or_else(|| Failed::from(format!("unknown field in manifest: {}", case.field)))?;

    let value = spec
        .kind
        .cast(FieldInput::Text(&case.input))
        .ok_or_else(|| Failed::from(format!("field {} does not accept text input", case.field)))?;

    let actual = match spec.validate(&value) {
        None => "ok".to_string(),
        Some(issue) => issue.code.to_string(),
    };

    if actual == case.expect {
        Ok(())
    } else {
        Err(format!(
            "expected '{}', got '{}' for {}={:?}",
            case.expect, actual, case.field, case.input
        )
        .into())
    }
}

fn main() {
    let args = Arguments::from_args();

    let cases: Vec<Case> = serde_yaml::from_str(MANIFEST).expect("rules.yaml parses");

    let trials: Vec<Trial> = cases
        .into_iter()
        .map(|case| {
            let name = format!("{}::{}", case.field, case.name);
            Trial::test(name, move || run_case(&case))
        })
        .collect();

    libtest_mimic::run(&args, trials).exit();
}
