//! Pure rule evaluation.
//!
//! Every function maps a single value to at most one [`FieldIssue`]. No
//! rule reads another field's state.

use crate::issue::{FieldIssue, IssueCode};
use crate::spec::FieldRule;
use crate::value::FieldValue;
use regex::Regex;
use std::sync::OnceLock;

// local@domain.tld with at least two characters after the final dot.
fn email_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s.]{2,}$").expect("email pattern is valid")
    })
}

pub(crate) fn apply(rule: &FieldRule, label: &str, value: &FieldValue) -> Option<FieldIssue> {
    match rule {
        FieldRule::None => None,
        FieldRule::Text { min_len } => check_text(*min_len, label, value),
        FieldRule::Email => check_email(label, value),
        FieldRule::Range { min, max } => check_range(*min, Some(*max), label, value),
        FieldRule::AtLeast { min } => check_range(*min, None, label, value),
        FieldRule::Phone => check_phone(label, value),
    }
}

fn check_text(min_len: usize, label: &str, value: &FieldValue) -> Option<FieldIssue> {
    let Some(text) = value.as_text() else {
        return Some(FieldIssue::new(
            IssueCode::Malformed,
            format!("{} must be text", label),
        ));
    };

    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Some(FieldIssue::new(
            IssueCode::Required,
            format!("{} is required", label),
        ));
    }
    if trimmed.chars().count() < min_len {
        return Some(FieldIssue::new(
            IssueCode::TooShort,
            format!("{} must be at least {} characters", label, min_len),
        ));
    }
    None
}

fn check_email(label: &str, value: &FieldValue) -> Option<FieldIssue> {
    let Some(text) = value.as_text() else {
        return Some(FieldIssue::new(
            IssueCode::Malformed,
            format!("{} must be text", label),
        ));
    };

    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Some(FieldIssue::new(
            IssueCode::Required,
            format!("{} is required", label),
        ));
    }
    if !email_pattern().is_match(trimmed) {
        return Some(FieldIssue::new(
            IssueCode::Malformed,
            "enter a valid email address".to_string(),
        ));
    }
    None
}

// The finiteness check runs before any bound check so unparseable input is
// reported as "must be a number" rather than "out of range".
fn check_range(min: f64, max: Option<f64>, label: &str, value: &FieldValue) -> Option<FieldIssue> {
    let Some(number) = value.as_number() else {
        return Some(FieldIssue::new(
            IssueCode::Malformed,
            format!("{} must be a number", label),
        ));
    };

    if !number.is_finite() {
        return Some(FieldIssue::new(
            IssueCode::Malformed,
            format!("{} must be a number", label),
        ));
    }
    match max {
        Some(max) if number < min || number > max => Some(FieldIssue::new(
            IssueCode::OutOfRange,
            format!("{} must be between {} and {}", label, fmt_bound(min), fmt_bound(max)),
        )),
        None if number < min => Some(FieldIssue::new(
            IssueCode::OutOfRange,
            format!("{} must be at least {}", label, fmt_bound(min)),
        )),
        _ => None,
    }
}

fn check_phone(label: &str, value: &FieldValue) -> Option<FieldIssue> {
    let Some(text) = value.as_text() else {
        return Some(FieldIssue::new(
            IssueCode::Malformed,
            format!("{} must be text", label),
        ));
    };

    // Separators and punctuation are stripped before counting digits.
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.is_empty() {
        return Some(FieldIssue::new(
            IssueCode::Required,
            format!("{} is required", label),
        ));
    }
    if digits.len() < 7 {
        return Some(FieldIssue::new(
            IssueCode::TooShort,
            format!("{} must have at least 7 digits", label),
        ));
    }
    if digits.len() > 15 {
        return Some(FieldIssue::new(
            IssueCode::OutOfRange,
            format!("{} must have at most 15 digits", label),
        ));
    }
    None
}

fn fmt_bound(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        v.to_string()
    }
}
