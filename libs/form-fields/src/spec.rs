//! Field tables and compiled form schemas.

use crate::error::SchemaError;
use crate::issue::FieldIssue;
use crate::rules;
use crate::value::{FieldInput, FieldValue};
use std::collections::HashMap;

/// The value kind a field holds; drives casting and the default value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
    Flag,
    Ids,
}

impl FieldKind {
    /// The value an untouched field starts with.
    pub fn default_value(&self) -> FieldValue {
        match self {
            Self::Text => FieldValue::Text(String::new()),
            Self::Number => FieldValue::Number(f64::NAN),
            Self::Flag => FieldValue::Flag(false),
            Self::Ids => FieldValue::Ids(Vec::new()),
        }
    }

    /// Cast raw UI input into this kind's stored value.
    ///
    /// Numeric fields receive text from an input box; anything that does
    /// not parse becomes NaN so the finiteness rule reports it. Returns
    /// `None` when the input shape cannot feed this kind at all.
    pub fn cast(&self, input: FieldInput<'_>) -> Option<FieldValue> {
        match (self, input) {
            (Self::Text, FieldInput::Text(raw)) => Some(FieldValue::Text(raw.to_string())),
            (Self::Number, FieldInput::Text(raw)) => Some(FieldValue::Number(parse_number(raw))),
            (Self::Flag, FieldInput::Flag(b)) => Some(FieldValue::Flag(b)),
            (Self::Ids, FieldInput::Ids(ids)) => Some(FieldValue::Ids(ids)),
            _ => None,
        }
    }

    /// Whether a stored value matches this kind (used when seeding).
    pub fn accepts(&self, value: &FieldValue) -> bool {
        matches!(
            (self, value),
            (Self::Text, FieldValue::Text(_))
                | (Self::Number, FieldValue::Number(_))
                | (Self::Flag, FieldValue::Flag(_))
                | (Self::Ids, FieldValue::Ids(_))
        )
    }
}

fn parse_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return f64::NAN;
    }
    trimmed.parse().unwrap_or(f64::NAN)
}

/// The validation rule attached to a field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldRule {
    /// Always valid (bio, location, free-text languages, id lists).
    None,
    /// Trimmed value must be non-empty and at least `min_len` characters.
    Text { min_len: usize },
    /// `local@domain.tld`, at least two characters after the final dot.
    Email,
    /// Finite number within the inclusive bounds.
    Range { min: f64, max: f64 },
    /// Finite number with a lower bound only.
    AtLeast { min: f64 },
    /// 7–15 digits after stripping separators.
    Phone,
}

impl FieldRule {
    fn applies_to(&self, kind: FieldKind) -> bool {
        match self {
            Self::None => true,
            Self::Text { .. } | Self::Email | Self::Phone => kind == FieldKind::Text,
            Self::Range { .. } | Self::AtLeast { .. } => kind == FieldKind::Number,
        }
    }
}

/// One row of a form's field table.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    /// Human label used in issue messages.
    pub label: &'static str,
    pub kind: FieldKind,
    pub rule: FieldRule,
    pub required: bool,
}

impl FieldSpec {
    pub fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            rule: FieldRule::None,
            required: false,
        }
    }

    pub fn text(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Text)
    }

    pub fn number(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Number)
    }

    pub fn flag(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Flag)
    }

    pub fn ids(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Ids)
    }

    pub fn with_rule(mut self, rule: FieldRule) -> Self {
        self.rule = rule;
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Evaluate this field's rule against a value.
    ///
    /// Pure: same value, same outcome; no sibling state is consulted.
    pub fn validate(&self, value: &FieldValue) -> Option<FieldIssue> {
        rules::apply(&self.rule, self.label, value)
    }
}

/// Declarative form definition, checked once by [`FormConfig::compile`].
#[derive(Debug, Clone)]
pub struct FormConfig {
    name: &'static str,
    fields: Vec<FieldSpec>,
}

impl FormConfig {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, spec: FieldSpec) -> Self {
        self.fields.push(spec);
        self
    }

    /// Check the table and freeze it into a [`FormSchema`].
    pub fn compile(self) -> Result<FormSchema, SchemaError> {
        if self.fields.is_empty() {
            return Err(SchemaError::Empty(self.name));
        }

        let mut index = HashMap::with_capacity(self.fields.len());
        for (i, spec) in self.fields.iter().enumerate() {
            if index.insert(spec.name, i).is_some() {
                return Err(SchemaError::DuplicateField(spec.name));
            }
            if !spec.rule.applies_to(spec.kind) {
                return Err(SchemaError::RuleMismatch {
                    field: spec.name,
                    kind: spec.kind,
                });
            }
        }

        Ok(FormSchema {
            name: self.name,
            fields: self.fields,
            index,
        })
    }
}

/// Compiled, immutable field table for one form.
#[derive(Debug, Clone)]
pub struct FormSchema {
    name: &'static str,
    fields: Vec<FieldSpec>,
    index: HashMap<&'static str, usize>,
}

impl FormSchema {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn get(&self, name: &str) -> Option<&FieldSpec> {
        self.index.get(name).map(|&i| &self.fields[i])
    }

    pub fn required_fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|f| f.required)
    }
}
