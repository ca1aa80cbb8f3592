//! Per-dialog form state.

use crate::error::FlowError;
use cura_fields::{FieldInput, FieldIssue, FieldValue, FormSchema, FormValues};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Current values, per-field issues, and the in-flight flag for one form.
///
/// One instance per open dialog; nothing is shared across dialogs. The
/// in-flight flag lives behind an `Arc` so the submit guard can release it
/// on every exit path, including a dropped future.
#[derive(Debug)]
pub struct FormState {
    schema: Arc<FormSchema>,
    values: BTreeMap<&'static str, FieldValue>,
    issues: BTreeMap<&'static str, FieldIssue>,
    in_flight: Arc<AtomicBool>,
}

impl FormState {
    pub fn new(schema: Arc<FormSchema>) -> Self {
        let values = schema
            .fields()
            .iter()
            .map(|spec| (spec.name, spec.kind.default_value()))
            .collect();

        Self {
            schema,
            values,
            issues: BTreeMap::new(),
            in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    /// Store one field's input and recompute that field's issue only.
    ///
    /// Raw text for a numeric field is cast through the field's declared
    /// kind. Sibling fields are never re-validated here.
    pub fn set_field(&mut self, name: &str, input: FieldInput<'_>) -> Result<(), FlowError> {
        let spec = self
            .schema
            .get(name)
            .ok_or_else(|| FlowError::UnknownField(name.to_string()))?;

        let value = spec
            .kind
            .cast(input)
            .ok_or_else(|| FlowError::InputShape(name.to_string()))?;

        match spec.validate(&value) {
            Some(issue) => self.issues.insert(spec.name, issue),
            None => self.issues.remove(spec.name),
        };
        self.values.insert(spec.name, value);
        Ok(())
    }

    /// Replace every value from the seed (or kind defaults), clear all
    /// issues, and release the in-flight flag.
    ///
    /// Called once per dialog-open transition. Resetting twice with the
    /// same seed yields identical state.
    pub fn reset(&mut self, seed: Option<&FormValues>) {
        self.values = self
            .schema
            .fields()
            .iter()
            .map(|spec| {
                let value = seed
                    .and_then(|s| s.get(spec.name))
                    .filter(|v| spec.kind.accepts(v))
                    .cloned()
                    .unwrap_or_else(|| spec.kind.default_value());
                (spec.name, value)
            })
            .collect();
        self.issues.clear();
        self.in_flight.store(false, Ordering::Release);
    }

    /// Re-run every required field's rule against its current value.
    ///
    /// Replaces whatever was cached for those fields, so fields the user
    /// never touched are covered. Returns whether any issue remains.
    pub fn validate_all(&mut self) -> bool {
        for spec in self.schema.required_fields() {
            let value = self
                .values
                .get(spec.name)
                .cloned()
                .unwrap_or_else(|| spec.kind.default_value());
            match spec.validate(&value) {
                Some(issue) => self.issues.insert(spec.name, issue),
                None => self.issues.remove(spec.name),
            };
        }
        !self.issues.is_empty()
    }

    /// Whether a submission may start right now. Derived on every call.
    ///
    /// A blank required field with no recorded issue (never touched) still
    /// blocks: presence is checked from the values, not the issue map.
    pub fn can_submit(&self) -> bool {
        if self.is_in_flight() || !self.issues.is_empty() {
            return false;
        }
        self.schema
            .required_fields()
            .all(|spec| self.values.get(spec.name).is_some_and(FieldValue::is_present))
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    pub(crate) fn in_flight_handle(&self) -> Arc<AtomicBool> {
        self.in_flight.clone()
    }

    pub fn value(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    pub fn issue(&self, name: &str) -> Option<&FieldIssue> {
        self.issues.get(name)
    }

    pub fn issue_count(&self) -> usize {
        self.issues.len()
    }

    pub fn issues(&self) -> impl Iterator<Item = (&'static str, &FieldIssue)> {
        self.issues.iter().map(|(k, v)| (*k, v))
    }

    /// Snapshot of every field's current value.
    pub fn values(&self) -> FormValues {
        let mut snapshot = FormValues::new();
        for (name, value) in &self.values {
            snapshot.insert(name, value.clone());
        }
        snapshot
    }
}
