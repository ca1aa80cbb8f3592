//! Field definitions and validation rules for admin forms.
//!
//! Each form declares a static table of [`FieldSpec`]s: the field's value
//! kind (which drives input casting), its validation rule, and whether it
//! is required. A [`FormConfig`] is checked once by [`FormConfig::compile`]
//! into an immutable [`FormSchema`]; validation itself is pure, so the
//! same value always produces the same [`FieldIssue`], with no reads of
//! sibling fields.

pub mod error;
pub mod issue;
mod rules;
pub mod spec;
pub mod value;

pub use error::SchemaError;
pub use issue::{FieldIssue, IssueCode};
pub use spec::{FieldKind, FieldRule, FieldSpec, FormConfig, FormSchema};
pub use value::{FieldInput, FieldValue, FormValues};
