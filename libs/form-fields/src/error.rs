use crate::spec::FieldKind;
use thiserror::Error;

/// Problems detected while compiling a form definition.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("form '{0}' has no fields")]
    Empty(&'static str),

    #[error("duplicate field: {0}")]
    DuplicateField(&'static str),

    #[error("rule does not apply to {kind:?} field '{field}'")]
    RuleMismatch { field: &'static str, kind: FieldKind },
}
