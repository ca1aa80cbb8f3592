//! Form state, submit gating, and dialog lifecycle.
//!
//! A dialog owns a [`ModalSession`]; the session owns a [`FormState`]
//! built from a compiled field table. Input events cast and validate one
//! field at a time; submission re-validates every required field, then
//! drives an async [`Mutation`] with an in-flight guard that is released
//! on every exit path. The enclosing shell only supplies the seed record,
//! an `on_success` callback, and close requests; visibility itself stays
//! outside.

pub mod error;
pub mod forms;
pub mod modal;
pub mod state;
pub mod submit;

pub use error::{FlowError, SubmitError};
pub use modal::{ModalPhase, ModalSession, SubmitOutcome};
pub use state::FormState;
pub use submit::Mutation;

// Re-export the value types callers hand us (for convenience)
pub use cura_fields::{FieldInput, FieldValue, FormValues};
