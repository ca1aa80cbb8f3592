//! Dialog lifecycle around a form.

use crate::error::{FlowError, SubmitError};
use crate::state::FormState;
use crate::submit::{Mutation, SubmitGuard};
use cura_fields::{FieldInput, FormSchema, FormValues};
use std::sync::Arc;
use uuid::Uuid;

/// Where the dialog currently is.
///
/// `Submitting` is derived from the in-flight flag rather than stored, so
/// a cancelled submission can never strand the dialog in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalPhase {
    Closed,
    Editing,
    Submitting,
    /// The last submission failed; values are intact and editing resumes
    /// on the next field change.
    Failed,
}

/// What a submission attempt did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The mutation ran and succeeded; the dialog closed and reset.
    Completed,
    /// Validation found issues; nothing was sent.
    Rejected { issues: usize },
    /// Nothing to do: the dialog is closed or a submission is already in
    /// flight.
    Skipped,
}

/// One dialog instance: lifecycle phases, the form, and the edit target.
///
/// The enclosing shell owns visibility; this session owns everything else.
/// Transitions:
///
/// - `open_blank` / `open_for`: Closed → Editing, with exactly one reset.
/// - `request_close`: refused while Submitting, otherwise → Closed.
/// - `submit`: Editing|Failed → Submitting → Closed on success, Failed on
///   a remote error.
#[derive(Debug)]
pub struct ModalSession {
    form: FormState,
    open: bool,
    target: Option<Uuid>,
    failure: Option<String>,
}

impl ModalSession {
    pub fn new(schema: Arc<FormSchema>) -> Self {
        Self {
            form: FormState::new(schema),
            open: false,
            target: None,
            failure: None,
        }
    }

    pub fn phase(&self) -> ModalPhase {
        if !self.open {
            ModalPhase::Closed
        } else if self.form.is_in_flight() {
            ModalPhase::Submitting
        } else if self.failure.is_some() {
            ModalPhase::Failed
        } else {
            ModalPhase::Editing
        }
    }

    /// Open in create mode with kind defaults.
    ///
    /// Opening an already-open dialog is a no-op, which keeps the reset to
    /// exactly one per closed→open transition.
    pub fn open_blank(&mut self) -> bool {
        self.open_with(None, None)
    }

    /// Open in edit mode, seeded from an existing record's values.
    pub fn open_for(&mut self, target: Uuid, seed: &FormValues) -> bool {
        self.open_with(Some(target), Some(seed))
    }

    fn open_with(&mut self, target: Option<Uuid>, seed: Option<&FormValues>) -> bool {
        if self.open {
            return false;
        }
        self.target = target;
        self.failure = None;
        self.form.reset(seed);
        self.open = true;
        tracing::debug!(form = self.form.schema().name(), editing = target.is_some(), "dialog opened");
        true
    }

    /// Whether the close/cancel controls should be enabled right now.
    pub fn can_close(&self) -> bool {
        !self.form.is_in_flight()
    }

    /// Close the dialog and discard its state.
    ///
    /// Refused while a mutation is in flight: the dialog defers closing
    /// until the submission settles. Returns whether it closed.
    pub fn request_close(&mut self) -> bool {
        if !self.open {
            return true;
        }
        if self.form.is_in_flight() {
            tracing::debug!(form = self.form.schema().name(), "close deferred until submission settles");
            return false;
        }
        self.open = false;
        self.target = None;
        self.failure = None;
        self.form.reset(None);
        true
    }

    /// Store one field's input. Allowed while a submission is in flight,
    /// since the rest of the form stays editable. Correcting input clears
    /// the form-level failure from the previous attempt.
    pub fn set_field(&mut self, name: &str, input: FieldInput<'_>) -> Result<(), FlowError> {
        self.form.set_field(name, input)?;
        self.failure = None;
        Ok(())
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn target(&self) -> Option<Uuid> {
        self.target
    }

    /// Form-level failure from the last submission, for display separate
    /// from the per-field issues.
    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    pub fn can_submit(&self) -> bool {
        self.open && self.form.can_submit()
    }

    /// Run one submission attempt.
    ///
    /// Order of operations: preflight (before the in-flight flag is
    /// touched), full re-validation of required fields, guard acquisition
    /// by compare-and-swap, then exactly one `run` call. `on_success`
    /// fires before the flag is released; a remote failure is recorded on
    /// the session and propagated to the caller, with field values intact.
    pub async fn submit<M, F>(
        &mut self,
        mutation: &M,
        on_success: F,
    ) -> Result<SubmitOutcome, SubmitError>
    where
        M: Mutation,
        F: FnOnce(M::Output),
    {
        if !self.open {
            return Ok(SubmitOutcome::Skipped);
        }

        mutation.preflight()?;

        if self.form.validate_all() {
            let issues = self.form.issue_count();
            tracing::debug!(
                form = self.form.schema().name(),
                issues,
                "submission rejected by validation"
            );
            return Ok(SubmitOutcome::Rejected { issues });
        }

        let Some(guard) = SubmitGuard::acquire(self.form.in_flight_handle()) else {
            tracing::debug!(
                form = self.form.schema().name(),
                "submission already in flight, ignoring"
            );
            return Ok(SubmitOutcome::Skipped);
        };

        let values = self.form.values();
        tracing::debug!(form = self.form.schema().name(), "submitting");

        match mutation.run(&values).await {
            Ok(output) => {
                on_success(output);
                self.open = false;
                self.target = None;
                self.failure = None;
                self.form.reset(None);
                drop(guard);
                Ok(SubmitOutcome::Completed)
            }
            Err(err) => {
                tracing::warn!(
                    form = self.form.schema().name(),
                    error = %err,
                    "submission failed"
                );
                self.failure = Some(err.to_string());
                drop(guard);
                Err(SubmitError::Remote(err))
            }
        }
    }
}
