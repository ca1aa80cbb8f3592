use thiserror::Error;

/// Problems with individual field operations.
#[derive(Debug, Error)]
pub enum FlowError {
    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error("input shape does not match field '{0}'")]
    InputShape(String),
}

/// Problems raised by a submission attempt.
///
/// Validation findings are not errors; they stay inside the form as
/// field issues. These are the failures that reach the caller.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Update requested with no target record selected. Caught before the
    /// in-flight flag is touched and before any network call.
    #[error("no target record selected for update")]
    MissingTarget,

    /// Form values missing or mistyped for the mutation's payload.
    #[error("form values incomplete: {0}")]
    Payload(String),

    /// The external create/update call failed. The dialog stays open with
    /// field values intact so the user can retry.
    #[error(transparent)]
    Remote(#[from] anyhow::Error),
}
