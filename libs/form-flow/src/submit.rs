//! The seam between a form and the external data layer.

use crate::error::SubmitError;
use async_trait::async_trait;
use cura_fields::FormValues;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// One create/update operation, invoked at most once per accepted submit.
///
/// Implementations build their typed payload from the entered values, call
/// the data layer, and invalidate the relevant cached list on success.
#[async_trait]
pub trait Mutation: Send + Sync {
    type Output: Send;

    /// Structural checks that must fail before the in-flight flag is
    /// touched and before any network call, e.g. an update with no
    /// target record.
    fn preflight(&self) -> Result<(), SubmitError> {
        Ok(())
    }

    async fn run(&self, values: &FormValues) -> anyhow::Result<Self::Output>;
}

/// Scoped ownership of a form's in-flight flag.
///
/// Acquisition is a compare-and-swap, so a second submit while one is
/// outstanding fails to acquire and becomes a no-op. Drop releases the
/// flag on every exit path: success, error, or a cancelled future.
pub(crate) struct SubmitGuard {
    flag: Arc<AtomicBool>,
}

impl SubmitGuard {
    pub(crate) fn acquire(flag: Arc<AtomicBool>) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
            .then(|| Self { flag })
    }
}

impl Drop for SubmitGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
