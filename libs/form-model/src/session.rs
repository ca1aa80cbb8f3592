use uuid::Uuid;

/// Ambient identity for data-access calls.
///
/// Constructed once by the embedding application (after sign-in) and passed
/// explicitly into every gateway call, instead of being read from ambient
/// storage at call time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    /// The hospital whose records all calls are scoped to.
    pub hospital_id: Uuid,
}

impl SessionContext {
    pub fn new(hospital_id: Uuid) -> Self {
        Self { hospital_id }
    }
}
