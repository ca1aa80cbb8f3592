//! List-cache invalidation.

use cura_model::EntityKind;
use std::sync::atomic::{AtomicU64, Ordering};

/// Invalidation hook for the external fetching layer.
///
/// The fetching layer keys its list queries by the current stamp; bumping
/// the stamp makes the next read refetch instead of serving a stale list.
pub trait ListCache: Send + Sync {
    fn invalidate(&self, kind: EntityKind);
    fn stamp(&self, kind: EntityKind) -> u64;
}

/// Per-kind epoch counters.
#[derive(Debug, Default)]
pub struct EpochCache {
    doctors: AtomicU64,
    medical_tests: AtomicU64,
    insurance_companies: AtomicU64,
}

impl EpochCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, kind: EntityKind) -> &AtomicU64 {
        match kind {
            EntityKind::Doctor => &self.doctors,
            EntityKind::MedicalTest => &self.medical_tests,
            EntityKind::InsuranceCompany => &self.insurance_companies,
        }
    }
}

impl ListCache for EpochCache {
    fn invalidate(&self, kind: EntityKind) {
        let epoch = self.slot(kind).fetch_add(1, Ordering::AcqRel) + 1;
        tracing::debug!(kind = %kind, epoch, "list invalidated");
    }

    fn stamp(&self, kind: EntityKind) -> u64 {
        self.slot(kind).load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalidation_bumps_only_the_matching_kind() {
        let cache = EpochCache::new();
        assert_eq!(cache.stamp(EntityKind::Doctor), 0);

        cache.invalidate(EntityKind::Doctor);
        assert_eq!(cache.stamp(EntityKind::Doctor), 1);
        assert_eq!(cache.stamp(EntityKind::MedicalTest), 0);
        assert_eq!(cache.stamp(EntityKind::InsuranceCompany), 0);
    }
}
