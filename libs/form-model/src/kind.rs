use serde::{Deserialize, Serialize};

/// Record families managed by the admin screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Doctor,
    MedicalTest,
    InsuranceCompany,
}

impl EntityKind {
    /// Path segment used by the REST API for this record family.
    pub fn path_segment(&self) -> &'static str {
        match self {
            Self::Doctor => "doctors",
            Self::MedicalTest => "medical-tests",
            Self::InsuranceCompany => "insurance-companies",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Doctor => "doctor",
            Self::MedicalTest => "medical-test",
            Self::InsuranceCompany => "insurance-company",
        };
        write!(f, "{}", s)
    }
}
