//! REST data-layer boundary for the admin screens.
//!
//! The forms talk to an [`AdminGateway`]; production wires in the
//! [`RestGateway`] over HTTP, tests substitute a recording double. On a
//! successful mutation the matching cached list is invalidated through
//! [`ListCache`] so the fetching layer refetches it.

pub mod cache;
pub mod error;
pub mod mutations;
pub mod rest;
pub mod traits;

pub use cache::{EpochCache, ListCache};
pub use error::{GatewayError, Result};
pub use mutations::{
    CreateDoctor, CreateInsuranceCompany, CreateMedicalTest, MutationDeps, UpdateDoctor,
    UpdateInsuranceCompany, UpdateMedicalTest,
};
pub use rest::RestGateway;
pub use traits::AdminGateway;
