//! Typed records for the hospital-administration domain.
//!
//! This crate holds the entity snapshots the admin screens read and the
//! payload types they write back. Records are owned by the external data
//! layer; forms read a snapshot when a dialog opens and send a payload
//! when it submits.

pub mod doctor;
pub mod insurance;
pub mod kind;
pub mod medical_test;
pub mod session;

pub use doctor::{Doctor, DoctorPayload};
pub use insurance::{InsuranceCompany, InsuranceCompanyPayload};
pub use kind::EntityKind;
pub use medical_test::{MedicalTest, MedicalTestPayload};
pub use session::SessionContext;
