//! Concrete mutations wiring the forms to the gateway.
//!
//! Each mutation builds its typed payload from the entered values, calls
//! the gateway exactly once, and invalidates the matching cached list on
//! success. Failures bubble to the dialog session, which keeps the form
//! open.

use crate::cache::ListCache;
use crate::traits::AdminGateway;
use async_trait::async_trait;
use cura_flow::forms;
use cura_flow::{FormValues, Mutation, SubmitError};
use cura_model::{Doctor, EntityKind, InsuranceCompany, MedicalTest, SessionContext};
use std::sync::Arc;
use uuid::Uuid;

/// Shared handles every mutation needs.
#[derive(Clone)]
pub struct MutationDeps {
    pub gateway: Arc<dyn AdminGateway>,
    pub cache: Arc<dyn ListCache>,
    pub ctx: SessionContext,
}

impl MutationDeps {
    pub fn new(
        gateway: Arc<dyn AdminGateway>,
        cache: Arc<dyn ListCache>,
        ctx: SessionContext,
    ) -> Self {
        Self { gateway, cache, ctx }
    }
}

pub struct CreateDoctor {
    deps: MutationDeps,
}

impl CreateDoctor {
    pub fn new(deps: MutationDeps) -> Self {
        Self { deps }
    }
}

#[async_trait]
impl Mutation for CreateDoctor {
    type Output = Doctor;

    async fn run(&self, values: &FormValues) -> anyhow::Result<Doctor> {
        let payload = forms::doctor::payload(values)?;
        let doctor = self.deps.gateway.create_doctor(&self.deps.ctx, &payload).await?;
        self.deps.cache.invalidate(EntityKind::Doctor);
        tracing::info!(id = %doctor.id, "doctor created");
        Ok(doctor)
    }
}

pub struct UpdateDoctor {
    deps: MutationDeps,
    /// The record being edited; `None` when the dialog lost its target.
    target: Option<Uuid>,
}

impl UpdateDoctor {
    pub fn new(deps: MutationDeps, target: Option<Uuid>) -> Self {
        Self { deps, target }
    }
}

#[async_trait]
impl Mutation for UpdateDoctor {
    type Output = Doctor;

    fn preflight(&self) -> Result<(), SubmitError> {
        self.target.map(|_| ()).ok_or(SubmitError::MissingTarget)
    }

    async fn run(&self, values: &FormValues) -> anyhow::Result<Doctor> {
        let Some(id) = self.target else {
            return Err(SubmitError::MissingTarget.into());
        };
        let payload = forms::doctor::payload(values)?;
        let doctor = self
            .deps
            .gateway
            .update_doctor(&self.deps.ctx, id, &payload)
            .await?;
        self.deps.cache.invalidate(EntityKind::Doctor);
        tracing::info!(id = %doctor.id, "doctor updated");
        Ok(doctor)
    }
}

pub struct CreateMedicalTest {
    deps: MutationDeps,
}

impl CreateMedicalTest {
    pub fn new(deps: MutationDeps) -> Self {
        Self { deps }
    }
}

#[async_trait]
impl Mutation for CreateMedicalTest {
    type Output = MedicalTest;

    async fn run(&self, values: &FormValues) -> anyhow::Result<MedicalTest> {
        let payload = forms::medical_test::payload(values)?;
        let test = self
            .deps
            .gateway
            .create_medical_test(&self.deps.ctx, &payload)
            .await?;
        self.deps.cache.invalidate(EntityKind::MedicalTest);
        tracing::info!(id = %test.id, "medical test created");
        Ok(test)
    }
}

pub struct UpdateMedicalTest {
    deps: MutationDeps,
    target: Option<Uuid>,
}

impl UpdateMedicalTest {
    pub fn new(deps: MutationDeps, target: Option<Uuid>) -> Self {
        Self { deps, target }
    }
}

#[async_trait]
impl Mutation for UpdateMedicalTest {
    type Output = MedicalTest;

    fn preflight(&self) -> Result<(), SubmitError> {
        self.target.map(|_| ()).ok_or(SubmitError::MissingTarget)
    }

    async fn run(&self, values: &FormValues) -> anyhow::Result<MedicalTest> {
        let Some(id) = self.target else {
            return Err(SubmitError::MissingTarget.into());
        };
        let payload = forms::medical_test::payload(values)?;
        let test = self
            .deps
            .gateway
            .update_medical_test(&self.deps.ctx, id, &payload)
            .await?;
        self.deps.cache.invalidate(EntityKind::MedicalTest);
        tracing::info!(id = %test.id, "medical test updated");
        Ok(test)
    }
}

pub struct CreateInsuranceCompany {
    deps: MutationDeps,
}

impl CreateInsuranceCompany {
    pub fn new(deps: MutationDeps) -> Self {
        Self { deps }
    }
}

#[async_trait]
impl Mutation for CreateInsuranceCompany {
    type Output = InsuranceCompany;

    async fn run(&self, values: &FormValues) -> anyhow::Result<InsuranceCompany> {
        let payload = forms::insurance::payload(values)?;
        let company = self
            .deps
            .gateway
            .create_insurance_company(&self.deps.ctx, &payload)
            .await?;
        self.deps.cache.invalidate(EntityKind::InsuranceCompany);
        tracing::info!(id = %company.id, "insurance company created");
        Ok(company)
    }
}

pub struct UpdateInsuranceCompany {
    deps: MutationDeps,
    target: Option<Uuid>,
}

impl UpdateInsuranceCompany {
    pub fn new(deps: MutationDeps, target: Option<Uuid>) -> Self {
        Self { deps, target }
    }
}

#[async_trait]
impl Mutation for UpdateInsuranceCompany {
    type Output = InsuranceCompany;

    fn preflight(&self) -> Result<(), SubmitError> {
        self.target.map(|_| ()).ok_or(SubmitError::MissingTarget)
    }

    async fn run(&self, values: &FormValues) -> anyhow::Result<InsuranceCompany> {
        let Some(id) = self.target else {
            return Err(SubmitError::MissingTarget.into());
        };
        let payload = forms::insurance::payload(values)?;
        let company = self
            .deps
            .gateway
            .update_insurance_company(&self.deps.ctx, id, &payload)
            .await?;
        self.deps.cache.invalidate(EntityKind::InsuranceCompany);
        tracing::info!(id = %company.id, "insurance company updated");
        Ok(company)
    }
}
