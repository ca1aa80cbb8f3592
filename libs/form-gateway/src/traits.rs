//! The data-layer contract the admin screens depend on.

use crate::error::Result;
use async_trait::async_trait;
use cura_model::{
    Doctor, DoctorPayload, InsuranceCompany, InsuranceCompanyPayload, MedicalTest,
    MedicalTestPayload, SessionContext,
};
use uuid::Uuid;

/// CRUD over the hospital's administrative records.
///
/// Every call is scoped by the injected [`SessionContext`]. List reads
/// feed the tables and edit-dialog seeds; create/update are driven by the
/// form mutations; delete is a plain call from the list screens.
#[async_trait]
pub trait AdminGateway: Send + Sync {
    async fn list_doctors(&self, ctx: &SessionContext) -> Result<Vec<Doctor>>;
    async fn create_doctor(&self, ctx: &SessionContext, payload: &DoctorPayload) -> Result<Doctor>;
    async fn update_doctor(
        &self,
        ctx: &SessionContext,
        id: Uuid,
        payload: &DoctorPayload,
    ) -> Result<Doctor>;
    async fn delete_doctor(&self, ctx: &SessionContext, id: Uuid) -> Result<()>;

    async fn list_medical_tests(&self, ctx: &SessionContext) -> Result<Vec<MedicalTest>>;
    async fn create_medical_test(
        &self,
        ctx: &SessionContext,
        payload: &MedicalTestPayload,
    ) -> Result<MedicalTest>;
    async fn update_medical_test(
        &self,
        ctx: &SessionContext,
        id: Uuid,
        payload: &MedicalTestPayload,
    ) -> Result<MedicalTest>;
    async fn delete_medical_test(&self, ctx: &SessionContext, id: Uuid) -> Result<()>;

    async fn list_insurance_companies(&self, ctx: &SessionContext) -> Result<Vec<InsuranceCompany>>;
    async fn create_insurance_company(
        &self,
        ctx: &SessionContext,
        payload: &InsuranceCompanyPayload,
    ) -> Result<InsuranceCompany>;
    async fn update_insurance_company(
        &self,
        ctx: &SessionContext,
        id: Uuid,
        payload: &InsuranceCompanyPayload,
    ) -> Result<InsuranceCompany>;
    async fn delete_insurance_company(&self, ctx: &SessionContext, id: Uuid) -> Result<()>;
}
