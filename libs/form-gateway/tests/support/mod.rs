//! Shared test doubles for the flow tests.

// Each test binary compiles its own copy; not every binary uses every helper.
#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use cura_gateway::{AdminGateway, GatewayError, Result};
use cura_model::{
    Doctor, DoctorPayload, InsuranceCompany, InsuranceCompanyPayload, MedicalTest,
    MedicalTestPayload, SessionContext,
};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;
use uuid::Uuid;

/// Every interaction the gateway double has seen, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    ListDoctors,
    CreateDoctor(DoctorPayload),
    UpdateDoctor(Uuid, DoctorPayload),
    DeleteDoctor(Uuid),
    ListMedicalTests,
    CreateMedicalTest(MedicalTestPayload),
    UpdateMedicalTest(Uuid, MedicalTestPayload),
    DeleteMedicalTest(Uuid),
    ListInsuranceCompanies,
    CreateInsuranceCompany(InsuranceCompanyPayload),
    UpdateInsuranceCompany(Uuid, InsuranceCompanyPayload),
    DeleteInsuranceCompany(Uuid),
}

/// In-memory gateway that records calls and fabricates server responses.
///
/// `fail_next` makes the next call return a 500; `gate_next` makes the
/// next mutating call park until the returned handle is notified, so
/// tests can overlap submissions deterministically.
#[derive(Default)]
pub struct RecordingGateway {
    calls: Mutex<Vec<Call>>,
    fail_with: Mutex<Option<String>>,
    gate: Mutex<Option<Arc<Notify>>>,
}

impl RecordingGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn fail_next(&self, message: &str) {
        *self.fail_with.lock().unwrap() = Some(message.to_string());
    }

    pub fn gate_next(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.gate.lock().unwrap() = Some(gate.clone());
        gate
    }

    async fn enter(&self, call: Call) -> Result<()> {
        let gate = self.gate.lock().unwrap().take();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        self.calls.lock().unwrap().push(call);
        match self.fail_with.lock().unwrap().take() {
            Some(message) => Err(GatewayError::Status { status: 500, message }),
            None => Ok(()),
        }
    }
}

pub fn doctor_from(ctx: &SessionContext, payload: &DoctorPayload) -> Doctor {
    Doctor {
        id: Uuid::new_v4(),
        hospital_id: ctx.hospital_id,
        name: payload.name.clone(),
        email: payload.email.clone(),
        specialization: payload.specialization.clone(),
        phone_number: payload.phone_number.clone(),
        age: payload.age,
        years_of_experience: payload.years_of_experience,
        bio: payload.bio.clone(),
        location: payload.location.clone(),
        profile_image_url: payload.profile_image_url.clone(),
        nationality: payload.nationality.clone(),
        languages: payload.languages.clone(),
        insurance_company_ids: payload.insurance_company_ids.clone(),
        created_at: Utc::now(),
    }
}

pub fn medical_test_from(ctx: &SessionContext, payload: &MedicalTestPayload) -> MedicalTest {
    MedicalTest {
        id: Uuid::new_v4(),
        hospital_id: ctx.hospital_id,
        name: payload.name.clone(),
        description: payload.description.clone(),
        cost: payload.cost,
        duration_minutes: payload.duration_minutes,
        fasting_hours: payload.fasting_hours.unwrap_or(0),
        created_at: Utc::now(),
    }
}

pub fn insurance_company_from(
    ctx: &SessionContext,
    payload: &InsuranceCompanyPayload,
) -> InsuranceCompany {
    InsuranceCompany {
        id: Uuid::new_v4(),
        hospital_id: ctx.hospital_id,
        name: payload.name.clone(),
        email: payload.email.clone(),
        phone_number: payload.phone_number.clone(),
        description: payload.description.clone(),
        website: payload.website.clone(),
        created_at: Utc::now(),
    }
}

#[async_trait]
impl AdminGateway for RecordingGateway {
    async fn list_doctors(&self, _ctx: &SessionContext) -> Result<Vec<Doctor>> {
        self.enter(Call::ListDoctors).await?;
        Ok(Vec::new())
    }

    async fn create_doctor(&self, ctx: &SessionContext, payload: &DoctorPayload) -> Result<Doctor> {
        self.enter(Call::CreateDoctor(payload.clone())).await?;
        Ok(doctor_from(ctx, payload))
    }

    async fn update_doctor(
        &self,
        ctx: &SessionContext,
        id: Uuid,
        payload: &DoctorPayload,
    ) -> Result<Doctor> {
        self.enter(Call::UpdateDoctor(id, payload.clone())).await?;
        let mut doctor = doctor_from(ctx, payload);
        doctor.id = id;
        Ok(doctor)
    }

    async fn delete_doctor(&self, _ctx: &SessionContext, id: Uuid) -> Result<()> {
        self.enter(Call::DeleteDoctor(id)).await
    }

    async fn list_medical_tests(&self, _ctx: &SessionContext) -> Result<Vec<MedicalTest>> {
        self.enter(Call::ListMedicalTests).await?;
        Ok(Vec::new())
    }

    async fn create_medical_test(
        &self,
        ctx: &SessionContext,
        payload: &MedicalTestPayload,
    ) -> Result<MedicalTest> {
        self.enter(Call::CreateMedicalTest(payload.clone())).await?;
        Ok(medical_test_from(ctx, payload))
    }

    async fn update_medical_test(
        &self,
        ctx: &SessionContext,
        id: Uuid,
        payload: &MedicalTestPayload,
    ) -> Result<MedicalTest> {
        self.enter(Call::UpdateMedicalTest(id, payload.clone())).await?;
        let mut test = medical_test_from(ctx, payload);
        test.id = id;
        Ok(test)
    }

    async fn delete_medical_test(&self, _ctx: &SessionContext, id: Uuid) -> Result<()> {
        self.enter(Call::DeleteMedicalTest(id)).await
    }

    async fn list_insurance_companies(&self, _ctx: &SessionContext) -> Result<Vec<InsuranceCompany>> {
        self.enter(Call::ListInsuranceCompanies).await?;
        Ok(Vec::new())
    }

    async fn create_insurance_company(
        &self,
        ctx: &SessionContext,
        payload: &InsuranceCompanyPayload,
    ) -> Result<InsuranceCompany> {
        self.enter(Call::CreateInsuranceCompany(payload.clone())).await?;
        Ok(insurance_company_from(ctx, payload))
    }

    async fn update_insurance_company(
        &self,
        ctx: &SessionContext,
        id: Uuid,
        payload: &InsuranceCompanyPayload,
    ) -> Result<InsuranceCompany> {
        self.enter(Call::UpdateInsuranceCompany(id, payload.clone()))
            .await?;
        let mut company = insurance_company_from(ctx, payload);
        company.id = id;
        Ok(company)
    }

    async fn delete_insurance_company(&self, _ctx: &SessionContext, id: Uuid) -> Result<()> {
        self.enter(Call::DeleteInsuranceCompany(id)).await
    }
}
