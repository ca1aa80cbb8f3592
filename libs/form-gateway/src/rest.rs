//! HTTP implementation of the data-layer contract.

use crate::error::{GatewayError, Result};
use crate::traits::AdminGateway;
use async_trait::async_trait;
use cura_model::{
    Doctor, DoctorPayload, EntityKind, InsuranceCompany, InsuranceCompanyPayload, MedicalTest,
    MedicalTestPayload, SessionContext,
};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use uuid::Uuid;

/// Gateway over the hospital-administration REST API.
///
/// Records live under `/hospitals/{hospital_id}/<collection>`; the
/// hospital id comes from the injected session context on every call.
pub struct RestGateway {
    client: Client,
    base_url: String,
}

impl RestGateway {
    /// Create a gateway with default settings.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    fn collection_url(&self, ctx: &SessionContext, kind: EntityKind) -> String {
        format!(
            "{}/hospitals/{}/{}",
            self.base_url,
            ctx.hospital_id,
            kind.path_segment()
        )
    }

    fn record_url(&self, ctx: &SessionContext, kind: EntityKind, id: Uuid) -> String {
        format!("{}/{}", self.collection_url(ctx, kind), id)
    }

    async fn fetch<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.client.get(url).send().await?;
        Self::parse(response).await
    }

    async fn send<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        method: Method,
        url: &str,
        body: &B,
    ) -> Result<T> {
        tracing::debug!(%method, url, "sending record");
        let response = self.client.request(method, url).json(body).send().await?;
        Self::parse(response).await
    }

    async fn remove(&self, url: &str) -> Result<()> {
        let response = self.client.delete(url).send().await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn parse<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let response = Self::check(response).await?;
        Ok(response.json().await?)
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        tracing::warn!(status = status.as_u16(), message, "request rejected");
        Err(GatewayError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl AdminGateway for RestGateway {
    async fn list_doctors(&self, ctx: &SessionContext) -> Result<Vec<Doctor>> {
        self.fetch(&self.collection_url(ctx, EntityKind::Doctor)).await
    }

    async fn create_doctor(&self, ctx: &SessionContext, payload: &DoctorPayload) -> Result<Doctor> {
        self.send(Method::POST, &self.collection_url(ctx, EntityKind::Doctor), payload)
            .await
    }

    async fn update_doctor(
        &self,
        ctx: &SessionContext,
        id: Uuid,
        payload: &DoctorPayload,
    ) -> Result<Doctor> {
        self.send(Method::PUT, &self.record_url(ctx, EntityKind::Doctor, id), payload)
            .await
    }

    async fn delete_doctor(&self, ctx: &SessionContext, id: Uuid) -> Result<()> {
        self.remove(&self.record_url(ctx, EntityKind::Doctor, id)).await
    }

    async fn list_medical_tests(&self, ctx: &SessionContext) -> Result<Vec<MedicalTest>> {
        self.fetch(&self.collection_url(ctx, EntityKind::MedicalTest)).await
    }

    async fn create_medical_test(
        &self,
        ctx: &SessionContext,
        payload: &MedicalTestPayload,
    ) -> Result<MedicalTest> {
        self.send(
            Method::POST,
            &self.collection_url(ctx, EntityKind::MedicalTest),
            payload,
        )
        .await
    }

    async fn update_medical_test(
        &self,
        ctx: &SessionContext,
        id: Uuid,
        payload: &MedicalTestPayload,
    ) -> Result<MedicalTest> {
        self.send(
            Method::PUT,
            &self.record_url(ctx, EntityKind::MedicalTest, id),
            payload,
        )
        .await
    }

    async fn delete_medical_test(&self, ctx: &SessionContext, id: Uuid) -> Result<()> {
        self.remove(&self.record_url(ctx, EntityKind::MedicalTest, id)).await
    }

    async fn list_insurance_companies(&self, ctx: &SessionContext) -> Result<Vec<InsuranceCompany>> {
        self.fetch(&self.collection_url(ctx, EntityKind::InsuranceCompany))
            .await
    }

    async fn create_insurance_company(
        &self,
        ctx: &SessionContext,
        payload: &InsuranceCompanyPayload,
    ) -> Result<InsuranceCompany> {
        self.send(
            Method::POST,
            &self.collection_url(ctx, EntityKind::InsuranceCompany),
            payload,
        )
        .await
    }

    async fn update_insurance_company(
        &self,
        ctx: &SessionContext,
        id: Uuid,
        payload: &InsuranceCompanyPayload,
    ) -> Result<InsuranceCompany> {
        self.send(
            Method::PUT,
            &self.record_url(ctx, EntityKind::InsuranceCompany, id),
            payload,
        )
        .await
    }

    async fn delete_insurance_company(&self, ctx: &SessionContext, id: Uuid) -> Result<()> {
        self.remove(&self.record_url(ctx, EntityKind::InsuranceCompany, id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_are_scoped_by_hospital() {
        let gateway = RestGateway::new("https://api.clinic.example").unwrap();
        let hospital_id = Uuid::nil();
        let ctx = SessionContext::new(hospital_id);

        assert_eq!(
            gateway.collection_url(&ctx, EntityKind::Doctor),
            format!("https://api.clinic.example/hospitals/{hospital_id}/doctors")
        );

        let record_id = Uuid::nil();
        assert_eq!(
            gateway.record_url(&ctx, EntityKind::MedicalTest, record_id),
            format!("https://api.clinic.example/hospitals/{hospital_id}/medical-tests/{record_id}")
        );
    }
}
