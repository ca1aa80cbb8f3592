use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A bookable medical test offered by the hospital.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicalTest {
    pub id: Uuid,
    pub hospital_id: Uuid,
    pub name: String,
    pub description: String,
    pub cost: f64,
    pub duration_minutes: i64,
    /// Hours the patient must fast beforehand; zero means no fasting.
    #[serde(default)]
    pub fasting_hours: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MedicalTestPayload {
    pub name: String,
    pub description: String,
    pub cost: f64,
    pub duration_minutes: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fasting_hours: Option<i64>,
}
