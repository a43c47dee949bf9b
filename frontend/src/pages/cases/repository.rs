use crate::{
    api::{ApiClient, ApiError, MedicalCase},
    utils::fallback::{live_or_demo, Feed},
};
use std::rc::Rc;

#[derive(Clone)]
pub struct CasesRepository {
    client: Rc<ApiClient>,
}

impl CasesRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn load_cases(&self) -> Result<Feed<Vec<MedicalCase>>, ApiError> {
        live_or_demo(self.client.list_cases().await, demo_cases)
    }
}

pub fn demo_cases() -> Vec<MedicalCase> {
    vec![
        MedicalCase {
            id: 1,
            patient_id: 1,
            doctor_id: Some(2),
            status: "completed".into(),
            created_at: "2024-08-25T10:30:00Z".into(),
            updated_at: "2024-08-26T15:45:00Z".into(),
            medical_history: Some("Patient experiencing chronic back pain for 3 months".into()),
            revenue: Some(200.0),
        },
        MedicalCase {
            id: 2,
            patient_id: 3,
            doctor_id: None,
            status: "submitted".into(),
            created_at: "2024-08-30T14:20:00Z".into(),
            updated_at: "2024-08-30T14:20:00Z".into(),
            medical_history: Some("Severe headaches and dizziness symptoms".into()),
            revenue: Some(200.0),
        },
        MedicalCase {
            id: 3,
            patient_id: 1,
            doctor_id: Some(2),
            status: "in_progress".into(),
            created_at: "2024-08-31T09:15:00Z".into(),
            updated_at: "2024-08-31T11:30:00Z".into(),
            medical_history: Some("Follow-up consultation for previous treatment".into()),
            revenue: Some(200.0),
        },
    ]
}
