use crate::{
    api::{ApiClient, ApiError, DashboardStats},
    utils::fallback::{live_or_demo, Feed},
};
use std::rc::Rc;

#[derive(Clone)]
pub struct DashboardRepository {
    client: Rc<ApiClient>,
}

impl DashboardRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn load_stats(&self) -> Result<Feed<DashboardStats>, ApiError> {
        live_or_demo(self.client.dashboard_stats().await, demo_stats)
    }
}

pub fn demo_stats() -> DashboardStats {
    DashboardStats {
        total_users: 498,
        total_patients: 450,
        total_doctors: 48,
        total_cases: 1247,
        total_revenue: 156_750.0,
        system_health: "excellent".into(),
    }
}
