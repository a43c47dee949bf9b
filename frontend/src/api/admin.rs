use log::info;
use serde_json::json;

use super::{
    client::{ApiClient, AuthScope},
    types::{AdminUser, ApiError, DashboardStats, MedicalCase, Transaction, UserActivation},
};

impl ApiClient {
    pub async fn dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        self.get_json("/api/admin/dashboard/stats", AuthScope::Bearer)
            .await
    }

    pub async fn list_users(&self) -> Result<Vec<AdminUser>, ApiError> {
        self.get_json("/api/admin/users", AuthScope::BearerWithAdminKey)
            .await
    }

    pub async fn list_cases(&self) -> Result<Vec<MedicalCase>, ApiError> {
        self.get_json("/api/admin/cases", AuthScope::BearerWithAdminKey)
            .await
    }

    pub async fn list_transactions(&self) -> Result<Vec<Transaction>, ApiError> {
        self.get_json("/api/admin/transactions", AuthScope::BearerWithAdminKey)
            .await
    }

    pub async fn set_user_activation(
        &self,
        user_id: i64,
        action: UserActivation,
    ) -> Result<(), ApiError> {
        let segment = action.path_segment();
        self.send_authenticated(AuthScope::BearerWithAdminKey, |client, base| {
            client
                .post(format!("{}/admin/users/{}/{}", base, user_id, segment))
                .json(&json!({}))
        })
        .await?;
        info!("User {} {}d", user_id, segment);
        Ok(())
    }

    pub async fn activate_user(&self, user_id: i64) -> Result<(), ApiError> {
        self.set_user_activation(user_id, UserActivation::Activate)
            .await
    }

    pub async fn deactivate_user(&self, user_id: i64) -> Result<(), ApiError> {
        self.set_user_activation(user_id, UserActivation::Deactivate)
            .await
    }
}
