use log::{info, warn};
use reqwest::StatusCode;

use super::{
    client::{parse_json, read_error_detail, ApiClient},
    types::{ApiError, LoginRequest, LoginResponse},
};

pub const INVALID_CREDENTIALS: &str = "Invalid admin credentials. Access denied.";
pub const INSUFFICIENT_PRIVILEGES: &str = "Insufficient privileges. Admin access required.";
pub const CONNECTION_FAILED: &str = "Unable to connect to server. Please check your connection.";

impl ApiClient {
    /// Unauthenticated: a rejection here is a credential error, not a session loss.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .post(format!("{}/api/admin/login", base_url))
            .json(request)
            .send()
            .await
            .map_err(|e| {
                warn!("Admin login request failed: {}", e);
                ApiError::request_failed(CONNECTION_FAILED)
            })?;

        let status = response.status();
        if status.is_success() {
            let login: LoginResponse = parse_json(response).await?;
            info!("Admin login accepted for user {}", login.user_id);
            return Ok(login);
        }

        warn!("Admin login rejected with status {}", status);
        Err(match status {
            StatusCode::UNAUTHORIZED => ApiError::unauthorized(INVALID_CREDENTIALS),
            StatusCode::FORBIDDEN => ApiError::forbidden(INSUFFICIENT_PRIVILEGES),
            _ => ApiError::http(
                status.as_u16(),
                read_error_detail(response)
                    .await
                    .unwrap_or_else(|| "Server error occurred".into()),
            ),
        })
    }
}
