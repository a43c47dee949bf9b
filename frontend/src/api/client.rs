use log::{error, warn};
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION},
    Client, RequestBuilder, Response, StatusCode,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{api::types::ApiError, config, state::auth::SessionGuard};

pub const ADMIN_KEY_HEADER: &str = "x-admin-key";

/// Which credentials an endpoint expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthScope {
    Bearer,
    BearerWithAdminKey,
}

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    session: SessionGuard,
}

impl ApiClient {
    pub fn new(session: SessionGuard) -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            session,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>, session: SessionGuard) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(config::normalize_base_url(&base_url.into())),
            session,
        }
    }

    #[cfg(test)]
    pub fn session(&self) -> &SessionGuard {
        &self.session
    }

    pub(super) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(super) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    /// Reads credentials from the session store. Missing credentials end the
    /// session the same way a 401 would.
    fn get_auth_headers(&self, scope: AuthScope) -> Result<HeaderMap, ApiError> {
        let stored = self.session.store().load();
        let token = stored.token.filter(|token| !token.is_empty());
        let admin_key = stored.admin_key.filter(|key| !key.is_empty());

        let Some(token) = token else {
            return Err(self.reject_session("No admin session"));
        };

        let mut headers = HeaderMap::new();
        let bearer = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|_| self.reject_session("Invalid token format"))?;
        headers.insert(AUTHORIZATION, bearer);

        if scope == AuthScope::BearerWithAdminKey {
            let Some(admin_key) = admin_key else {
                return Err(self.reject_session("No admin key"));
            };
            let value = HeaderValue::from_str(&admin_key)
                .map_err(|_| self.reject_session("Invalid admin key format"))?;
            headers.insert(HeaderName::from_static(ADMIN_KEY_HEADER), value);
        }

        Ok(headers)
    }

    fn reject_session(&self, reason: &str) -> ApiError {
        warn!("Ending admin session: {}", reason);
        self.session.logout();
        ApiError::unauthorized(reason)
    }

    pub(super) async fn send_authenticated(
        &self,
        scope: AuthScope,
        build: impl FnOnce(&Client, &str) -> RequestBuilder,
    ) -> Result<Response, ApiError> {
        let headers = self.get_auth_headers(scope)?;
        let base_url = self.resolved_base_url().await;
        let response = build(&self.client, &base_url)
            .headers(headers)
            .send()
            .await
            .map_err(|e| {
                error!("Admin API request failed: {}", e);
                ApiError::request_failed(format!("Request failed: {}", e))
            })?;
        self.handle_status(response).await
    }

    async fn handle_status(&self, response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let detail = read_error_detail(response).await;
        if Self::is_auth_failure(status) {
            warn!("Admin API rejected credentials ({})", status);
            self.session.logout();
            let message = detail.unwrap_or_else(|| "Admin session is no longer valid".into());
            return Err(if status == StatusCode::UNAUTHORIZED {
                ApiError::unauthorized(message)
            } else {
                ApiError::forbidden(message)
            });
        }
        Err(ApiError::http(
            status.as_u16(),
            detail.unwrap_or_else(|| "Server error occurred".into()),
        ))
    }

    pub(super) fn is_auth_failure(status: StatusCode) -> bool {
        status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN
    }

    pub(super) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        scope: AuthScope,
    ) -> Result<T, ApiError> {
        let response = self
            .send_authenticated(scope, |client, base| client.get(format!("{}{}", base, path)))
            .await?;
        parse_json(response).await
    }
}

pub(super) async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json()
        .await
        .map_err(|e| ApiError::invalid_response(format!("Failed to parse response: {}", e)))
}

/// Pulls the server's `detail` message out of an error body, if there is one.
pub(super) async fn read_error_detail(response: Response) -> Option<String> {
    let body: Value = response.json().await.ok()?;
    extract_detail(&body)
}

pub(super) fn extract_detail(body: &Value) -> Option<String> {
    match body.get("detail")? {
        Value::String(text) if !text.trim().is_empty() => Some(text.clone()),
        Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            (!messages.is_empty()).then(|| messages.join("; "))
        }
        _ => None,
    }
}
