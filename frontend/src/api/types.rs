use leptos::*;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub admin_key: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(deserialize_with = "string_or_number")]
    pub user_id: String,
    pub role: String,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Number(number) => number.to_string(),
    })
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    #[serde(default)]
    pub total_users: u64,
    #[serde(default)]
    pub total_patients: u64,
    #[serde(default)]
    pub total_doctors: u64,
    #[serde(default)]
    pub total_cases: u64,
    #[serde(default)]
    pub total_revenue: f64,
    #[serde(default = "unknown_health")]
    pub system_health: String,
}

fn unknown_health() -> String {
    "unknown".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: i64,
    pub role: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub mobile_number: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    pub created_at: String,
    #[serde(default)]
    pub last_login: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicalCase {
    pub id: i64,
    pub patient_id: i64,
    #[serde(default)]
    pub doctor_id: Option<i64>,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default)]
    pub medical_history: Option<String>,
    #[serde(default)]
    pub revenue: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub case_id: Option<i64>,
    #[serde(default)]
    pub patient_id: Option<i64>,
    #[serde(default)]
    pub doctor_id: Option<i64>,
    pub amount: f64,
    #[serde(default)]
    pub platform_share: Option<f64>,
    pub status: String,
    pub created_at: String,
    #[serde(default)]
    pub payment_method: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserActivation {
    Activate,
    Deactivate,
}

impl UserActivation {
    /// Action that flips the user's current state.
    pub fn toggle_for(is_active: bool) -> Self {
        if is_active {
            Self::Deactivate
        } else {
            Self::Activate
        }
    }

    pub fn path_segment(self) -> &'static str {
        match self {
            Self::Activate => "activate",
            Self::Deactivate => "deactivate",
        }
    }

    pub fn resulting_active_state(self) -> bool {
        matches!(self, Self::Activate)
    }
}

pub const CODE_VALIDATION: &str = "VALIDATION_ERROR";
pub const CODE_UNKNOWN: &str = "UNKNOWN";
pub const CODE_REQUEST_FAILED: &str = "REQUEST_FAILED";
pub const CODE_UNAUTHORIZED: &str = "UNAUTHORIZED";
pub const CODE_FORBIDDEN: &str = "FORBIDDEN";
pub const CODE_HTTP: &str = "HTTP_ERROR";
pub const CODE_INVALID_RESPONSE: &str = "INVALID_RESPONSE";
pub const CODE_UNAUTHORIZED_ROLE: &str = "UNAUTHORIZED_ROLE";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for ApiError {}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    fn with_code(msg: impl Into<String>, code: &str) -> Self {
        Self {
            error: msg.into(),
            code: code.to_string(),
            details: None,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_code(msg, CODE_VALIDATION)
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::with_code(msg, CODE_UNKNOWN)
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self::with_code(msg, CODE_REQUEST_FAILED)
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::with_code(msg, CODE_UNAUTHORIZED)
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::with_code(msg, CODE_FORBIDDEN)
    }

    pub fn invalid_response(msg: impl Into<String>) -> Self {
        Self::with_code(msg, CODE_INVALID_RESPONSE)
    }

    pub fn http(status: u16, msg: impl Into<String>) -> Self {
        Self {
            details: Some(serde_json::json!({ "status": status })),
            ..Self::with_code(msg, CODE_HTTP)
        }
    }

    /// 401/403 from the server, or a call attempted without credentials.
    pub fn is_auth_rejected(&self) -> bool {
        self.code == CODE_UNAUTHORIZED || self.code == CODE_FORBIDDEN
    }

    #[cfg(test)]
    pub fn is_unavailable(&self) -> bool {
        self.code == CODE_REQUEST_FAILED
    }
}
