use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
#[cfg(not(target_arch = "wasm32"))]
pub const API_BASE_URL_ENV: &str = "CLINIC_ADMIN_API_BASE_URL";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

/// Trims whitespace and trailing slashes so paths can be appended directly.
pub fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

fn usable(raw: Option<String>) -> Option<String> {
    raw.map(|value| normalize_base_url(&value))
        .filter(|value| !value.is_empty())
}

fn cache_base_url(value: &str) -> String {
    let value = normalize_base_url(value);
    let _ = API_BASE_URL.set(value.clone());
    API_BASE_URL.get().cloned().unwrap_or(value)
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::RuntimeConfig;
    use wasm_bindgen::JsValue;

    const ENV_GLOBAL: &str = "__CLINIC_ADMIN_ENV";
    const CONFIG_GLOBAL: &str = "__CLINIC_ADMIN_CONFIG";

    fn read_global(global: &str, keys: [&str; 2]) -> Option<String> {
        let window = web_sys::window()?;
        let any = js_sys::Reflect::get(&window, &global.into()).ok()?;
        if any.is_undefined() || any.is_null() {
            return None;
        }
        let obj = js_sys::Object::from(any);
        keys.iter()
            .filter_map(|key| js_sys::Reflect::get(&obj, &(*key).into()).ok())
            .find(|value| !value.is_undefined() && !value.is_null())
            .and_then(|value| value.as_string())
    }

    /// `window.__CLINIC_ADMIN_ENV` wins over `window.__CLINIC_ADMIN_CONFIG`.
    pub(super) fn snapshot_from_globals() -> Option<String> {
        super::usable(read_global(ENV_GLOBAL, ["API_BASE_URL", "api_base_url"]))
            .or_else(|| super::usable(read_global(CONFIG_GLOBAL, ["api_base_url", "API_BASE_URL"])))
    }

    pub(super) fn write_window_config(url: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let obj = js_sys::Object::new();
        let _ = js_sys::Reflect::set(&obj, &"api_base_url".into(), &JsValue::from_str(url));
        let _ = js_sys::Reflect::set(&window, &CONFIG_GLOBAL.into(), &obj);
    }

    pub(super) async fn fetch_runtime_config() -> Option<RuntimeConfig> {
        let origin = web_sys::window()?.location().origin().ok()?;
        let resp = reqwest::get(format!("{}/config.json", origin)).await.ok()?;
        if !resp.status().is_success() {
            return None;
        }
        resp.json::<RuntimeConfig>().await.ok()
    }
}

#[cfg(target_arch = "wasm32")]
pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(existing) = browser::snapshot_from_globals() {
        return cache_base_url(&existing);
    }
    if let Some(url) = browser::fetch_runtime_config()
        .await
        .and_then(|cfg| usable(cfg.api_base_url))
    {
        browser::write_window_config(&url);
        return cache_base_url(&url);
    }
    log::warn!("No API base URL configured, using {}", DEFAULT_API_BASE_URL);
    cache_base_url(DEFAULT_API_BASE_URL)
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    let url = usable(std::env::var(API_BASE_URL_ENV).ok())
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
    cache_base_url(&url)
}

pub async fn init() {
    let url = await_api_base_url().await;
    log::info!("Admin API base URL: {}", url);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_trailing_slashes_and_whitespace() {
        assert_eq!(normalize_base_url(" http://api.test/ "), "http://api.test");
        assert_eq!(normalize_base_url("http://api.test//"), "http://api.test");
        assert_eq!(normalize_base_url("http://api.test"), "http://api.test");
    }

    #[test]
    fn usable_rejects_blank_values() {
        assert_eq!(usable(None), None);
        assert_eq!(usable(Some("   ".into())), None);
        assert_eq!(usable(Some("/".into())), None);
        assert_eq!(
            usable(Some("https://admin.example/".into())).as_deref(),
            Some("https://admin.example")
        );
    }

    #[test]
    fn runtime_config_reads_optional_base_url() {
        let cfg: RuntimeConfig =
            serde_json::from_str(r#"{"api_base_url":"https://api.clinic.test"}"#).unwrap();
        assert_eq!(cfg.api_base_url.as_deref(), Some("https://api.clinic.test"));
        let empty: RuntimeConfig = serde_json::from_str("{}").unwrap();
        assert!(empty.api_base_url.is_none());
    }
}
