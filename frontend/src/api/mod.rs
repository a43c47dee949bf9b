mod admin;
mod auth;
pub mod client;
pub mod types;

pub use client::*;
pub use types::*;

use crate::state::auth::use_session_guard;
use leptos::use_context;

/// Client from context, or one bound to the current session guard.
pub fn use_api_client() -> ApiClient {
    use_context::<ApiClient>().unwrap_or_else(|| ApiClient::new(use_session_guard()))
}
