use crate::api::{ApiError, CODE_VALIDATION};
use leptos::*;

fn detail_messages(error: &ApiError) -> Vec<String> {
    if error.code != CODE_VALIDATION {
        return Vec::new();
    }
    error
        .details
        .as_ref()
        .and_then(|details| details.get("errors"))
        .and_then(|errors| errors.as_array())
        .map(|errors| {
            errors
                .iter()
                .filter_map(|err| err.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

#[component]
pub fn InlineErrorMessage(#[prop(into)] error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div
                class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded space-y-1 my-2"
                role="alert"
            >
                <div class="font-bold">{move || error.get().map(|e| e.error).unwrap_or_default()}</div>
                {move || {
                    let messages = error.get().map(|e| detail_messages(&e)).unwrap_or_default();
                    (!messages.is_empty()).then(|| view! {
                        <ul class="list-disc list-inside text-sm">
                            {messages.into_iter().map(|msg| view! { <li>{msg}</li> }).collect_view()}
                        </ul>
                    })
                }}
            </div>
        </Show>
    }
}
